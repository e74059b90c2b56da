use super::{
    repository,
    utils::{filter_employees, EmployeeDraft, EmployeeField},
};
use crate::{
    api::{ApiClient, Employee, NewEmployee},
    config::AppConfig,
    state::{FormState, ViewStatus},
    utils::{describe_error, error_message::CREATE_EMPLOYEE},
};
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, String>>,
    pub search: RwSignal<String>,
    pub form: RwSignal<FormState<EmployeeDraft>>,
    pub pending_delete: RwSignal<Option<String>>,
    /// Failure from a delete, shown in the page banner until the next retry.
    pub action_error: RwSignal<Option<String>>,
    pub create_action: Action<NewEmployee, Result<Employee, String>>,
    pub delete_action: Action<String, Result<(), String>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(AppConfig::load()));
        let reload = create_rw_signal(0u32);

        let api_for_list = api.clone();
        let employees_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_for_list.clone();
                async move { repository::fetch_employees(&api).await }
            },
        );

        let api_for_create = api.clone();
        let create_employee_action = create_action(move |payload: &NewEmployee| {
            let api = api_for_create.clone();
            let payload = payload.clone();
            async move { repository::create_employee(&api, payload).await }
        });

        let api_for_delete = api;
        let delete_employee_action = create_action(move |employee_id: &String| {
            let api = api_for_delete.clone();
            let employee_id = employee_id.clone();
            async move { repository::delete_employee(&api, employee_id).await }
        });

        let vm = Self {
            reload,
            employees_resource,
            search: create_rw_signal(String::new()),
            form: create_rw_signal(FormState::default()),
            pending_delete: create_rw_signal(None),
            action_error: create_rw_signal(None),
            create_action: create_employee_action,
            delete_action: delete_employee_action,
        };

        create_effect(move |_| {
            if let Some(result) = create_employee_action.value().get() {
                vm.apply_created(result);
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_employee_action.value().get() {
                vm.apply_deleted(result);
            }
        });

        vm
    }

    pub fn status(&self) -> ViewStatus {
        let loaded = self.employees_resource.get();
        ViewStatus::of_list(
            loaded.as_ref(),
            self.employees_resource.loading().get(),
            self.action_error.get().as_deref(),
        )
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn visible(&self) -> Vec<Employee> {
        let employees = self.employees();
        self.search.with(|term| filter_employees(&employees, term))
    }

    fn refetch(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    /// Validates the draft and dispatches the create. Invalid drafts never leave the
    /// browser.
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(|form| form.draft.validate()) {
            Ok(payload) => {
                self.form.update(|form| form.clear_error());
                self.create_action.dispatch(payload);
            }
            Err(err) => {
                let message = describe_error(&err, &CREATE_EMPLOYEE);
                self.form.update(|form| form.reject(message));
            }
        }
    }

    pub fn apply_created(&self, result: Result<Employee, String>) {
        match result {
            Ok(_) => {
                self.form.update(|form| form.finish(EmployeeDraft::default()));
                self.refetch();
            }
            Err(message) => self.form.update(|form| form.reject(message)),
        }
    }

    pub fn apply_deleted(&self, result: Result<(), String>) {
        self.pending_delete.set(None);
        match result {
            Ok(()) => self.refetch(),
            Err(message) => self.action_error.set(Some(message)),
        }
    }

    pub fn on_retry(&self) -> impl Fn(()) + 'static {
        let vm = *self;
        move |_| {
            vm.action_error.set(None);
            vm.refetch();
        }
    }

    pub fn on_search(&self) -> impl Fn(String) + 'static {
        let search = self.search;
        move |term| search.set(term)
    }

    pub fn on_open_form(&self) -> impl Fn(()) + 'static {
        let form = self.form;
        move |_| form.update(|form| form.open_fresh(EmployeeDraft::default()))
    }

    pub fn on_close_form(&self) -> impl Fn(()) + 'static {
        let form = self.form;
        let pending = self.create_action.pending();
        move |_| {
            if !pending.get_untracked() {
                form.update(|form| form.close());
            }
        }
    }

    pub fn on_field_input(&self) -> impl Fn((EmployeeField, String)) + 'static {
        let form = self.form;
        move |(field, value)| form.update(|form| form.draft.set(field, value))
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) + 'static {
        let vm = *self;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    }

    pub fn on_request_delete(&self) -> impl Fn(String) + 'static {
        let pending_delete = self.pending_delete;
        let deleting = self.delete_action.pending();
        move |employee_id| {
            if !deleting.get_untracked() {
                pending_delete.set(Some(employee_id));
            }
        }
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) + 'static {
        let pending_delete = self.pending_delete;
        let deleting = self.delete_action.pending();
        move |_| {
            if !deleting.get_untracked() {
                pending_delete.set(None);
            }
        }
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) + 'static {
        let vm = *self;
        move |_| {
            if vm.delete_action.pending().get_untracked() {
                return;
            }
            let Some(employee_id) = vm.pending_delete.get_untracked() else {
                return;
            };
            vm.action_error.set(None);
            vm.delete_action.dispatch(employee_id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures::employee, ssr::with_runtime};

    fn view_model() -> EmployeesViewModel {
        provide_context(ApiClient::new(AppConfig::new("http://localhost:9")));
        EmployeesViewModel::new()
    }

    #[test]
    fn view_model_is_shared_through_context() {
        with_runtime(|| {
            provide_context(ApiClient::new(AppConfig::new("http://localhost:9")));
            let first = use_employees_view_model();
            first.on_search()("asha".into());
            let second = use_employees_view_model();
            assert_eq!(second.search.get_untracked(), "asha");
        });
    }

    #[test]
    fn open_form_resets_previous_draft_and_error() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_field_input()((EmployeeField::FullName, "Stale".into()));
            vm.form.update(|form| form.reject("Full name is required"));
            vm.on_open_form()(());
            let form = vm.form.get_untracked();
            assert!(form.open);
            assert_eq!(form.draft, EmployeeDraft::default());
            assert_eq!(form.error, None);
        });
    }

    #[test]
    fn blank_required_field_is_rejected_without_dispatch() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_open_form()(());
            vm.on_field_input()((EmployeeField::EmployeeId, "EMP010".into()));
            vm.on_field_input()((EmployeeField::FullName, "  ".into()));

            vm.submit();

            assert_eq!(vm.create_action.version().get_untracked(), 0);
            let form = vm.form.get_untracked();
            assert_eq!(form.error.as_deref(), Some("Full name is required"));
            assert!(form.open);
        });
    }

    #[test]
    fn successful_create_closes_form_and_refetches_once() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_open_form()(());
            vm.on_field_input()((EmployeeField::FullName, "Nisha Pillai".into()));

            vm.apply_created(Ok(employee("EMP010", "Nisha Pillai", "HR")));

            assert_eq!(vm.reload.get_untracked(), 1);
            let form = vm.form.get_untracked();
            assert!(!form.open);
            assert_eq!(form.draft, EmployeeDraft::default());
        });
    }

    #[test]
    fn rejected_create_keeps_form_open_with_message() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_open_form()(());
            vm.on_field_input()((EmployeeField::EmployeeId, "EMP010".into()));

            vm.apply_created(Err("Employee ID 'EMP010' already exists".into()));

            assert_eq!(vm.reload.get_untracked(), 0);
            let form = vm.form.get_untracked();
            assert!(form.open);
            assert_eq!(form.error.as_deref(), Some("Employee ID 'EMP010' already exists"));
            assert_eq!(form.draft.employee_id, "EMP010");
        });
    }

    #[test]
    fn delete_outcomes_refetch_or_raise_banner() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_request_delete()("EMP001".into());
            assert_eq!(vm.pending_delete.get_untracked().as_deref(), Some("EMP001"));

            vm.apply_deleted(Ok(()));
            assert_eq!(vm.reload.get_untracked(), 1);
            assert_eq!(vm.pending_delete.get_untracked(), None);

            vm.on_request_delete()("EMP404".into());
            vm.apply_deleted(Err("Employee with ID 'EMP404' not found".into()));
            assert_eq!(vm.reload.get_untracked(), 1);
            assert_eq!(
                vm.action_error.get_untracked().as_deref(),
                Some("Employee with ID 'EMP404' not found")
            );

            vm.on_retry()(());
            assert_eq!(vm.action_error.get_untracked(), None);
            assert_eq!(vm.reload.get_untracked(), 2);
        });
    }

    #[test]
    fn confirm_without_pending_id_dispatches_nothing() {
        with_runtime(|| {
            let vm = view_model();
            vm.on_confirm_delete()(());
            assert_eq!(vm.delete_action.version().get_untracked(), 0);
        });
    }
}
