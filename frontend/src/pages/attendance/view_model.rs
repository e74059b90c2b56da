use super::{
    repository,
    utils::{
        AttendanceDraft, AttendanceFilters, FilterField, NoticeState, RecordsQuery,
        ATTENDANCE_MARKED,
    },
};
use crate::{
    api::{
        ApiClient, AttendanceQuery, AttendanceRecord, AttendanceStatus, Employee, EmployeeStats,
        NewAttendance,
    },
    config::AppConfig,
    state::{FormState, ViewStatus},
    utils::{
        describe_error,
        error_message::{LOAD_ATTENDANCE, MARK_ATTENDANCE},
    },
};
use chrono_tz::Tz;
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub time_zone: Tz,
    /// Filters as last applied; the records resource re-runs whenever this changes.
    pub records_query: RwSignal<RecordsQuery>,
    pub records_resource: Resource<RecordsQuery, Result<Vec<AttendanceRecord>, String>>,
    pub employees_resource: Resource<(), Result<Vec<Employee>, String>>,
    /// Filter inputs as typed, not yet applied.
    pub filters: RwSignal<AttendanceFilters>,
    /// Page banner: invalid filters, failed stats lookups and failed deletes.
    pub action_error: RwSignal<Option<String>>,
    pub form: RwSignal<FormState<AttendanceDraft>>,
    pub notice: RwSignal<NoticeState>,
    pub stats: RwSignal<Option<EmployeeStats>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub mark_action: Action<NewAttendance, Result<AttendanceRecord, String>>,
    pub stats_action: Action<String, Result<EmployeeStats, String>>,
    pub delete_action: Action<i64, Result<(), String>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(AppConfig::load()));
        let time_zone = api.config().time_zone;
        let records_query = create_rw_signal(RecordsQuery::default());

        let api_for_records = api.clone();
        let records_resource = create_resource(
            move || records_query.get(),
            move |records| {
                let api = api_for_records.clone();
                async move { repository::fetch_records(&api, &records.query).await }
            },
        );

        let api_for_options = api.clone();
        let employees_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_options.clone();
                async move { repository::fetch_employee_options(&api).await }
            },
        );

        let api_for_mark = api.clone();
        let mark_attendance_action = create_action(move |payload: &NewAttendance| {
            let api = api_for_mark.clone();
            let payload = payload.clone();
            async move { repository::mark_attendance(&api, payload).await }
        });

        let api_for_stats = api.clone();
        let employee_stats_action = create_action(move |employee_id: &String| {
            let api = api_for_stats.clone();
            let employee_id = employee_id.clone();
            async move { repository::fetch_employee_stats(&api, employee_id).await }
        });

        let api_for_delete = api;
        let delete_record_action = create_action(move |record_id: &i64| {
            let api = api_for_delete.clone();
            let record_id = *record_id;
            async move { repository::delete_record(&api, record_id).await }
        });

        let vm = Self {
            time_zone,
            records_query,
            records_resource,
            employees_resource,
            filters: create_rw_signal(AttendanceFilters::default()),
            action_error: create_rw_signal(None),
            form: create_rw_signal(FormState::with_draft(AttendanceDraft::for_today(time_zone))),
            notice: create_rw_signal(NoticeState::default()),
            stats: create_rw_signal(None),
            pending_delete: create_rw_signal(None),
            mark_action: mark_attendance_action,
            stats_action: employee_stats_action,
            delete_action: delete_record_action,
        };

        create_effect(move |_| {
            if let Some(result) = mark_attendance_action.value().get() {
                vm.apply_marked(result);
            }
        });
        create_effect(move |_| {
            if let Some(result) = employee_stats_action.value().get() {
                vm.apply_stats(result);
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_record_action.value().get() {
                vm.apply_deleted(result);
            }
        });

        vm
    }

    pub fn status(&self) -> ViewStatus {
        let loaded = self.records_resource.get();
        ViewStatus::of_list(
            loaded.as_ref(),
            self.records_resource.loading().get(),
            self.action_error.get().as_deref(),
        )
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    /// A dropdown load failure is reported on its own and never blocks the records.
    pub fn employees_error(&self) -> Option<String> {
        self.employees_resource.get().and_then(Result::err)
    }

    fn refetch(&self) {
        self.records_query.update(|records| *records = records.refresh());
    }

    /// Validates the filter inputs and re-queries with the non-empty ones. Invalid
    /// input goes to the page banner and nothing is sent.
    pub fn apply_filters(&self) {
        match self.filters.with_untracked(AttendanceFilters::to_query) {
            Ok(query) => {
                self.action_error.set(None);
                self.records_query.update(|records| *records = records.with_query(query));
            }
            Err(err) => self
                .action_error
                .set(Some(describe_error(&err, &LOAD_ATTENDANCE))),
        }
    }

    pub fn clear_filters(&self) {
        self.filters.set(AttendanceFilters::default());
        self.action_error.set(None);
        self.records_query
            .update(|records| *records = records.with_query(AttendanceQuery::default()));
    }

    pub fn submit(&self) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(|form| form.draft.validate()) {
            Ok(payload) => {
                self.form.update(|form| form.clear_error());
                self.mark_action.dispatch(payload);
            }
            Err(err) => {
                let message = describe_error(&err, &MARK_ATTENDANCE);
                self.form.update(|form| form.reject(message));
            }
        }
    }

    pub fn apply_marked(&self, result: Result<AttendanceRecord, String>) {
        match result {
            Ok(_) => {
                let mut shown = 0;
                self.notice
                    .update(|notice| shown = notice.show(ATTENDANCE_MARKED));
                self.form
                    .update(|form| form.finish(AttendanceDraft::for_today(self.time_zone)));
                self.refetch();
                schedule_notice_dismiss(self.notice, shown);
            }
            Err(message) => self.form.update(|form| form.reject(message)),
        }
    }

    pub fn apply_stats(&self, result: Result<EmployeeStats, String>) {
        match result {
            Ok(stats) => self.stats.set(Some(stats)),
            Err(message) => self.action_error.set(Some(message)),
        }
    }

    pub fn apply_deleted(&self, result: Result<(), String>) {
        self.pending_delete.set(None);
        match result {
            Ok(()) => self.refetch(),
            Err(message) => self.action_error.set(Some(message)),
        }
    }

    /// Clears the banner and reloads with the filters already applied.
    pub fn on_retry(&self) -> impl Fn(()) + 'static {
        let vm = *self;
        move |_| {
            vm.action_error.set(None);
            vm.refetch();
        }
    }

    pub fn on_filter_input(&self) -> impl Fn((FilterField, String)) + 'static {
        let filters = self.filters;
        move |(field, value)| filters.update(|filters| filters.set(field, value))
    }

    pub fn on_apply_filters(&self) -> impl Fn(()) + 'static {
        let vm = *self;
        move |_| vm.apply_filters()
    }

    pub fn on_clear_filters(&self) -> impl Fn(()) + 'static {
        let vm = *self;
        move |_| vm.clear_filters()
    }

    pub fn on_open_form(&self) -> impl Fn(()) + 'static {
        let form = self.form;
        move |_| form.update(|form| form.open())
    }

    pub fn on_close_form(&self) -> impl Fn(()) + 'static {
        let form = self.form;
        let pending = self.mark_action.pending();
        move |_| {
            if !pending.get_untracked() {
                form.update(|form| form.close());
            }
        }
    }

    pub fn on_select_employee(&self) -> impl Fn(String) + 'static {
        let form = self.form;
        move |employee_id| {
            form.update(|form| {
                form.draft.employee_id = employee_id;
                form.clear_error();
            })
        }
    }

    pub fn on_select_date(&self) -> impl Fn(String) + 'static {
        let form = self.form;
        move |date| {
            form.update(|form| {
                form.draft.date = date;
                form.clear_error();
            })
        }
    }

    pub fn on_select_status(&self) -> impl Fn(AttendanceStatus) + 'static {
        let form = self.form;
        move |status| {
            form.update(|form| {
                form.draft.status = status;
                form.clear_error();
            })
        }
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) + 'static {
        let vm = *self;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    }

    pub fn on_dismiss_notice(&self) -> impl Fn(()) + 'static {
        let notice = self.notice;
        move |_| notice.update(|notice| notice.current = None)
    }

    pub fn on_view_stats(&self) -> impl Fn(String) + 'static {
        let stats_action = self.stats_action;
        move |employee_id| {
            if !stats_action.pending().get_untracked() {
                stats_action.dispatch(employee_id);
            }
        }
    }

    pub fn on_close_stats(&self) -> impl Fn(()) + 'static {
        let stats = self.stats;
        move |_| stats.set(None)
    }

    pub fn on_request_delete(&self) -> impl Fn(i64) + 'static {
        let pending_delete = self.pending_delete;
        let deleting = self.delete_action.pending();
        move |record_id| {
            if !deleting.get_untracked() {
                pending_delete.set(Some(record_id));
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
            let Some(record_id) = vm.pending_delete.get_untracked() else {
                return;
            };
            vm.action_error.set(None);
            vm.delete_action.dispatch(record_id);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_notice_dismiss(notice: RwSignal<NoticeState>, id: u64) {
    use super::utils::NOTICE_DISMISS_MS;

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        notice.try_update(|notice| notice.dismiss(id));
    });
}

// Host renders never run the timer; the notice stays until dismissed.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_notice_dismiss(_notice: RwSignal<NoticeState>, _id: u64) {}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
