use super::{
    components::{AttendanceFiltersBar, AttendanceTable, EmployeeStatsView, MarkAttendanceForm},
    view_model::use_attendance_view_model,
};
use crate::{
    components::{
        common::Button,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
        modal::Modal,
    },
    state::ViewStatus,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Title text="Attendance | HRMS Lite"/>
        <Layout>
            <AttendancePanel/>
        </Layout>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();

    let status = Signal::derive(move || vm.status());
    let records = Signal::derive(move || vm.records());
    let employees = Signal::derive(move || vm.employees());
    let employees_error = Signal::derive(move || vm.employees_error());
    let filters = Signal::from(vm.filters);
    let notice = Signal::derive(move || vm.notice.with(|notice| notice.current.clone()));
    let form_open = Signal::derive(move || vm.form.with(|form| form.open));
    let draft = Signal::derive(move || vm.form.with(|form| form.draft.clone()));
    let form_error = Signal::derive(move || vm.form.with(|form| form.error.clone()));
    let submitting = Signal::from(vm.mark_action.pending());
    let stats = Signal::from(vm.stats);
    let stats_open = Signal::derive(move || vm.stats.with(Option::is_some));
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let deleting = Signal::from(vm.delete_action.pending());

    let on_retry = Callback::new(vm.on_retry());
    let on_filter_input = Callback::new(vm.on_filter_input());
    let on_apply = Callback::new(vm.on_apply_filters());
    let on_clear = Callback::new(vm.on_clear_filters());
    let on_open = Callback::new(vm.on_open_form());
    let on_close = Callback::new(vm.on_close_form());
    let on_employee = Callback::new(vm.on_select_employee());
    let on_date = Callback::new(vm.on_select_date());
    let on_status = Callback::new(vm.on_select_status());
    let on_submit = Callback::new(vm.on_submit());
    let on_dismiss = Callback::new(vm.on_dismiss_notice());
    let on_view_stats = Callback::new(vm.on_view_stats());
    let on_close_stats = Callback::new(vm.on_close_stats());
    let on_delete = Callback::new(vm.on_request_delete());
    let on_confirm_delete = Callback::new(vm.on_confirm_delete());
    let on_cancel_delete = Callback::new(vm.on_cancel_delete());

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Attendance"</h1>
                    <p class="mt-2 text-fg-muted">"Track employee attendance"</p>
                </div>
                <Button on:click=move |_| on_open.call(())>"Mark Attendance"</Button>
            </div>
            {move || notice.get().map(|notice| view! {
                <SuccessMessage message=notice.message on_dismiss=on_dismiss />
            })}
            {move || employees_error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <AttendanceFiltersBar
                filters=filters
                employees=employees
                on_input=on_filter_input
                on_apply=on_apply
                on_clear=on_clear
            />
            {move || match status.get() {
                ViewStatus::Loading => view! { <LoadingSpinner message="Loading attendance records..." /> }.into_view(),
                ViewStatus::Error(message) => view! { <ErrorMessage message=message on_retry=on_retry /> }.into_view(),
                ViewStatus::Empty => view! {
                    <EmptyState
                        title="No attendance records found"
                        description="Start marking attendance to see records here."
                        action=view! {
                            <Button on:click=move |_| on_open.call(())>"Mark Attendance"</Button>
                        }
                        .into_view()
                    />
                }
                .into_view(),
                ViewStatus::Populated => view! {
                    <AttendanceTable records=records on_view_stats=on_view_stats on_delete=on_delete />
                }
                .into_view(),
            }}
            <Modal is_open=form_open title="Mark Attendance" on_close=on_close>
                <MarkAttendanceForm
                    draft=draft
                    employees=employees
                    error=form_error
                    submitting=submitting
                    on_employee=on_employee
                    on_date=on_date
                    on_status=on_status
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </Modal>
            <Modal is_open=stats_open title="Employee Statistics" on_close=on_close_stats>
                {move || stats.get().map(|stats| view! { <EmployeeStatsView stats=stats /> })}
            </Modal>
            <ConfirmDialog
                is_open=confirm_open
                title="Delete attendance record"
                message="Are you sure you want to delete this attendance record?"
                confirm_label="Delete"
                confirm_disabled=deleting
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::super::{utils::ATTENDANCE_MARKED, view_model::AttendanceViewModel};
    use super::*;
    use crate::api::{ApiClient, AttendanceStatus, EmployeeStats};
    use crate::config::AppConfig;
    use crate::test_support::{
        fixtures::{date, record, staff},
        ssr::render_with_client,
    };

    fn client() -> ApiClient {
        ApiClient::new(AppConfig::new("http://localhost:9"))
    }

    #[test]
    fn panel_shows_loading_and_filters_before_first_response() {
        let html = render_with_client(client(), || view! { <AttendancePanel/> });
        assert!(html.contains("Loading attendance records..."));
        assert!(html.contains("All Employees"));
    }

    #[test]
    fn panel_shows_empty_state_with_action() {
        let html = render_with_client(client(), || {
            let vm = AttendanceViewModel::new();
            vm.records_resource.set(Ok(Vec::new()));
            provide_context(vm);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("No attendance records found"));
        assert!(html.contains("Start marking attendance to see records here."));
    }

    #[test]
    fn panel_shows_records_notice_and_dropdown_error() {
        let html = render_with_client(client(), || {
            let vm = AttendanceViewModel::new();
            let staff = staff();
            vm.records_resource.set(Ok(vec![record(
                1,
                &staff[1],
                date(2025, 1, 2),
                AttendanceStatus::Present,
            )]));
            vm.employees_resource
                .set(Err("Failed to load employees for dropdown".into()));
            vm.notice.update(|notice| {
                notice.show(ATTENDANCE_MARKED);
            });
            provide_context(vm);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("Jan 2, 2025"));
        assert!(html.contains(ATTENDANCE_MARKED));
        assert!(html.contains("Failed to load employees for dropdown"));
    }

    #[test]
    fn banner_replaces_table_until_retry() {
        let html = render_with_client(client(), || {
            let vm = AttendanceViewModel::new();
            let staff = staff();
            vm.records_resource.set(Ok(vec![record(
                1,
                &staff[1],
                date(2025, 1, 2),
                AttendanceStatus::Present,
            )]));
            vm.action_error
                .set(Some("Failed to load employee statistics".into()));
            provide_context(vm);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("Failed to load employee statistics"));
        assert!(html.contains("Try again"));
        assert!(!html.contains("Ravi Kumar"));
    }

    #[test]
    fn stats_modal_opens_when_stats_are_loaded() {
        let html = render_with_client(client(), || {
            let vm = AttendanceViewModel::new();
            vm.stats.set(Some(EmployeeStats {
                employee_id: "EMP003".into(),
                full_name: "Meera Nair".into(),
                department: "Engineering".into(),
                total_present: 3,
                total_absent: 0,
                total_days: 3,
            }));
            provide_context(vm);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("Employee Statistics"));
        assert!(html.contains("Meera Nair"));
    }
}
