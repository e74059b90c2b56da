use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    utils::time::format_display_date,
};
use leptos::*;

const HEADERS: [&str; 5] = ["Employee", "Employee ID", "Date", "Status", "Actions"];

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-status-error-bg text-status-error-text"
        }
    }
}

#[component]
pub fn AttendanceTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    on_view_stats: Callback<String>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {HEADERS
                                .iter()
                                .map(|header| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {*header}
                                    </th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || records
                            .get()
                            .into_iter()
                            .map(|record| view! {
                                <AttendanceRow record=record on_view_stats=on_view_stats on_delete=on_delete />
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn AttendanceRow(
    record: AttendanceRecord,
    on_view_stats: Callback<String>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let employee_id = record.employee_id.clone();
    let record_id = record.id;
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">{record.employee_name().to_string()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{record.employee_id.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{format_display_date(record.date)}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=status_badge_class(record.status)>{record.status.as_str()}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                <button
                    type="button"
                    class="text-action-primary-bg hover:text-action-primary-bg-hover font-medium"
                    on:click=move |_| on_view_stats.call(employee_id.clone())
                >
                    "View Stats"
                </button>
                <button
                    type="button"
                    title="Delete record"
                    class="text-action-danger-bg hover:text-action-danger-bg-hover font-medium"
                    on:click=move |_| on_delete.call(record_id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
