use super::super::utils::{employee_option_label, AttendanceDraft};
use crate::{
    api::{AttendanceStatus, Employee},
    components::error::FormError,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn MarkAttendanceForm(
    #[prop(into)] draft: Signal<AttendanceDraft>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    on_employee: Callback<String>,
    on_date: Callback<String>,
    on_status: Callback<AttendanceStatus>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <FormError error=error />
            <label class="block">
                <span class="block text-sm font-medium text-fg mb-2">"Employee *"</span>
                <select
                    class="w-full px-3 py-2 border border-border rounded-lg"
                    required=true
                    on:change=move |ev| on_employee.call(event_target_value(&ev))
                    prop:value=move || draft.with(|d| d.employee_id.clone())
                >
                    <option value="">"Select an employee"</option>
                    {move || employees
                        .get()
                        .into_iter()
                        .map(|employee| {
                            let label = employee_option_label(&employee);
                            view! { <option value=employee.employee_id>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="block">
                <span class="block text-sm font-medium text-fg mb-2">"Date *"</span>
                <input
                    type="date"
                    required=true
                    class="w-full px-3 py-2 border border-border rounded-lg"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| on_date.call(event_target_value(&ev))
                />
            </label>
            <fieldset>
                <legend class="block text-sm font-medium text-fg mb-2">"Status *"</legend>
                <div class="flex gap-6">
                    {AttendanceStatus::ALL
                        .into_iter()
                        .map(|status| view! {
                            <label class="flex items-center gap-2">
                                <input
                                    type="radio"
                                    name="status"
                                    value=status.as_str()
                                    prop:checked=move || draft.with(|d| d.status == status)
                                    on:change=move |_| on_status.call(status)
                                />
                                <span>{status.as_str()}</span>
                            </label>
                        })
                        .collect_view()}
                </div>
            </fieldset>
            <div class="flex justify-end gap-3 pt-4">
                <button
                    type="button"
                    class="px-4 py-2 border border-border rounded-lg text-fg hover:bg-surface-muted disabled:opacity-50"
                    disabled=move || submitting.get()
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded-lg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Marking..." } else { "Mark Attendance" }}
                </button>
            </div>
        </form>
    }
}
