use super::super::utils::{employee_option_label, AttendanceFilters, FilterField};
use crate::{api::Employee, components::common::{Button, ButtonVariant}};
use leptos::*;

#[component]
pub fn AttendanceFiltersBar(
    #[prop(into)] filters: Signal<AttendanceFilters>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_input: Callback<(FilterField, String)>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-fg mb-4">"Filters"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <label class="block">
                    <span class="block text-sm font-medium text-fg mb-2">"Employee"</span>
                    <select
                        class="w-full px-3 py-2 border border-border rounded-lg"
                        on:change=move |ev| on_input.call((FilterField::Employee, event_target_value(&ev)))
                        prop:value=move || filters.with(|f| f.employee_id.clone())
                    >
                        <option value="">"All Employees"</option>
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
                    <span class="block text-sm font-medium text-fg mb-2">"Start Date"</span>
                    <input
                        type="date"
                        class="w-full px-3 py-2 border border-border rounded-lg"
                        prop:value=move || filters.with(|f| f.start_date.clone())
                        on:input=move |ev| on_input.call((FilterField::StartDate, event_target_value(&ev)))
                    />
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-fg mb-2">"End Date"</span>
                    <input
                        type="date"
                        class="w-full px-3 py-2 border border-border rounded-lg"
                        prop:value=move || filters.with(|f| f.end_date.clone())
                        on:input=move |ev| on_input.call((FilterField::EndDate, event_target_value(&ev)))
                    />
                </label>
                <div class="flex items-end gap-2">
                    <Button class="flex-1" on:click=move |_| on_apply.call(())>"Apply"</Button>
                    <Button class="flex-1" variant=ButtonVariant::Secondary on:click=move |_| on_clear.call(())>
                        "Clear"
                    </Button>
                </div>
            </div>
        </div>
    }
}
