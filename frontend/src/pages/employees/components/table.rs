use crate::{api::Employee, pages::employees::utils::empty_message};
use leptos::*;

const HEADERS: [&str; 5] = ["Employee ID", "Name", "Email", "Department", "Actions"];

#[component]
pub fn EmployeeSearch(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <input
                type="text"
                placeholder="Search by ID, name, or email..."
                class="w-full pl-4 pr-4 py-2.5 border border-border rounded-lg focus:ring-2 focus:ring-action-primary-focus outline-none"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] total: Signal<usize>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-surface-muted">
                        <tr>
                            {HEADERS
                                .iter()
                                .map(|header| view! {
                                    <th class="px-4 py-3 md:px-6 text-left text-xs md:text-sm font-semibold text-fg-muted uppercase tracking-wider">
                                        {*header}
                                    </th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            let rows = employees.get();
                            match empty_message(total.get(), rows.len()) {
                                Some(message) => view! {
                                    <tr>
                                        <td colspan="5" class="px-4 py-8 md:px-6 text-center text-fg-muted">
                                            {message}
                                        </td>
                                    </tr>
                                }
                                .into_view(),
                                None => rows
                                    .into_iter()
                                    .map(|employee| view! { <EmployeeRow employee=employee on_delete=on_delete /> })
                                    .collect_view(),
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee, on_delete: Callback<String>) -> impl IntoView {
    let employee_id = employee.employee_id.clone();
    view! {
        <tr class="hover:bg-surface-muted transition-colors">
            <td class="px-4 py-3 md:px-6 md:py-4 text-sm text-fg font-medium">{employee.employee_id}</td>
            <td class="px-4 py-3 md:px-6 md:py-4 text-sm text-fg">{employee.full_name}</td>
            <td class="px-4 py-3 md:px-6 md:py-4 text-sm text-fg-muted">{employee.email}</td>
            <td class="px-4 py-3 md:px-6 md:py-4 text-sm text-fg-muted">{employee.department}</td>
            <td class="px-4 py-3 md:px-6 md:py-4 text-sm">
                <button
                    type="button"
                    title="Delete employee"
                    class="text-action-danger-bg hover:text-action-danger-bg-hover p-1 rounded"
                    on:click=move |_| on_delete.call(employee_id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures::staff, ssr::render_to_string};

    #[test]
    fn table_renders_rows() {
        let html = render_to_string(move || {
            let list = staff();
            let total = list.len();
            view! {
                <EmployeeTable
                    employees=Signal::derive(move || list.clone())
                    total=Signal::derive(move || total)
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("EMP001"));
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("Delete employee"));
    }

    #[test]
    fn table_explains_empty_results() {
        let no_data = render_to_string(move || {
            view! {
                <EmployeeTable
                    employees=Signal::derive(Vec::new)
                    total=Signal::derive(|| 0usize)
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(no_data.contains("No employees found"));

        let no_match = render_to_string(move || {
            view! {
                <EmployeeTable
                    employees=Signal::derive(Vec::new)
                    total=Signal::derive(|| 3usize)
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(no_match.contains("No employees match your search"));
    }
}
