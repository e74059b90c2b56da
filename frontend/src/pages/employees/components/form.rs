use crate::{
    components::error::FormError,
    pages::employees::utils::{EmployeeDraft, EmployeeField},
};
use leptos::{ev::SubmitEvent, *};

const FIELDS: [(EmployeeField, &str, &str, &str); 4] = [
    (EmployeeField::EmployeeId, "Employee ID", "text", "e.g., EMP001"),
    (EmployeeField::FullName, "Full Name", "text", "e.g., John Doe"),
    (EmployeeField::Email, "Email", "email", "e.g., john@example.com"),
    (EmployeeField::Department, "Department", "text", "e.g., IT"),
];

#[component]
pub fn EmployeeForm(
    #[prop(into)] draft: Signal<EmployeeDraft>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    on_input: Callback<(EmployeeField, String)>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <FormError error=error />
            {FIELDS
                .iter()
                .map(|&(field, label, input_type, placeholder)| view! {
                    <label class="block">
                        <span class="block text-sm font-medium text-fg mb-1">{label}</span>
                        <input
                            type=input_type
                            required=true
                            placeholder=placeholder
                            class="w-full px-3 py-2 border border-border rounded-lg focus:ring-2 focus:ring-action-primary-focus outline-none"
                            prop:value=move || draft.with(|d| d.get(field).to_string())
                            on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                        />
                    </label>
                })
                .collect_view()}
            <div class="flex gap-3 pt-4">
                <button
                    type="button"
                    class="flex-1 px-4 py-2.5 border border-border rounded-lg text-fg hover:bg-surface-muted font-medium"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="flex-1 px-4 py-2.5 bg-action-primary-bg text-action-primary-text rounded-lg hover:bg-action-primary-bg-hover font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Creating..." } else { "Create Employee" }}
                </button>
            </div>
        </form>
    }
}
