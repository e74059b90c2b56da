use leptos::*;

/// Error shown inside a form, above its buttons.
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-3 py-2 rounded text-sm" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
