use crate::api::ApiClient;
use leptos::*;

/// Runs `f` inside a fresh reactive runtime. Resources created inside never start
/// their fetchers, so tests drive them with `Resource::set`.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders a page with `client` provided the way the app root provides it.
pub fn render_with_client<F, N>(client: ApiClient, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(client);
        view()
    })
}
