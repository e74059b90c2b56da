use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">
                        "HRMS Lite"
                    </a>
                    <nav class="hidden md:flex space-x-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {message.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

/// Page-level failure banner. A retry button is shown when `on_retry` is given.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <div class="flex items-center justify-between gap-4">
                <p class="text-sm">{message}</p>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="text-sm font-semibold underline hover:no-underline"
                        on:click=move |_| retry.call(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            role="status"
        >
            <div class="flex items-center justify-between gap-4">
                <p class="text-sm">{message}</p>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="text-sm"
                        on:click=move |_| dismiss.call(())
                    >
                        {"✕"}
                    </button>
                })}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_navigation_and_children() {
        let html = render_to_string(move || {
            view! {
                <Layout>
                    <p>"page body"</p>
                </Layout>
            }
        });
        assert!(html.contains("HRMS Lite"));
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("href=\"/attendance\""));
        assert!(html.contains("page body"));
    }

    #[test]
    fn error_message_offers_retry_only_when_given() {
        let with_retry = render_to_string(move || {
            view! { <ErrorMessage message="Failed to load employees" on_retry=Callback::new(|_| {}) /> }
        });
        assert!(with_retry.contains("Failed to load employees"));
        assert!(with_retry.contains("Try again"));

        let without_retry = render_to_string(move || {
            view! { <ErrorMessage message="Employee not found" /> }
        });
        assert!(!without_retry.contains("Try again"));
    }

    #[test]
    fn spinner_and_success_render_text() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner message="Loading employees..." />
                    <SuccessMessage message="Attendance marked successfully!" />
                </div>
            }
        });
        assert!(html.contains("Loading employees..."));
        assert!(html.contains("Attendance marked successfully!"));
    }
}
