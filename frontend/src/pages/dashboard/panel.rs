use super::{
    components::{QuickActions, SummaryCards},
    view_model::use_dashboard_view_model,
};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::state::ViewStatus;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | HRMS Lite"/>
        <Layout>
            <DashboardPanel/>
        </Layout>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let status = Signal::derive(move || vm.status());
    let on_retry = Callback::new(vm.on_retry());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-fg">"Dashboard"</h1>
                <p class="mt-2 text-fg-muted">"Overview of your HR system"</p>
            </div>
            {move || match status.get() {
                ViewStatus::Loading => view! { <LoadingSpinner message="Loading dashboard..." /> }.into_view(),
                ViewStatus::Error(message) => view! { <ErrorMessage message=message on_retry=on_retry /> }.into_view(),
                ViewStatus::Empty | ViewStatus::Populated => {
                    view! { <SummaryCards stats=vm.stats() /> }.into_view()
                }
            }}
            <QuickActions/>
        </div>
    }
}
