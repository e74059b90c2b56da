use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config::AppConfig,
    pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/employees", "/attendance"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app(config: AppConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(config));
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
            </Routes>
        </Router>
    }
}
