use super::repository;
use crate::{
    api::{ApiClient, DashboardStats},
    config::AppConfig,
    state::ViewStatus,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub reload: RwSignal<u32>,
    pub stats_resource: Resource<u32, Result<DashboardStats, String>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(AppConfig::load()));
        let reload = create_rw_signal(0u32);
        let stats_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_dashboard(&api).await }
            },
        );
        Self {
            reload,
            stats_resource,
        }
    }

    pub fn status(&self) -> ViewStatus {
        let loaded = self.stats_resource.get();
        ViewStatus::of(
            loaded.as_ref(),
            self.stats_resource.loading().get(),
            None,
            |_| false,
        )
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn on_retry(&self) -> impl Fn(()) + 'static {
        let reload = self.reload;
        move |_| reload.update(|value| *value = value.wrapping_add(1))
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
