use crate::{
    api::{ApiClient, ApiResponse, DashboardStats},
    utils::{describe_error, error_message::LOAD_DASHBOARD},
};

pub async fn fetch_dashboard(api: &ApiClient) -> Result<DashboardStats, String> {
    api.get_dashboard_stats()
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &LOAD_DASHBOARD))
}
