pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: logging, panic hook, configuration, then the router.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let config = config::AppConfig::load();
    log::info!(
        "Starting HRMS Lite (api={}, tz={})",
        config.api_base_url,
        config.time_zone
    );
    router::mount_app(config);
}
