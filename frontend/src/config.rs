use chrono_tz::Tz;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Startup configuration handed to the API client and the views.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub time_zone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            request_timeout: REQUEST_TIMEOUT,
            time_zone: Tz::UTC,
        }
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Reads `window.__HRMS_CONFIG` first, then the `HRMS_API_URL` value baked in at
    /// build time.
    pub fn load() -> Self {
        let overrides = runtime_overrides().unwrap_or_default();
        Self::resolve(overrides, option_env!("HRMS_API_URL"))
    }

    fn resolve(overrides: RuntimeConfig, build_time_url: Option<&str>) -> Self {
        let base_url = overrides
            .api_base_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                build_time_url
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let time_zone = match overrides.time_zone.as_deref() {
            Some(name) => parse_time_zone(name).unwrap_or_else(|| {
                log::warn!("Unknown time zone '{}', falling back to UTC", name);
                Tz::UTC
            }),
            None => Tz::UTC,
        };

        Self::new(base_url).with_time_zone(time_zone)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn runtime_overrides() -> Option<RuntimeConfig> {
    // Optional global: window.__HRMS_CONFIG = { api_base_url: "...", time_zone: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__HRMS_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(RuntimeConfig {
        api_base_url: read_string(&any, "api_base_url")
            .or_else(|| read_string(&any, "API_BASE_URL")),
        time_zone: read_string(&any, "time_zone"),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_string(obj: &wasm_bindgen::JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &key.into())
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_overrides() -> Option<RuntimeConfig> {
    None
}
