use log::{info, Level};
use once_cell::sync::OnceCell;
use shared::environment::{EnvironmentConfig, HostContext};
use wasm_bindgen::JsValue;

/// Global injected by the native mobile container.
pub const MOBILE_BRIDGE_GLOBAL: &str = "Capacitor";

/// Used when no level is configured: chatty in debug builds only.
pub const DEFAULT_LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

static ENVIRONMENT: OnceCell<EnvironmentConfig> = OnceCell::new();

pub struct Config;

impl Config {
    /// Environment for this page load, resolved on first access.
    pub fn environment() -> &'static EnvironmentConfig {
        ENVIRONMENT.get_or_init(|| {
            let config = detect_environment();
            info!(
                "Resolved API base {} ({:?})",
                config.api_base, config.host
            );
            config
        })
    }

    pub fn api_base_url() -> String {
        Self::environment().api_base.clone()
    }

    /// Build-time override for the API base, e.g. when the API lives on
    /// its own host in production.
    pub fn api_base_override() -> Option<&'static str> {
        option_env!("CAREERSAFE_API_BASE")
    }

    pub fn log_level() -> Level {
        parse_log_level(option_env!("CAREERSAFE_LOG_LEVEL"))
    }
}

/// Looks for the bridge object the mobile container exposes.
pub fn detect_host_context() -> HostContext {
    let present = web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(MOBILE_BRIDGE_GLOBAL)).ok())
        .map(|bridge| !bridge.is_undefined())
        .unwrap_or(false);
    HostContext::from_bridge_present(present)
}

fn detect_environment() -> EnvironmentConfig {
    let (hostname, origin) = web_sys::window()
        .map(|window| {
            let location = window.location();
            (
                location.hostname().unwrap_or_default(),
                location.origin().unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    let host = detect_host_context();
    if host.is_wrapped() {
        info!("Running in mobile app mode");
    }

    EnvironmentConfig::resolve(&hostname, &origin, host).with_override(Config::api_base_override())
}

/// Unset or unrecognised levels fall back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(level: Option<&str>) -> Level {
    level
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
