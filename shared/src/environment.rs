use serde::{Deserialize, Serialize};

/// Base address of the local development API server.
pub const LOCAL_DEV_BASE: &str = "http://127.0.0.1:5000";

/// Address under which an Android emulator reaches the host machine's loopback.
pub const EMULATOR_LOOPBACK_BASE: &str = "http://10.0.2.2:5000";

/// Hostnames that refer to the machine serving the page itself.
pub const LOOPBACK_ALIASES: [&str; 2] = ["localhost", "127.0.0.1"];

/// Where the page is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HostContext {
    /// A regular browser tab.
    #[default]
    Browser,
    /// A native mobile container that embeds the web content.
    WrappedMobile,
}

impl HostContext {
    pub fn from_bridge_present(present: bool) -> Self {
        if present {
            HostContext::WrappedMobile
        } else {
            HostContext::Browser
        }
    }

    pub fn is_wrapped(self) -> bool {
        matches!(self, HostContext::WrappedMobile)
    }
}

pub fn is_loopback(hostname: &str) -> bool {
    LOOPBACK_ALIASES.contains(&hostname)
}

/// Picks the API base URL for the current page. First match wins:
/// wrapped shell on loopback, plain loopback, then the page origin.
pub fn resolve_base_url(hostname: &str, origin: &str, host: HostContext) -> String {
    if host.is_wrapped() && is_loopback(hostname) {
        EMULATOR_LOOPBACK_BASE.to_string()
    } else if is_loopback(hostname) {
        LOCAL_DEV_BASE.to_string()
    } else {
        origin.to_string()
    }
}

/// Resolved once per page load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub api_base: String,
    pub host: HostContext,
}

impl EnvironmentConfig {
    pub fn resolve(hostname: &str, origin: &str, host: HostContext) -> Self {
        Self {
            api_base: resolve_base_url(hostname, origin, host),
            host,
        }
    }

    /// Replaces the resolved base when a deploy-time override is present.
    pub fn with_override(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
