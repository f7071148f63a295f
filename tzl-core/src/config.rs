//! Client configuration shared by the web app and the CLI.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the lookup endpoint.
pub const DEFAULT_LOOKUP_PATH: &str = "/api/zoning";

/// Path of the server health endpoint.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Lookups search the web server-side and can take a while.
pub const DEFAULT_TIMEOUT_MS: u64 = 90_000;

/// Where and how long to ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and authority, e.g. "http://localhost:8000". Empty means same origin.
    pub base_url: String,
    pub lookup_path: String,
    pub health_path: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            lookup_path: DEFAULT_LOOKUP_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn lookup_url(&self) -> String {
        self.join(&self.lookup_path)
    }

    pub fn health_url(&self) -> String {
        self.join(&self.health_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
