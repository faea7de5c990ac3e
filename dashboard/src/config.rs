//! Dashboard configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `DASHBOARD_*` environment
//! variables, and command-line flags.

use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Settings for the remote user service connection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct DashboardSettings {
    /// Root URL of the REST API exposing `/users`.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl DashboardSettings {
    /// Return the configured API root, falling back to the public demo API.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(
            self.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL),
        )
    }

    /// Return the configured request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
