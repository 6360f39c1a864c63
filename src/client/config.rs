//! Endpoint configuration for the intake API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::IntakeError;

/// Base URL of the hosted intake backend.
pub const DEFAULT_BASE_URL: &str = "https://masterstudiobackend.azurewebsites.net";
/// Path of the customer registration resource.
pub const DEFAULT_PATH: &str = "/api/customers";

/// Environment variable overriding the base URL.
pub const API_BASE_URL_VAR: &str = "INTAKE_API_BASE_URL";
/// Environment variable overriding the path.
pub const API_PATH_VAR: &str = "INTAKE_API_PATH";
/// Environment variable setting a request timeout, in whole seconds.
pub const API_TIMEOUT_VAR: &str = "INTAKE_API_TIMEOUT_SECS";

/// Where and how registrations are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Url,
    pub path: String,
    /// Request timeout. Unset means the request may wait indefinitely.
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Build a config from a base URL and a resource path.
    pub fn new(base_url: &str, path: impl Into<String>) -> Result<Self, IntakeError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| IntakeError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(IntakeError::Config(format!(
                "'{base_url}' cannot be used as a base URL"
            )));
        }
        Ok(Self {
            base_url,
            path: path.into(),
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the config from the process environment, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, IntakeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through `lookup`, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IntakeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let path = lookup(API_PATH_VAR).unwrap_or_else(|| DEFAULT_PATH.to_string());
        let mut config = Self::new(&base_url, path)?;

        if let Some(raw) = lookup(API_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                IntakeError::Config(format!("{API_TIMEOUT_VAR} must be whole seconds, got '{raw}'"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Full URL registrations are posted to.
    pub fn endpoint(&self) -> Result<Url, IntakeError> {
        // Url::join replaces the last segment unless the base ends in '/'
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(self.path.trim_start_matches('/'))
            .map_err(|e| IntakeError::Config(format!("invalid path '{}': {e}", self.path)))
    }
}
