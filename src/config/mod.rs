#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_TIMEOUT_SECS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_verify_ssl() -> bool {
    true
}

/// Connection settings of a single Radarr or Readarr instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub url: String,
    pub api_key: String,
    #[serde(default)]
    pub http_user: Option<String>,
    #[serde(default)]
    pub http_pass: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

impl AppConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            http_user: None,
            http_pass: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            verify_ssl: true,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn http_user(&self) -> Option<&str> {
        self.http_user.as_deref()
    }

    fn http_pass(&self) -> Option<&str> {
        self.http_pass.as_deref()
    }

    fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}
