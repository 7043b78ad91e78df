use crate::config::AppConfig;
use crate::utils::error::{Result, StarrError};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration with one optional table per application:
///
/// ```toml
/// [radarr]
/// url = "http://localhost:7878"
/// api_key = "${RADARR_API_KEY}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub radarr: Option<AppConfig>,
    pub readarr: Option<AppConfig>,
}

impl TomlConfig {
    /// Loads the config from a TOML file. A missing or unreadable file is a
    /// configuration error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| StarrError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StarrError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StarrError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn radarr(&self) -> Result<&AppConfig> {
        validate_required_field("radarr", &self.radarr)
    }

    pub fn readarr(&self) -> Result<&AppConfig> {
        validate_required_field("readarr", &self.readarr)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.radarr.is_none() && self.readarr.is_none() {
            return Err(StarrError::ConfigError {
                message: "no [radarr] or [readarr] section configured".to_string(),
            });
        }
        if let Some(radarr) = &self.radarr {
            radarr.validate()?;
        }
        if let Some(readarr) = &self.readarr {
            readarr.validate()?;
        }
        Ok(())
    }
}
