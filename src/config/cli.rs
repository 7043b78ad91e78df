use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "starr")]
#[command(about = "Query and manage Radarr and Readarr through their REST APIs")]
pub struct CliConfig {
    #[arg(long, short, default_value = "starr.toml", help = "TOML file with [radarr]/[readarr] sections")]
    pub config: PathBuf,

    #[arg(long, help = "Base URL of the instance; overrides the config file")]
    pub url: Option<String>,

    #[arg(long, help = "API key of the instance; overrides the config file")]
    pub api_key: Option<String>,

    #[arg(long, help = "Request timeout in seconds, 0 disables it")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Radarr,
    Readarr,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Radarr(ResourceCommand),
    #[command(subcommand)]
    Readarr(ReadarrCommand),
}

impl Command {
    pub fn app(&self) -> AppKind {
        match self {
            Command::Radarr(_) => AppKind::Radarr,
            Command::Readarr(_) => AppKind::Readarr,
        }
    }
}

/// Resources every supported app exposes.
#[derive(Debug, Clone, Subcommand)]
pub enum ResourceCommand {
    /// List quality profiles
    QualityProfiles,
    /// Delete a quality profile by id
    DeleteQualityProfile { id: i64 },
    /// List remote path mappings
    RemotePathMappings,
    /// Create a remote path mapping
    AddRemotePathMapping(MappingArgs),
    /// Delete a remote path mapping by id
    DeleteRemotePathMapping { id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReadarrCommand {
    #[command(flatten)]
    Resource(ResourceCommand),
    /// Search authors and books
    Search { term: String },
}

#[derive(Debug, Clone, Args)]
pub struct MappingArgs {
    #[arg(long)]
    pub host: String,
    #[arg(long)]
    pub remote_path: String,
    #[arg(long)]
    pub local_path: String,
}

impl CliConfig {
    /// Connection settings for `app`: the config file section (when the
    /// flags do not fully specify the instance) with flag overrides applied.
    pub fn app_config(&self, app: AppKind) -> Result<AppConfig> {
        let mut config = match (&self.url, &self.api_key) {
            (Some(url), Some(api_key)) => AppConfig::new(url.clone(), api_key.clone()),
            _ => {
                let file = TomlConfig::from_file(&self.config)?;
                let section = match app {
                    AppKind::Radarr => file.radarr()?,
                    AppKind::Readarr => file.readarr()?,
                };
                section.clone()
            }
        };

        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_alone_build_config() {
        let cli = CliConfig::parse_from([
            "starr",
            "--url",
            "http://localhost:8787",
            "--api-key",
            "key",
            "--timeout",
            "5",
            "readarr",
            "search",
            "dune",
        ]);

        assert_eq!(cli.command.app(), AppKind::Readarr);
        let config = cli.app_config(AppKind::Readarr).unwrap();
        assert_eq!(config.url, "http://localhost:8787");
        assert_eq!(config.timeout_seconds, 5);
        assert!(matches!(
            cli.command,
            Command::Readarr(ReadarrCommand::Search { ref term }) if term == "dune"
        ));
    }

    #[test]
    fn test_file_section_with_override() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[radarr]\nurl = \"http://localhost:7878\"\napi_key = \"file-key\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "starr",
            "--config",
            path.as_str(),
            "--api-key",
            "flag-key",
            "radarr",
            "quality-profiles",
        ]);

        let config = cli.app_config(AppKind::Radarr).unwrap();
        assert_eq!(config.url, "http://localhost:7878");
        assert_eq!(config.api_key, "flag-key");
        assert!(cli.app_config(AppKind::Readarr).is_err());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let cli = CliConfig::parse_from([
            "starr",
            "--config",
            "/nonexistent/starr.toml",
            "--url",
            "http://localhost:7878",
            "radarr",
            "quality-profiles",
        ]);

        let err = cli.app_config(AppKind::Radarr).unwrap_err();
        assert!(err.is_config_error());
    }
}
