pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::radarr::Radarr;
pub use app::readarr::Readarr;
pub use config::{toml_config::TomlConfig, AppConfig};
pub use core::{client::StarrClient, request::Request};
pub use domain::model::{Quality, RemotePathMapping};
pub use utils::error::{Result, StarrError};
