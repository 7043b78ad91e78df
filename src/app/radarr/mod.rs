//! Radarr (movies), API `v3`.

mod quality_profile;

pub use quality_profile::QualityProfile;

use crate::app::remote_path_mapping::RemotePathMappings;
use crate::core::client::StarrClient;
use crate::domain::model::RemotePathMapping;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub const API_VERSION: &str = "v3";

#[derive(Debug, Clone)]
pub struct Radarr {
    client: StarrClient,
}

impl Radarr {
    pub fn new(client: StarrClient) -> Self {
        Self { client }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(StarrClient::from_config(config)?))
    }

    pub fn client(&self) -> &StarrClient {
        &self.client
    }

    fn remote_path_mappings(&self) -> RemotePathMappings<'_> {
        RemotePathMappings::new(&self.client, API_VERSION)
    }

    pub async fn get_remote_path_mappings(&self) -> Result<Vec<RemotePathMapping>> {
        self.remote_path_mappings().list().await
    }

    pub async fn get_remote_path_mapping(&self, mapping_id: i64) -> Result<RemotePathMapping> {
        self.remote_path_mappings().get(mapping_id).await
    }

    pub async fn add_remote_path_mapping(
        &self,
        mapping: &RemotePathMapping,
    ) -> Result<RemotePathMapping> {
        self.remote_path_mappings().add(mapping).await
    }

    pub async fn update_remote_path_mapping(
        &self,
        mapping: &RemotePathMapping,
    ) -> Result<RemotePathMapping> {
        self.remote_path_mappings().update(mapping).await
    }

    pub async fn delete_remote_path_mapping(&self, mapping_id: i64) -> Result<()> {
        self.remote_path_mappings().delete(mapping_id).await
    }
}
