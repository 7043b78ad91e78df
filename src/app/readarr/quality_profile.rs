use super::{Readarr, API_VERSION};
use crate::app::resource;
use crate::core::request::resource_path;
use crate::domain::model::{FormatItem, Quality};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "qualityProfile";

/// Quality profile applied to authors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub upgrade_allowed: bool,
    #[serde(default)]
    pub cutoff: i64,
    #[serde(default, rename = "items")]
    pub qualities: Vec<Quality>,
    #[serde(default)]
    pub min_format_score: i64,
    #[serde(default)]
    pub cutoff_format_score: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format_items: Vec<FormatItem>,
}

impl Readarr {
    fn quality_profile_path() -> String {
        resource_path(API_VERSION, RESOURCE)
    }

    pub async fn get_quality_profiles(&self) -> Result<Vec<QualityProfile>> {
        resource::list(self.client(), &Self::quality_profile_path()).await
    }

    pub async fn get_quality_profile(&self, profile_id: i64) -> Result<QualityProfile> {
        resource::get(self.client(), &Self::quality_profile_path(), profile_id).await
    }

    pub async fn add_quality_profile(&self, profile: &QualityProfile) -> Result<i64> {
        let created: QualityProfile =
            resource::add(self.client(), &Self::quality_profile_path(), profile).await?;
        Ok(created.id)
    }

    pub async fn update_quality_profile(&self, profile: &QualityProfile) -> Result<()> {
        resource::update_discard(self.client(), &Self::quality_profile_path(), profile.id, profile)
            .await
    }

    pub async fn delete_quality_profile(&self, profile_id: i64) -> Result<()> {
        resource::delete(self.client(), &Self::quality_profile_path(), profile_id).await
    }
}
