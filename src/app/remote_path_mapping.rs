use crate::app::resource;
use crate::core::client::StarrClient;
use crate::core::request::resource_path;
use crate::domain::model::RemotePathMapping;
use crate::utils::error::Result;

const RESOURCE: &str = "remotePathMapping";

/// Remote path mapping endpoints, identical across apps apart from the API version.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RemotePathMappings<'a> {
    client: &'a StarrClient,
    api_version: &'static str,
}

impl<'a> RemotePathMappings<'a> {
    pub(crate) fn new(client: &'a StarrClient, api_version: &'static str) -> Self {
        Self { client, api_version }
    }

    fn uri(&self) -> String {
        resource_path(self.api_version, RESOURCE)
    }

    pub(crate) async fn list(&self) -> Result<Vec<RemotePathMapping>> {
        resource::list(self.client, &self.uri()).await
    }

    pub(crate) async fn get(&self, id: i64) -> Result<RemotePathMapping> {
        resource::get(self.client, &self.uri(), id).await
    }

    pub(crate) async fn add(&self, mapping: &RemotePathMapping) -> Result<RemotePathMapping> {
        resource::add(self.client, &self.uri(), mapping).await
    }

    pub(crate) async fn update(&self, mapping: &RemotePathMapping) -> Result<RemotePathMapping> {
        resource::update(self.client, &self.uri(), mapping.id, mapping).await
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<()> {
        resource::delete(self.client, &self.uri(), id).await
    }
}
