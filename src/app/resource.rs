//! The CRUD shape every *arr resource shares. Resource modules only fix the
//! path and the record type.

use crate::core::client::{encode_body, StarrClient};
use crate::core::request::Request;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A `null` body from a collection endpoint decodes as an empty list.
pub(crate) async fn list<T: DeserializeOwned>(client: &StarrClient, uri: &str) -> Result<Vec<T>> {
    let items: Option<Vec<T>> = client.get_into(&Request::new(uri)).await?;
    Ok(items.unwrap_or_default())
}

pub(crate) async fn get<T: DeserializeOwned>(client: &StarrClient, uri: &str, id: i64) -> Result<T> {
    client.get_into(&Request::with_id(uri, id)).await
}

pub(crate) async fn add<B, T>(client: &StarrClient, uri: &str, record: &B) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let req = Request::new(uri).body(encode_body(uri, record)?);
    client.post_into(&req).await
}

pub(crate) async fn update<B, T>(client: &StarrClient, uri: &str, id: i64, record: &B) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let req = Request::with_id(uri, id).body(encode_body(uri, record)?);
    client.put_into(&req).await
}

/// Update where the service's echo of the record is not needed.
pub(crate) async fn update_discard<B>(client: &StarrClient, uri: &str, id: i64, record: &B) -> Result<()>
where
    B: Serialize + ?Sized,
{
    let req = Request::with_id(uri, id).body(encode_body(uri, record)?);
    client.put_any(&req).await
}

pub(crate) async fn delete(client: &StarrClient, uri: &str, id: i64) -> Result<()> {
    client.delete_any(&Request::with_id(uri, id)).await
}
