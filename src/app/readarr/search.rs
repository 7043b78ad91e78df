use super::{Author, Book, Readarr, API_VERSION};
use crate::core::request::{resource_path, Request};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "search";

/// One hit from the search endpoint. `id` is the position of the hit in the
/// result list, not a book or author id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub foreign_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(skip_serializing_if = "crate::domain::model::is_zero")]
    pub id: i64,
}

impl Readarr {
    /// Searches authors and books by free text. An empty term yields no
    /// results and sends no request.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let req = Request::new(resource_path(API_VERSION, RESOURCE)).query("term", term);
        self.client().get_into(&req).await
    }
}
