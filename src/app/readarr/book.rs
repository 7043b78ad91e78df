use super::Author;
use crate::domain::model::{Image, Link, Ratings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_title: String,
    pub series_title: String,
    pub disambiguation: String,
    pub overview: String,
    pub author_id: i64,
    pub foreign_book_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub foreign_edition_id: String,
    pub title_slug: String,
    pub monitored: bool,
    pub any_edition_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    pub page_count: i64,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Box<Author>>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_cover: String,
    pub editions: Vec<Edition>,
    pub grabbed: bool,
}

/// One published edition of a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Edition {
    pub id: i64,
    pub book_id: i64,
    pub foreign_edition_id: String,
    pub title_slug: String,
    pub isbn13: String,
    pub asin: String,
    pub title: String,
    pub language: String,
    pub overview: String,
    pub format: String,
    pub is_ebook: bool,
    pub disambiguation: String,
    pub publisher: String,
    pub page_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,
    pub monitored: bool,
    pub manual_add: bool,
    pub grabbed: bool,
}
