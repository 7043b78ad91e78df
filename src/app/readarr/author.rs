use crate::domain::model::{Image, Link, Ratings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub author_metadata_id: i64,
    pub status: String,
    pub ended: bool,
    pub author_name: String,
    pub author_name_last_first: String,
    pub foreign_author_id: String,
    pub title_slug: String,
    pub overview: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub disambiguation: String,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    pub path: String,
    pub quality_profile_id: i64,
    pub metadata_profile_id: i64,
    pub monitored: bool,
    pub monitor_new_items: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_folder_path: String,
    pub folder: String,
    pub genres: Vec<String>,
    pub clean_name: String,
    pub sort_name: String,
    pub sort_name_last_first: String,
    pub tags: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

/// Per-author library counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    pub book_file_count: i64,
    pub book_count: i64,
    pub available_book_count: i64,
    pub total_book_count: i64,
    pub size_on_disk: i64,
    pub percent_of_books: f64,
}
