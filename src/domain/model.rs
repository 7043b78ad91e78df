//! Records shared by every *arr application.

use serde::{Deserialize, Serialize};

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// The bare identity of a quality tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseQuality {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRevision {
    pub version: i64,
    pub real: i64,
    #[serde(default)]
    pub is_repack: bool,
}

/// A download quality attached to a movie, book, track or series, and the
/// entry type of a quality profile's ordered `items` list. Grouped entries
/// carry a `name`, an `id` and nested `items` instead of a `quality`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<BaseQuality>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Quality>,
    #[serde(default)]
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<QualityRevision>,
}

/// Custom format score inside a quality profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatItem {
    pub format: i64,
    #[serde(default)]
    pub name: String,
    pub score: i64,
}

/// Generic id/name pair, e.g. a language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cover_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extension: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remote_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub popularity: f64,
}

/// Translates a download client's path on `host` into the local path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePathMapping {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    pub host: String,
    pub remote_path: String,
    pub local_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_path_mapping_omits_zero_id() {
        let mapping = RemotePathMapping {
            host: "transmission".to_string(),
            remote_path: "/remote/".to_string(),
            local_path: "/local/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&mapping).unwrap(),
            r#"{"host":"transmission","remotePath":"/remote/","localPath":"/local/"}"#
        );

        let mapping = RemotePathMapping { id: 2, ..mapping };
        assert_eq!(
            serde_json::to_string(&mapping).unwrap(),
            r#"{"id":2,"host":"transmission","remotePath":"/remote/","localPath":"/local/"}"#
        );
    }

    #[test]
    fn test_image_remote_url_wire_name() {
        let image: Image = serde_json::from_str(
            r#"{"url": "/cover.jpg", "coverType": "cover", "remoteUrl": "https://example.com/c.jpg"}"#,
        )
        .unwrap();
        assert_eq!(image.remote_url, "https://example.com/c.jpg");

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["remoteUrl"], "https://example.com/c.jpg");
        assert!(json.get("extension").is_none());
    }

    #[test]
    fn test_grouped_quality_item() {
        let json = r#"{
            "name": "WEB 1080p",
            "id": 1001,
            "items": [
                {"quality": {"id": 3, "name": "WEBDL-1080p", "source": "webdl", "resolution": 1080}, "items": [], "allowed": true}
            ],
            "allowed": true
        }"#;

        let quality: Quality = serde_json::from_str(json).unwrap();
        assert_eq!(quality.name.as_deref(), Some("WEB 1080p"));
        assert_eq!(quality.items.len(), 1);
        assert_eq!(quality.items[0].quality.as_ref().unwrap().resolution, Some(1080));
        assert!(quality.quality.is_none());
    }
}
