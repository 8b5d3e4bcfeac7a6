use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access code -> display username. Codes are plaintext shared secrets.
pub type AccessCodes = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A photo or clip attached to a friend. URLs point at external hosts and
/// are never fetched by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl MediaItem {
    pub fn image(url: impl Into<String>) -> Self {
        Self { kind: MediaKind::Image, url: url.into() }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self { kind: MediaKind::Video, url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub quote: String,
    pub media: Vec<MediaItem>,
}

/// Comments are append-only and carry no id of their own.
/// `friend_id` is not checked against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub friend_id: i64,
    pub username: String,
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_uses_type_key() {
        let item = MediaItem::video("https://example.com/clip.mp4");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["url"], "https://example.com/clip.mp4");
    }

    #[test]
    fn unknown_media_kind_is_rejected() {
        let raw = r#"{"type":"audio","url":"x"}"#;
        assert!(serde_json::from_str::<MediaItem>(raw).is_err());
    }

    #[test]
    fn comment_date_accepts_offset_form() {
        // Files written by older deployments use "+00:00" instead of "Z".
        let raw = r#"{"friend_id":3,"username":"Student 3","comment":"hey","date":"2024-05-01T10:20:30.123456+00:00"}"#;
        let comment: Comment = serde_json::from_str(raw).unwrap();
        assert_eq!(comment.friend_id, 3);
        assert_eq!(comment.date.timestamp(), 1714558830);
    }
}
