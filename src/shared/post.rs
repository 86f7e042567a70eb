//! Post and comment wire types
//!
//! JSON shapes for the forum's post, comment, like, and moderation
//! endpoints. `created_at` fields carry RFC 3339 timestamps; they are kept
//! as strings on the wire and parsed with chrono only where the UI needs
//! ordering or display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: String,
}

/// A post in the feed, with its comments and like count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub is_misleading: bool,
    pub created_at: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe_emoji: Option<String>,
}

impl Post {
    /// Creation time parsed for sorting; posts with unparseable timestamps
    /// sort as oldest.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Payload for `POST /posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
}

/// Payload for `POST /posts/{id}/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub content: String,
}
