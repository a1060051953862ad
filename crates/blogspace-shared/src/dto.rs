//! Data Transfer Objects - view models handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Post summary for listings, joined with its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub read_time: u32,
    /// RFC 3339; `published_at`, else `created_at`.
    pub date: String,
    pub author: AuthorSummary,
}

/// The author fields a card shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: String,
    pub name: String,
    pub avatar: String,
}
