use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CommentId, PostId, UserId};
use super::user::User;
use crate::error::DomainError;

/// A comment on a post, carrying its replies.
///
/// Author name and avatar are copied in at write time so a thread renders
/// without a user lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(post_id: PostId, author: &User, content: &str) -> Result<Self, DomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("comment is empty".to_string()));
        }

        Ok(Self {
            id: CommentId::generate(),
            post_id,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_avatar: author.avatar_url(),
            content: content.to_string(),
            created_at: Utc::now(),
            likes: 0,
            replies: Vec::new(),
        })
    }
}
