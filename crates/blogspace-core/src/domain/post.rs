use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{generate_excerpt, normalize_tags, read_time, slugify};
use super::ids::{PostId, UserId};
use crate::error::DomainError;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// Post entity - a blog entry, draft or published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// HTML body.
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub author_id: UserId,
    pub status: PostStatus,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Minutes.
    pub read_time: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once, on the first transition to published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Fields supplied by an author when creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    /// Generated from the content when absent or blank.
    pub excerpt: Option<String>,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }
}

/// Partial update merged into an existing post. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<PostStatus>,
    pub tags: Option<Vec<String>>,
    /// An empty string clears the image.
    pub featured_image: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.status.is_none()
            && self.tags.is_none()
            && self.featured_image.is_none()
    }
}

impl Post {
    /// Create a new post owned by `author_id`.
    pub fn new(author_id: UserId, draft: NewPost) -> Result<Self, DomainError> {
        let title = required("title", &draft.title)?;
        let content = required("content", &draft.content)?;
        let now = Utc::now();

        let excerpt = match draft.excerpt {
            Some(excerpt) if !excerpt.trim().is_empty() => excerpt.trim().to_string(),
            _ => generate_excerpt(&content),
        };

        Ok(Self {
            id: PostId::generate(),
            slug: slugify(&title),
            read_time: read_time(&content),
            title,
            content,
            excerpt,
            author_id,
            status: draft.status,
            tags: normalize_tags(draft.tags),
            featured_image: draft.featured_image.filter(|url| !url.trim().is_empty()),
            created_at: now,
            updated_at: now,
            published_at: (draft.status == PostStatus::Published).then_some(now),
        })
    }

    /// Merge `patch` into this post.
    ///
    /// Validation happens before any field changes, so a rejected patch
    /// leaves the post untouched.
    pub fn apply(&mut self, patch: PostPatch) -> Result<(), DomainError> {
        let title = patch
            .title
            .as_deref()
            .map(|t| required("title", t))
            .transpose()?;
        let content = patch
            .content
            .as_deref()
            .map(|c| required("content", c))
            .transpose()?;

        if let Some(title) = title {
            self.slug = slugify(&title);
            self.title = title;
        }
        if let Some(content) = content {
            self.read_time = read_time(&content);
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = if excerpt.trim().is_empty() {
                generate_excerpt(&self.content)
            } else {
                excerpt.trim().to_string()
            };
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(tags);
        }
        if let Some(url) = patch.featured_image {
            self.featured_image = Some(url).filter(|u| !u.trim().is_empty());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }

        let now = Utc::now();
        self.updated_at = now;
        if self.status == PostStatus::Published && self.published_at.is_none() {
            self.published_at = Some(now);
        }

        Ok(())
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    /// Date used for ordering: `published_at`, falling back to `created_at`.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// Case-insensitive substring match over title, excerpt and tags.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> UserId {
        UserId::from("author-1")
    }

    #[test]
    fn test_new_draft_has_no_published_at() {
        let post = Post::new(author(), NewPost::new("Hello World", "<p>Body</p>")).unwrap();
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.excerpt, "Body");
        assert_eq!(post.read_time, 1);
        assert!(post.published_at.is_none());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_new_published_sets_published_at() {
        let post = Post::new(
            author(),
            NewPost::new("Hello", "Body").with_status(PostStatus::Published),
        )
        .unwrap();
        assert_eq!(post.published_at, Some(post.created_at));
    }

    #[test]
    fn test_new_requires_title_and_content() {
        let err = Post::new(author(), NewPost::new("  ", "Body")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = Post::new(author(), NewPost::new("Title", "")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_publish_sets_published_at_once() {
        let mut post = Post::new(author(), NewPost::new("Draft", "Body")).unwrap();

        post.apply(PostPatch {
            status: Some(PostStatus::Published),
            ..Default::default()
        })
        .unwrap();
        let first = post.published_at.expect("published");

        post.apply(PostPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        })
        .unwrap();
        post.apply(PostPatch {
            status: Some(PostStatus::Draft),
            ..Default::default()
        })
        .unwrap();
        post.apply(PostPatch {
            status: Some(PostStatus::Published),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.published_at, Some(first));
        assert_eq!(post.slug, "renamed");
    }

    #[test]
    fn test_rejected_patch_leaves_post_untouched() {
        let mut post = Post::new(author(), NewPost::new("Keep", "Body")).unwrap();
        let before = post.clone();

        let err = post
            .apply(PostPatch {
                title: Some(" ".into()),
                status: Some(PostStatus::Published),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(post, before);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let post = Post::new(
            author(),
            NewPost::new("Getting Started with Next.js", "Body").with_tags(["NextJS", "react"]),
        )
        .unwrap();
        assert!(post.matches("nextjs"));
        assert!(post.matches("started"));
        assert!(!post.matches("vue"));
    }
}
