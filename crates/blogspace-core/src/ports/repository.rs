use async_trait::async_trait;

use crate::domain::{
    Comment, CommentId, LikeStatus, NewPost, Post, PostId, PostPatch, ProfilePatch, User, UserId,
};
use crate::error::DomainError;

/// The authoritative post collection.
///
/// Mutations take the acting user (`None` when nobody is signed in) and are
/// rejected with [`DomainError::Unauthorized`] unless that user exists and,
/// for updates and deletes, owns the post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a post authored by `actor`.
    async fn create(&self, actor: Option<&UserId>, draft: NewPost) -> Result<Post, DomainError>;

    /// Merge `patch` into the post, provided `actor` owns it.
    async fn update(
        &self,
        id: &PostId,
        actor: Option<&UserId>,
        patch: PostPatch,
    ) -> Result<Post, DomainError>;

    /// Delete the post, provided `actor` owns it.
    async fn delete(&self, id: &PostId, actor: Option<&UserId>) -> Result<(), DomainError>;

    async fn get_by_id(&self, id: &PostId) -> Result<Post, DomainError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Post, DomainError>;

    /// Drafts and published posts of one author, in collection order.
    async fn list_by_author(&self, author_id: &UserId) -> Vec<Post>;

    /// Published posts, newest first by `published_at` (else `created_at`).
    async fn list_published(&self) -> Vec<Post>;

    /// Published posts whose title, excerpt or tags contain `query`.
    async fn search(&self, query: &str) -> Vec<Post>;

    /// Every post, in collection order.
    async fn snapshot(&self) -> Vec<Post>;
}

/// User directory.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a user. Emails are unique, compared case-insensitively.
    async fn register(&self, email: &str, name: &str) -> Result<User, DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Option<User>;

    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// Update a profile; only the user themselves may do so.
    async fn update_profile(
        &self,
        id: &UserId,
        actor: Option<&UserId>,
        patch: ProfilePatch,
    ) -> Result<User, DomainError>;
}

/// Per-post comment threads.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of a post as stored, newest top-level comment first.
    async fn list(&self, post_id: &PostId) -> Result<Vec<Comment>, DomainError>;

    async fn add_comment(
        &self,
        actor: Option<&User>,
        post_id: &PostId,
        content: &str,
    ) -> Result<Comment, DomainError>;

    /// Reply to a top-level comment.
    async fn add_reply(
        &self,
        actor: Option<&User>,
        post_id: &PostId,
        parent_id: &CommentId,
        content: &str,
    ) -> Result<Comment, DomainError>;

    /// Drop every comment of a post.
    async fn clear(&self, post_id: &PostId) -> Result<(), DomainError>;
}

/// Per-post like sets.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Like the post, or take the like back if `actor` already liked it.
    async fn toggle(
        &self,
        actor: Option<&UserId>,
        post_id: &PostId,
    ) -> Result<LikeStatus, DomainError>;

    async fn status(
        &self,
        post_id: &PostId,
        viewer: Option<&UserId>,
    ) -> Result<LikeStatus, DomainError>;

    async fn clear(&self, post_id: &PostId) -> Result<(), DomainError>;
}
