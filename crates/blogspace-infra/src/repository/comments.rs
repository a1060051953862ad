use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use blogspace_core::DomainError;
use blogspace_core::domain::{Comment, CommentId, PostId, User};
use blogspace_core::ports::{CommentRepository, KeyValueStore};

use crate::collection::{self, Loaded, keys};

/// Comment threads stored independently per post under `comments_{postId}`.
pub struct StoredCommentRepository {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl StoredCommentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self, post_id: &PostId) -> Result<Vec<Comment>, DomainError> {
        let key = keys::comments(post_id);
        match collection::load(self.store.as_ref(), &key).await? {
            Loaded::Found(comments) => Ok(comments),
            Loaded::Missing => Ok(Vec::new()),
            Loaded::Corrupt(reason) => {
                tracing::warn!(key = %key, error = %reason, "Stored comments are corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, post_id: &PostId, comments: &[Comment]) -> Result<(), DomainError> {
        collection::save(self.store.as_ref(), &keys::comments(post_id), comments).await
    }
}

#[async_trait]
impl CommentRepository for StoredCommentRepository {
    async fn list(&self, post_id: &PostId) -> Result<Vec<Comment>, DomainError> {
        self.read(post_id).await
    }

    async fn add_comment(
        &self,
        actor: Option<&User>,
        post_id: &PostId,
        content: &str,
    ) -> Result<Comment, DomainError> {
        let author = actor.ok_or(DomainError::Unauthorized)?;
        let comment = Comment::new(post_id.clone(), author, content)?;

        let _guard = self.write_lock.lock().await;
        let mut comments = self.read(post_id).await?;
        comments.insert(0, comment.clone());
        self.write(post_id, &comments).await?;

        tracing::debug!(post_id = %post_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    async fn add_reply(
        &self,
        actor: Option<&User>,
        post_id: &PostId,
        parent_id: &CommentId,
        content: &str,
    ) -> Result<Comment, DomainError> {
        let author = actor.ok_or(DomainError::Unauthorized)?;
        let reply = Comment::new(post_id.clone(), author, content)?;

        let _guard = self.write_lock.lock().await;
        let mut comments = self.read(post_id).await?;
        let parent = comments
            .iter_mut()
            .find(|c| &c.id == parent_id)
            .ok_or_else(|| DomainError::not_found("Comment", parent_id))?;
        parent.replies.insert(0, reply.clone());
        self.write(post_id, &comments).await?;

        tracing::debug!(post_id = %post_id, parent_id = %parent_id, "Reply added");
        Ok(reply)
    }

    async fn clear(&self, post_id: &PostId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(&keys::comments(post_id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_user;
    use crate::store::InMemoryStore;

    #[tokio::test]
    async fn test_comments_and_replies_are_prepended() {
        let repo = StoredCommentRepository::new(Arc::new(InMemoryStore::new()));
        let post = PostId::from("1");
        let user = demo_user();

        let first = repo.add_comment(Some(&user), &post, " First ").await.unwrap();
        let second = repo.add_comment(Some(&user), &post, "Second").await.unwrap();
        repo.add_reply(Some(&user), &post, &first.id, "Reply A").await.unwrap();
        repo.add_reply(Some(&user), &post, &first.id, "Reply B").await.unwrap();

        let stored = repo.list(&post).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, second.id);
        assert_eq!(stored[1].content, "First");
        let replies: Vec<&str> = stored[1].replies.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(replies, vec!["Reply B", "Reply A"]);
        assert_eq!(stored[1].author_name, "Demo Author");
    }

    #[tokio::test]
    async fn test_rejections() {
        let repo = StoredCommentRepository::new(Arc::new(InMemoryStore::new()));
        let post = PostId::from("1");
        let user = demo_user();

        assert!(matches!(
            repo.add_comment(None, &post, "hi").await,
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            repo.add_comment(Some(&user), &post, "   ").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            repo.add_reply(Some(&user), &post, &CommentId::from("nope"), "hi")
                .await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(repo.list(&post).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_thread_reads_as_empty() {
        let post = PostId::from("9");
        let store = Arc::new(InMemoryStore::with_entries([(keys::comments(&post), "oops")]));
        let repo = StoredCommentRepository::new(store);

        assert!(repo.list(&post).await.unwrap().is_empty());
        repo.add_comment(Some(&demo_user()), &post, "fresh").await.unwrap();
        assert_eq!(repo.list(&post).await.unwrap().len(), 1);
    }
}
