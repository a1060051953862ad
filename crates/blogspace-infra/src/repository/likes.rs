use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use blogspace_core::DomainError;
use blogspace_core::domain::{LikeStatus, PostId, UserId};
use blogspace_core::policy;
use blogspace_core::ports::{KeyValueStore, LikeRepository};

use crate::collection::{self, Loaded, keys};

/// Per-post like sets stored under `post_likes_{postId}` as arrays of user ids.
pub struct StoredLikeRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoredLikeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self, post_id: &PostId) -> Result<Vec<UserId>, DomainError> {
        let key = keys::likes(post_id);
        match collection::load(self.store.as_ref(), &key).await? {
            Loaded::Found(likes) => Ok(likes),
            Loaded::Missing => Ok(Vec::new()),
            Loaded::Corrupt(reason) => {
                tracing::warn!(key = %key, error = %reason, "Stored likes are corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }
}

fn status_of(likes: &[UserId], viewer: Option<&UserId>) -> LikeStatus {
    LikeStatus {
        liked: viewer.is_some_and(|v| likes.contains(v)),
        count: likes.len(),
    }
}

#[async_trait]
impl LikeRepository for StoredLikeRepository {
    async fn toggle(
        &self,
        actor: Option<&UserId>,
        post_id: &PostId,
    ) -> Result<LikeStatus, DomainError> {
        let actor = policy::require_actor(actor)?;

        let _guard = self.write_lock.lock().await;
        let mut likes = self.read(post_id).await?;
        if let Some(index) = likes.iter().position(|id| id == actor) {
            likes.remove(index);
        } else {
            likes.push(actor.clone());
        }
        collection::save(self.store.as_ref(), &keys::likes(post_id), &likes).await?;

        Ok(status_of(&likes, Some(actor)))
    }

    async fn status(
        &self,
        post_id: &PostId,
        viewer: Option<&UserId>,
    ) -> Result<LikeStatus, DomainError> {
        Ok(status_of(&self.read(post_id).await?, viewer))
    }

    async fn clear(&self, post_id: &PostId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(&keys::likes(post_id)).await?;
        Ok(())
    }
}
