use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockWriteGuard};

use blogspace_core::DomainError;
use blogspace_core::domain::{NewPost, Post, PostId, PostPatch, UserId};
use blogspace_core::policy;
use blogspace_core::ports::{KeyValueStore, PostRepository, UserRepository};
use blogspace_core::views;

use crate::collection::{self, keys};
use crate::seed;

/// Post repository backed by the `blogspace_posts` collection.
///
/// The collection lives in memory; every mutation writes the whole list
/// back before it becomes visible to readers. The write lock is held across
/// that write, so mutations are applied one at a time.
pub struct StoredPostRepository {
    store: Arc<dyn KeyValueStore>,
    users: Arc<dyn UserRepository>,
    posts: RwLock<Vec<Post>>,
}

impl StoredPostRepository {
    /// Load the collection, seeding the sample posts when it is missing or
    /// unreadable and `seed_samples` is set.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        users: Arc<dyn UserRepository>,
        seed_samples: bool,
    ) -> Result<Self, DomainError> {
        let posts = collection::load_or_init(store.as_ref(), keys::POSTS, || {
            if seed_samples {
                tracing::info!("Seeding sample posts");
                seed::sample_posts()
            } else {
                Vec::new()
            }
        })
        .await?;

        tracing::info!(count = posts.len(), "Post collection loaded");

        Ok(Self {
            store,
            users,
            posts: RwLock::new(posts),
        })
    }

    /// The actor must be signed in and known to the user directory.
    async fn known_actor(&self, actor: Option<&UserId>) -> Result<UserId, DomainError> {
        let actor = policy::require_actor(actor)?;
        if self.users.find_by_id(actor).await.is_none() {
            tracing::debug!(user_id = %actor, "Mutation by unknown user rejected");
            return Err(DomainError::Unauthorized);
        }
        Ok(actor.clone())
    }

    async fn commit(
        &self,
        current: &mut RwLockWriteGuard<'_, Vec<Post>>,
        next: Vec<Post>,
    ) -> Result<(), DomainError> {
        collection::save(self.store.as_ref(), keys::POSTS, &next).await?;
        **current = next;
        Ok(())
    }

    fn position(posts: &[Post], id: &PostId) -> Result<usize, DomainError> {
        posts
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DomainError::not_found("Post", id))
    }
}

#[async_trait]
impl PostRepository for StoredPostRepository {
    async fn create(&self, actor: Option<&UserId>, draft: NewPost) -> Result<Post, DomainError> {
        let author = self.known_actor(actor).await?;
        let post = Post::new(author, draft)?;

        let mut posts = self.posts.write().await;
        let mut next = Vec::with_capacity(posts.len() + 1);
        next.push(post.clone());
        next.extend(posts.iter().cloned());
        self.commit(&mut posts, next).await?;

        tracing::info!(post_id = %post.id, status = ?post.status, "Post created");
        Ok(post)
    }

    async fn update(
        &self,
        id: &PostId,
        actor: Option<&UserId>,
        patch: PostPatch,
    ) -> Result<Post, DomainError> {
        let actor = self.known_actor(actor).await?;

        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id)?;
        policy::authorize_owner(Some(&actor), &posts[index].author_id)?;

        let mut next = posts.clone();
        next[index].apply(patch)?;
        let updated = next[index].clone();
        self.commit(&mut posts, next).await?;

        tracing::info!(post_id = %id, "Post updated");
        Ok(updated)
    }

    async fn delete(&self, id: &PostId, actor: Option<&UserId>) -> Result<(), DomainError> {
        let actor = self.known_actor(actor).await?;

        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id)?;
        policy::authorize_owner(Some(&actor), &posts[index].author_id)?;

        let mut next = posts.clone();
        next.remove(index);
        self.commit(&mut posts, next).await?;
        drop(posts);

        tracing::info!(post_id = %id, "Post deleted");

        // Best-effort once committed: a leftover key is orphaned, not corrupt.
        for key in [keys::comments(id), keys::likes(id)] {
            if let Err(e) = self.store.remove(&key).await {
                tracing::warn!(key = %key, error = %e, "Failed to remove engagement data of deleted post");
            }
        }
        Ok(())
    }

    async fn get_by_id(&self, id: &PostId) -> Result<Post, DomainError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Post", slug))
    }

    async fn list_by_author(&self, author_id: &UserId) -> Vec<Post> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|p| p.is_owned_by(author_id))
            .cloned()
            .collect()
    }

    async fn list_published(&self) -> Vec<Post> {
        views::published_newest_first(&self.posts.read().await)
    }

    async fn search(&self, query: &str) -> Vec<Post> {
        views::search_published(&self.posts.read().await, query)
    }

    async fn snapshot(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use blogspace_core::StoreError;
    use blogspace_core::domain::PostStatus;

    use super::*;
    use crate::repository::StoredUserRepository;
    use crate::store::InMemoryStore;

    async fn setup() -> (Arc<InMemoryStore>, StoredPostRepository, UserId, UserId) {
        let store = Arc::new(InMemoryStore::new());
        let users = Arc::new(StoredUserRepository::load(store.clone(), true).await.unwrap());
        let other = users.register("other@example.com", "Other").await.unwrap().id;
        let repo = StoredPostRepository::load(store.clone(), users, true)
            .await
            .unwrap();
        (store, repo, UserId::from(seed::DEMO_USER_ID), other)
    }

    #[tokio::test]
    async fn test_create_requires_known_author() {
        let (_, repo, _, _) = setup().await;

        let err = repo
            .create(None, NewPost::new("Title", "Body"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));

        let stranger = UserId::from("stranger");
        let err = repo
            .create(Some(&stranger), NewPost::new("Title", "Body"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_prepends_and_persists() {
        let (store, repo, demo, _) = setup().await;

        let post = repo
            .create(Some(&demo), NewPost::new("Fresh Post", "<p>Body</p>"))
            .await
            .unwrap();

        assert_eq!(repo.snapshot().await[0].id, post.id);
        let raw = store.get(keys::POSTS).await.unwrap().unwrap();
        let stored: Vec<Post> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[0], post);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update_or_delete() {
        let (_, repo, _, other) = setup().await;
        let id = PostId::from("1");
        let before = repo.get_by_id(&id).await.unwrap();

        let err = repo
            .update(
                &id,
                Some(&other),
                PostPatch {
                    title: Some("Hijacked".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));

        let err = repo.delete(&id, Some(&other)).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));

        assert_eq!(repo.get_by_id(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (_, repo, demo, _) = setup().await;
        let missing = PostId::from("missing");

        let err = repo
            .update(&missing, Some(&demo), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(matches!(
            repo.delete(&missing, Some(&demo)).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            repo.get_by_id(&missing).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let (_, repo, demo, _) = setup().await;

        let draft = repo
            .create(Some(&demo), NewPost::new("Work in progress", "Body"))
            .await
            .unwrap();
        assert!(draft.published_at.is_none());
        assert!(repo.list_by_author(&demo).await.iter().any(|p| p.id == draft.id));
        assert!(!repo.list_published().await.iter().any(|p| p.id == draft.id));

        let published = repo
            .update(
                &draft.id,
                Some(&demo),
                PostPatch {
                    status: Some(PostStatus::Published),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let published_at = published.published_at.expect("published");

        let edited = repo
            .update(
                &draft.id,
                Some(&demo),
                PostPatch {
                    content: Some("New body".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.published_at, Some(published_at));
        assert!(edited.updated_at >= published.updated_at);
        assert_eq!(repo.list_published().await[0].id, draft.id);
    }

    #[tokio::test]
    async fn test_delete_removes_post_and_engagement() {
        let (store, repo, demo, _) = setup().await;
        let id = PostId::from("2");
        store.set(&keys::comments(&id), "[]").await.unwrap();
        store.set(&keys::likes(&id), "[\"x\"]").await.unwrap();

        repo.delete(&id, Some(&demo)).await.unwrap();

        assert!(repo.get_by_id(&id).await.is_err());
        assert_eq!(store.get(&keys::comments(&id)).await.unwrap(), None);
        assert_eq!(store.get(&keys::likes(&id)).await.unwrap(), None);
    }

    struct RemoveFails(InMemoryStore);

    #[async_trait]
    impl KeyValueStore for RemoveFails {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value).await
        }

        async fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Io("disk unavailable".into()))
        }
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_engagement_cleanup_fails() {
        let store = Arc::new(RemoveFails(InMemoryStore::new()));
        let users = Arc::new(StoredUserRepository::load(store.clone(), true).await.unwrap());
        let repo = StoredPostRepository::load(store.clone(), users, true)
            .await
            .unwrap();
        let demo = UserId::from(seed::DEMO_USER_ID);
        let id = PostId::from("1");

        repo.delete(&id, Some(&demo)).await.unwrap();

        assert!(repo.get_by_id(&id).await.is_err());
        let raw = store.get(keys::POSTS).await.unwrap().unwrap();
        let stored: Vec<Post> = serde_json::from_str(&raw).unwrap();
        assert!(stored.iter().all(|p| p.id != id));
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let (_, repo, _, _) = setup().await;
        let post = repo.get_by_slug("art-of-modern-web-design").await.unwrap();
        assert_eq!(post.id, PostId::from("2"));
        assert!(repo.get_by_slug("nope").await.is_err());
    }
}
