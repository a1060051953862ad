use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogspace_core::DomainError;
use blogspace_core::domain::{ProfilePatch, User, UserId};
use blogspace_core::policy;
use blogspace_core::ports::{KeyValueStore, UserRepository};

use crate::collection::{self, keys};
use crate::seed;

/// User directory backed by the `blogspace_users` collection.
pub struct StoredUserRepository {
    store: Arc<dyn KeyValueStore>,
    users: RwLock<Vec<User>>,
}

impl StoredUserRepository {
    /// Load the directory, seeding the demo author when it is missing or
    /// unreadable and `seed_samples` is set.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        seed_samples: bool,
    ) -> Result<Self, DomainError> {
        let users = collection::load_or_init(store.as_ref(), keys::USERS, || {
            if seed_samples {
                seed::sample_users()
            } else {
                Vec::new()
            }
        })
        .await?;

        tracing::info!(count = users.len(), "User directory loaded");

        Ok(Self {
            store,
            users: RwLock::new(users),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserRepository for StoredUserRepository {
    async fn register(&self, email: &str, name: &str) -> Result<User, DomainError> {
        let email = normalize_email(email);
        let name = name.trim();

        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        if name.is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }

        let mut users = self.users.write().await;
        if users.iter().any(|u| normalize_email(&u.email) == email) {
            return Err(DomainError::Duplicate(format!("{email} is already registered")));
        }

        let user = User::new(email, name.to_string());
        let mut next = users.clone();
        next.push(user.clone());
        collection::save(self.store.as_ref(), keys::USERS, &next).await?;
        *users = next;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.users.read().await.iter().find(|u| &u.id == id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        self.users
            .read()
            .await
            .iter()
            .find(|u| normalize_email(&u.email) == email)
            .cloned()
    }

    async fn update_profile(
        &self,
        id: &UserId,
        actor: Option<&UserId>,
        patch: ProfilePatch,
    ) -> Result<User, DomainError> {
        policy::authorize_owner(actor, id)?;

        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| DomainError::not_found("User", id))?;

        let mut next = users.clone();
        next[index].apply(patch);
        let updated = next[index].clone();
        collection::save(self.store.as_ref(), keys::USERS, &next).await?;
        *users = next;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    async fn repo() -> StoredUserRepository {
        StoredUserRepository::load(Arc::new(InMemoryStore::new()), false)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_and_find() {
        let users = repo().await;
        let user = users.register(" Ada@Example.com ", "Ada").await.unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Ada")
        );
        assert_eq!(users.find_by_id(&user.id).await, Some(user.clone()));
        assert_eq!(users.find_by_email("ADA@example.com").await, Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let users = repo().await;
        users.register("ada@example.com", "Ada").await.unwrap();
        let err = users.register("ADA@example.com", "Other").await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let users = repo().await;
        assert!(matches!(
            users.register("not-an-email", "Ada").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            users.register("ada@example.com", "  ").await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_only_self_updates_profile() {
        let users = repo().await;
        let ada = users.register("ada@example.com", "Ada").await.unwrap();
        let bob = users.register("bob@example.com", "Bob").await.unwrap();

        let patch = ProfilePatch {
            bio: Some("Analyst".into()),
            ..Default::default()
        };
        assert!(matches!(
            users.update_profile(&ada.id, Some(&bob.id), patch.clone()).await,
            Err(DomainError::Unauthorized)
        ));

        let updated = users.update_profile(&ada.id, Some(&ada.id), patch).await.unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Analyst"));
    }
}
