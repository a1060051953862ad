use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// User entity - an author or reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    /// Unique within the store.
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user with generated ID, timestamps and a default avatar.
    pub fn new(email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            avatar: Some(Self::default_avatar(&name)),
            email,
            name,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn default_avatar(seed: &str) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
    }

    /// Avatar URL, falling back to the generated one.
    pub fn avatar_url(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| Self::default_avatar(&self.name))
    }

    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            self.name = name.trim().to_string();
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio).filter(|b| !b.trim().is_empty());
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar).filter(|a| !a.trim().is_empty());
        }
        self.updated_at = Utc::now();
    }
}
