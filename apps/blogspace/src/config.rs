//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;

use blogspace_core::views::{SearchParams, SearchSort};
#[cfg(feature = "redis")]
use blogspace_infra::RedisStoreConfig;

/// Where collections are persisted.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Process memory; nothing survives a restart.
    Memory,
    /// One JSON file per key under this directory.
    Files(PathBuf),
    #[cfg(feature = "redis")]
    Redis(RedisStoreConfig),
}

impl fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageConfig::Memory => write!(f, "memory"),
            StorageConfig::Files(dir) => write!(f, "files:{}", dir.display()),
            #[cfg(feature = "redis")]
            StorageConfig::Redis(config) => write!(f, "redis:{}", config.url),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    /// Seed the sample author and posts into empty storage.
    pub seed_samples: bool,
    /// Home feed page printed on startup.
    pub home_page: usize,
    /// Print this post's page instead of the home feed.
    pub post_slug: Option<String>,
    /// Print the search page instead of the home feed.
    pub search: Option<SearchParams>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage: Self::storage(&lookup),
            seed_samples: lookup("BLOGSPACE_SEED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            home_page: lookup("BLOGSPACE_HOME_PAGE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            post_slug: lookup("BLOGSPACE_POST").filter(|s| !s.trim().is_empty()),
            search: Self::search(&lookup),
        }
    }

    fn search(lookup: &impl Fn(&str) -> Option<String>) -> Option<SearchParams> {
        let query = lookup("BLOGSPACE_SEARCH");
        let tag = lookup("BLOGSPACE_SEARCH_TAG").filter(|t| !t.trim().is_empty());
        if query.is_none() && tag.is_none() {
            return None;
        }

        Some(SearchParams {
            query,
            tag,
            sort: lookup("BLOGSPACE_SEARCH_SORT")
                .map(|s| SearchSort::parse(&s))
                .unwrap_or_default(),
        })
    }

    fn storage(lookup: &impl Fn(&str) -> Option<String>) -> StorageConfig {
        #[cfg(feature = "redis")]
        {
            if lookup("REDIS_URL").is_some() {
                return StorageConfig::Redis(RedisStoreConfig::from_env());
            }
        }

        match lookup("BLOGSPACE_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => StorageConfig::Files(PathBuf::from(dir)),
            None => StorageConfig::Memory,
        }
    }
}
