//! # Blogspace Infrastructure
//!
//! Concrete implementations of the ports defined in `blogspace-core`:
//! key-value stores and the repositories layered on top of them.
//!
//! ## Feature Flags
//!
//! - `minimal` - In-memory and file stores only
//! - `redis` - Redis-backed key-value store
//! - `full` - All of the above

pub mod collection;
pub mod repository;
pub mod seed;
pub mod store;

// Re-exports - Stores
pub use store::{FileStore, InMemoryStore};

#[cfg(feature = "redis")]
pub use store::{RedisStore, RedisStoreConfig};

// Re-exports - Repositories
pub use repository::{
    StoredCommentRepository, StoredLikeRepository, StoredPostRepository, StoredUserRepository,
};
