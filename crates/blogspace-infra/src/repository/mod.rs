//! Repositories over the key-value store.
//!
//! Posts and users are held in memory and written back in full after every
//! mutation; comments and likes are read and written per post on demand.

mod comments;
mod likes;
mod posts;
mod users;

pub use comments::StoredCommentRepository;
pub use likes::StoredLikeRepository;
pub use posts::StoredPostRepository;
pub use users::StoredUserRepository;
