//! Domain entities - the core business objects.

mod comment;
mod content;
mod ids;
mod like;
mod post;
mod user;

pub use comment::Comment;
pub use content::{generate_excerpt, parse_tags, read_time, slugify, strip_html};
pub use ids::{CommentId, PostId, UserId};
pub use like::LikeStatus;
pub use post::{NewPost, Post, PostPatch, PostStatus};
pub use user::{ProfilePatch, User};
