//! Derived view functions.
//!
//! Pure projections over a snapshot of the post collection (and of a post's
//! comments). Nothing here mutates or persists.

mod comments;
mod facets;
mod feed;
mod pagination;
mod related;
mod search;

pub use comments::{comment_tree, total_comments};
pub use facets::tag_facets;
pub use feed::{HomeFeed, home_feed, posts_listing, published_newest_first};
pub use pagination::{PAGE_SIZE, Page, paginate};
pub use related::{RELATED_LIMIT, related_posts};
pub use search::{SearchParams, SearchSort, search_page, search_published};
