use crate::domain::Post;

use super::pagination::{Page, paginate};

const FEATURED_COUNT: usize = 3;
const RECENT_COUNT: usize = 6;

/// Published posts, newest first by effective date.
///
/// The sort is stable, so posts with equal dates keep collection order.
pub fn published_newest_first(posts: &[Post]) -> Vec<Post> {
    let mut published: Vec<Post> = posts.iter().filter(|p| p.is_published()).cloned().collect();
    published.sort_by_key(|p| std::cmp::Reverse(p.effective_date()));
    published
}

/// Published posts carrying exactly `tag` (all published posts when `None`),
/// newest first, cut to one page.
pub fn posts_listing(posts: &[Post], tag: Option<&str>, page: usize) -> Page<Post> {
    let filtered = published_newest_first(posts)
        .into_iter()
        .filter(|p| tag.is_none_or(|tag| p.tags.iter().any(|t| t == tag)))
        .collect();
    paginate(filtered, page)
}

/// The two home page strips.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeFeed {
    pub featured: Vec<Post>,
    pub recent: Vec<Post>,
}

pub fn home_feed(posts: &[Post]) -> HomeFeed {
    let published = published_newest_first(posts);
    HomeFeed {
        featured: published.iter().take(FEATURED_COUNT).cloned().collect(),
        recent: published.into_iter().take(RECENT_COUNT).collect(),
    }
}
