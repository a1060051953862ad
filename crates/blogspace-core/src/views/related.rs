use crate::domain::Post;

use super::feed::published_newest_first;

/// Maximum number of related posts shown under a post.
pub const RELATED_LIMIT: usize = 3;

/// Other published posts sharing at least one tag with `current`, newest
/// first. When none share a tag, the most recent other published posts.
pub fn related_posts(current: &Post, posts: &[Post]) -> Vec<Post> {
    let others: Vec<Post> = published_newest_first(posts)
        .into_iter()
        .filter(|p| p.id != current.id)
        .collect();

    let sharing: Vec<Post> = others
        .iter()
        .filter(|p| p.shares_tag_with(current))
        .take(RELATED_LIMIT)
        .cloned()
        .collect();

    if sharing.is_empty() {
        others.into_iter().take(RELATED_LIMIT).collect()
    } else {
        sharing
    }
}
