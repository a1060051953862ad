use std::collections::BTreeSet;

use crate::domain::Post;

/// Distinct tags across published posts, alphabetically.
pub fn tag_facets(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .filter(|p| p.is_published())
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
