use std::cmp::Reverse;

use crate::domain::Post;

use super::feed::published_newest_first;

/// Published posts matching `query` (case-insensitive substring over title,
/// excerpt and tags), in collection order. The query is matched as typed,
/// surrounding spaces included.
pub fn search_published(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| p.is_published() && p.matches(&needle))
        .cloned()
        .collect()
}

/// Result ordering on the search page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SearchSort {
    /// Parse a sort key; anything unrecognised means newest.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "title" => Self::Title,
            _ => Self::Newest,
        }
    }
}

/// Inputs of the search page.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Case-insensitive substring match against tags.
    pub tag: Option<String>,
    pub sort: SearchSort,
}

/// Search page results: text match (or every published post when the query
/// is empty), narrowed by tag, then sorted.
pub fn search_page(posts: &[Post], params: &SearchParams) -> Vec<Post> {
    let query = params.query.as_deref().filter(|q| !q.is_empty());
    let mut results = match query {
        Some(query) => search_published(posts, query),
        None => published_newest_first(posts),
    };

    if let Some(tag) = params.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let tag = tag.to_lowercase();
        results.retain(|p| p.tags.iter().any(|t| t.to_lowercase().contains(&tag)));
    }

    match params.sort {
        SearchSort::Newest => results.sort_by_key(|p| Reverse(p.effective_date())),
        SearchSort::Oldest => results.sort_by_key(|p| p.effective_date()),
        SearchSort::Title => results.sort_by_cached_key(|p| p.title.to_lowercase()),
    }

    results
}
