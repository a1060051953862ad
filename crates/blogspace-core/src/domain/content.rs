//! Editor helpers: slugs, excerpts, read time and tag parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Characters kept in a generated excerpt before the ellipsis.
const EXCERPT_CHARS: usize = 150;

const WORDS_PER_MINUTE: usize = 200;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("html tag pattern is valid"));

/// Derive a URL-safe slug from a title.
///
/// Lowercases and keeps only ASCII alphanumerics, spaces and hyphens. Each
/// run of spaces and hyphens becomes a single `-`. Other whitespace is
/// dropped like any other character.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if (ch == ' ' || ch == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug
}

/// Remove HTML tags and collapse whitespace.
pub fn strip_html(html: &str) -> String {
    HTML_TAG
        .replace_all(html, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text excerpt of HTML content, truncated to 150 characters plus `...`.
pub fn generate_excerpt(html: &str) -> String {
    let text = strip_html(html);
    if text.chars().count() > EXCERPT_CHARS {
        let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        excerpt.push_str("...");
        excerpt
    } else {
        text
    }
}

/// Estimated read time in whole minutes, never less than one.
pub fn read_time(html: &str) -> u32 {
    let words = strip_html(html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Split comma-separated tag input, dropping blanks and repeats.
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

pub(crate) fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(
            slugify("Getting Started with Next.js 15"),
            "getting-started-with-nextjs-15"
        );
        assert_eq!(slugify("Hello,   World!"), "hello-world");
        assert_eq!(slugify("Rust -- the  good parts"), "rust-the-good-parts");
        assert_eq!(slugify("Café crème"), "caf-crme");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_keeps_edge_hyphens_and_drops_tabs() {
        assert_eq!(slugify("  Hello World "), "-hello-world-");
        assert_eq!(slugify("tab\there"), "tabhere");
        assert_eq!(slugify("line\nbreak"), "linebreak");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for title in [
            "Getting Started with Next.js 15",
            "The Art of Modern Web Design",
            "-- leading and trailing --",
            "UPPER lower 123",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
            assert_eq!(slugify(title), once);
        }
    }

    #[test]
    fn test_excerpt_strips_tags_and_truncates() {
        assert_eq!(
            generate_excerpt("<h2>Intro</h2>\n   <p>Short body.</p>"),
            "Intro Short body."
        );

        let long = format!("<p>{}</p>", "word ".repeat(60));
        let excerpt = generate_excerpt(&long);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_read_time() {
        assert_eq!(read_time(""), 1);
        assert_eq!(read_time("<p>just a few words</p>"), 1);
        assert_eq!(read_time(&"word ".repeat(200)), 1);
        assert_eq!(read_time(&"word ".repeat(201)), 2);
        assert_eq!(read_time(&"<b>word</b> ".repeat(1000)), 5);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" rust, web ,, rust,async "),
            vec!["rust", "web", "async"]
        );
        assert!(parse_tags(" , ").is_empty());
    }
}
