//! Client-side text search over the post list

mod debounce;

pub use debounce::{spawn, SearchEvent, SearchHandle, SearchResults};

use crate::content::PostSummary;

/// Normalize a raw search box value: trimmed and lowercased
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether a post matches an already normalized query
///
/// Title, description, excerpt, tags and category are searched, in
/// that order, by case-insensitive substring.
pub fn matches(post: &PostSummary, query: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query);

    contains(post.title.as_str())
        || post.description.as_deref().is_some_and(contains)
        || post.excerpt.as_deref().is_some_and(contains)
        || post.tags.iter().any(|tag| contains(tag.as_str()))
        || post.category.as_deref().is_some_and(contains)
}

/// Posts matching `query`, in manifest order; a blank query keeps them all
pub fn search<'a>(posts: &'a [PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let query = normalize_query(query);
    if query.is_empty() {
        return posts.iter().collect();
    }
    posts.iter().filter(|post| matches(post, &query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PostSummary> {
        let mut a = PostSummary::new("a.md", "Async Rust");
        a.tags = vec!["Tokio".to_string()];

        let mut b = PostSummary::new("b.md", "Notes");
        b.description = Some("Working with Serde".to_string());
        b.category = Some("Dev".to_string());

        let mut c = PostSummary::new("c.md", "Travel");
        c.excerpt = Some("A week in Busan".to_string());

        vec![a, b, c]
    }

    fn files(posts: Vec<&PostSummary>) -> Vec<&str> {
        posts.into_iter().map(|p| p.file.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_all() {
        let posts = sample();
        assert_eq!(files(search(&posts, "")), ["a.md", "b.md", "c.md"]);
        assert_eq!(files(search(&posts, "   ")), ["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_search_fields() {
        let posts = sample();
        assert_eq!(files(search(&posts, "rust")), ["a.md"]);
        assert_eq!(files(search(&posts, "tok")), ["a.md"]);
        assert_eq!(files(search(&posts, "serde")), ["b.md"]);
        assert_eq!(files(search(&posts, "dev")), ["b.md"]);
        assert_eq!(files(search(&posts, "busan")), ["c.md"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let posts = sample();
        assert_eq!(files(search(&posts, "  ASYNC ")), ["a.md"]);
    }

    #[test]
    fn test_file_name_is_not_searched() {
        let posts = sample();
        assert!(search(&posts, "c.md").is_empty());
    }

    #[test]
    fn test_matches_in_manifest_order() {
        let posts = sample();
        // "s" appears in every post
        assert_eq!(files(search(&posts, "s")), ["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_korean_query() {
        let posts = vec![PostSummary::new("k.md", "러스트 입문")];
        assert_eq!(files(search(&posts, "러스트")), ["k.md"]);
    }
}
