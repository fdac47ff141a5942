//! Search and tag filtering over the catalog
//!
//! Filtering is a stable, in-memory pass: an entry is kept when its name
//! contains the query (case-insensitive) and, if a tag filter is set, its
//! tags contain that tag exactly. Relative order is never changed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  Searchable                 │  ← name + tags view
//! └─────────────────────────────┘
//!            ▲ implements
//!            │
//!        FileEntry ...
//!
//! ┌─────────────────────────────┐
//! │  Filter                     │  ← matching logic
//! │  - matches(&T)              │
//! └─────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use tagdeck::catalog::FileEntry;
//! use tagdeck::query::evaluate;
//!
//! let entries = vec![
//!     FileEntry::new("cat.png", 1, "image/png", vec!["emoji".into()], "file:///cat.png"),
//!     FileEntry::new("report.pdf", 1, "application/pdf", vec!["doc".into()], "file:///report.pdf"),
//! ];
//!
//! let hits = evaluate(&entries, "CAT", None);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name(), "cat.png");
//! ```

use crate::catalog::FileEntry;
use serde::{Deserialize, Serialize};

/// Current search input and tag selection
///
/// Owned by the session and read on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query as typed
    pub query: String,
    /// Selected tag, `None` for "all tags"
    pub selected_tag: Option<String>,
}

impl FilterState {
    /// Create a filter state
    ///
    /// An empty tag selection is stored as `None`.
    #[must_use]
    pub fn new(query: impl Into<String>, selected_tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            selected_tag: selected_tag.filter(|t| !t.is_empty()),
        }
    }

    /// Query trimmed and lowercased, as used for matching
    #[must_use]
    pub fn normalized_query(&self) -> String {
        normalize_query(&self.query)
    }

    /// Whether neither a query nor a tag restricts the view
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.selected_tag.is_none()
    }

    /// Matcher for this state
    #[must_use]
    pub fn matcher(&self) -> Filter<'_> {
        Filter::new(&self.query, self.selected_tag.as_deref())
    }
}

/// Borrowed view of an item as a name plus tags
pub trait Searchable {
    /// Display name matched against the query
    fn name(&self) -> &str;

    /// Tags matched against the tag filter
    fn tags(&self) -> &[String];
}

impl Searchable for FileEntry {
    fn name(&self) -> &str {
        FileEntry::name(self)
    }

    fn tags(&self) -> &[String] {
        FileEntry::tags(self)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}

/// Compiled filter: normalized query plus optional exact tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<'a> {
    query: String,
    tag: Option<&'a str>,
}

impl<'a> Filter<'a> {
    /// Build a filter; an empty tag means no tag restriction
    #[must_use]
    pub fn new(query: &str, tag: Option<&'a str>) -> Self {
        Self {
            query: normalize_query(query),
            tag: tag.filter(|t| !t.is_empty()),
        }
    }

    /// Whether `item` passes both the query and the tag check
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        let name_ok =
            self.query.is_empty() || item.name().to_lowercase().contains(self.query.as_str());
        let tag_ok = self
            .tag
            .is_none_or(|tag| item.tags().iter().any(|t| t == tag));

        name_ok && tag_ok
    }
}

/// Evaluate a query and optional tag filter over `entries`
///
/// Returns the matching entries in their original relative order. Zero
/// matches yield an empty vector.
#[must_use]
pub fn evaluate<'a, T: Searchable>(
    entries: &'a [T],
    query: &str,
    tag_filter: Option<&str>,
) -> Vec<&'a T> {
    let filter = Filter::new(query, tag_filter);
    entries.iter().filter(|item| filter.matches(*item)).collect()
}

/// Evaluate the current filter state over `entries`
#[must_use]
pub fn evaluate_state<'a, T: Searchable>(entries: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let filter = state.matcher();
    entries.iter().filter(|item| filter.matches(*item)).collect()
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{entry, names, sample_catalog};

    #[test]
    fn test_query_matches_name_substring() {
        let catalog = sample_catalog();
        let hits = evaluate(catalog.all(), "cat", None);
        assert_eq!(names(hits), vec!["cat.png"]);
    }

    #[test]
    fn test_tag_filter_matches_exactly() {
        let catalog = sample_catalog();
        let hits = evaluate(catalog.all(), "", Some("doc"));
        assert_eq!(names(hits), vec!["report.pdf"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let catalog = sample_catalog();
        assert!(evaluate(catalog.all(), "xyz", None).is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let entries = vec![entry("Holiday-Photo.JPG", &[])];
        assert_eq!(evaluate(&entries, "  photo.jpg ", None).len(), 1);
        assert_eq!(evaluate(&entries, "HOLIDAY", None).len(), 1);
    }

    #[test]
    fn test_tag_filter_is_case_sensitive() {
        let entries = vec![entry("a", &["Emoji"]), entry("b", &["emoji"])];
        let hits = evaluate(&entries, "", Some("emoji"));
        assert_eq!(names(hits), vec!["b"]);
    }

    #[test]
    fn test_tag_filter_does_not_match_substrings() {
        let entries = vec![entry("a", &["emojis"]), entry("b", &["emo"])];
        assert!(evaluate(&entries, "", Some("emoji")).is_empty());
    }

    #[test]
    fn test_query_and_tag_compose() {
        let entries = vec![
            entry("cat.png", &["emoji"]),
            entry("cat.pdf", &["doc"]),
            entry("dog.png", &["emoji"]),
        ];
        let hits = evaluate(&entries, "cat", Some("emoji"));
        assert_eq!(names(hits), vec!["cat.png"]);
    }

    #[test]
    fn test_empty_tag_means_no_tag_filter() {
        let catalog = sample_catalog();
        assert_eq!(evaluate(catalog.all(), "", Some("")).len(), 2);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let entries = vec![
            entry("z-notes.txt", &[]),
            entry("a-notes.txt", &[]),
            entry("other.bin", &[]),
            entry("m-notes.txt", &[]),
        ];
        let hits = evaluate(&entries, "notes", None);
        assert_eq!(names(hits), vec!["z-notes.txt", "a-notes.txt", "m-notes.txt"]);
    }

    #[test]
    fn test_results_never_exceed_input_and_all_contain_query() {
        let entries = vec![
            entry("Alpha.txt", &["x"]),
            entry("beta.txt", &[]),
            entry("ALPHABET.md", &["y"]),
            entry("gamma", &[]),
        ];
        for query in ["", "a", "alpha", "ALP", "t.", "zzz", " beta "] {
            let hits = evaluate(&entries, query, None);
            assert!(hits.len() <= entries.len());
            let needle = query.trim().to_lowercase();
            for hit in hits {
                assert!(hit.name().to_lowercase().contains(&needle), "{query:?}");
            }
        }
    }

    #[test]
    fn test_filter_state_drops_empty_tag() {
        let state = FilterState::new("Cat ", Some(String::new()));
        assert_eq!(state.selected_tag, None);
        assert_eq!(state.normalized_query(), "cat");
        assert!(!state.is_unfiltered());
        assert!(FilterState::default().is_unfiltered());
    }

    #[test]
    fn test_evaluate_state_uses_both_fields() {
        let catalog = sample_catalog();
        let state = FilterState::new("", Some("emoji".to_string()));
        assert_eq!(names(evaluate_state(catalog.all(), &state)), vec!["cat.png"]);
    }

    #[test]
    fn test_evaluate_state_goes_through_matcher() {
        let catalog = sample_catalog();
        let state = FilterState {
            query: " CAT ".to_string(),
            selected_tag: Some(String::new()),
        };
        assert_eq!(names(evaluate_state(catalog.all(), &state)), vec!["cat.png"]);
        assert!(state.matcher().matches(&catalog.all()[0]));
        assert!(!state.matcher().matches(&catalog.all()[1]));
    }

    #[test]
    fn test_filter_matches_single_item() {
        let cat = entry("cat.png", &["emoji"]);
        assert!(Filter::new("CAT", Some("emoji")).matches(&cat));
        assert!(!Filter::new("cat", Some("doc")).matches(&cat));
        assert!(Filter::new("", None).matches(&cat));
    }
}
