//! Running index of distinct tags
//!
//! The index only grows: every append unions the new entry's tags into it.
//! Nothing is ever removed, so tags stay selectable for the whole session.

use std::collections::HashSet;

/// Set of distinct tags seen across the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: HashSet<String>,
}

impl TagIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tags of a newly appended entry
    ///
    /// Each tag is trimmed; empty tags are skipped. Already known tags are
    /// left untouched, so repeating an update changes nothing.
    pub fn update<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !self.tags.contains(tag) {
                self.tags.insert(tag.to_string());
            }
        }
    }

    /// All known tags, unordered
    #[must_use]
    pub const fn all(&self) -> &HashSet<String> {
        &self.tags
    }

    /// All known tags in lexical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
