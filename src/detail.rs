//! Detail record for an activated card
//!
//! The detail viewer (TUI modal, `show` command) is a pure consumer of
//! [`EntryDetail`]; it owns presentation and lifecycle.

use crate::catalog::FileEntry;
use crate::size::format_size;
use serde::Serialize;

/// Label used when an entry has no tags
pub const NO_TAGS_LABEL: &str = "none";

/// Everything the detail viewer shows for one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail {
    /// File name
    pub title: String,
    /// Human-readable size
    pub size_label: String,
    /// Comma-joined tags, or `"none"`
    pub tags_label: String,
    /// Preview reference (images only)
    pub preview_ref: Option<String>,
    /// Reference for download and copy
    pub download_ref: String,
}

/// Describe an entry for the detail viewer
#[must_use]
pub fn describe(entry: &FileEntry) -> EntryDetail {
    let tags_label = if entry.tags().is_empty() {
        NO_TAGS_LABEL.to_string()
    } else {
        entry.tags().join(", ")
    };

    EntryDetail {
        title: entry.name().to_string(),
        size_label: format_size(entry.size()),
        tags_label,
        preview_ref: entry.preview().map(ToString::to_string),
        download_ref: entry.url().to_string(),
    }
}

impl From<&FileEntry> for EntryDetail {
    fn from(entry: &FileEntry) -> Self {
        describe(entry)
    }
}
