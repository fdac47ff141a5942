//! File entry model
//!
//! A [`FileEntry`] describes one ingested file: display metadata plus an
//! opaque reference URL. It never holds file bytes.

use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Identifier of a catalog entry
///
/// Built from the creation time in milliseconds and a random tiebreak, so two
/// entries created in the same millisecond still differ in practice.
/// Uniqueness is expected, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId {
    /// Creation time, milliseconds since the Unix epoch
    pub created_ms: i64,
    /// Random tiebreak
    pub tiebreak: u32,
}

impl EntryId {
    /// Create an id stamped with the current time
    #[must_use]
    pub fn generate() -> Self {
        Self {
            created_ms: chrono::Utc::now().timestamp_millis(),
            tiebreak: rand::thread_rng().r#gen(),
        }
    }

    /// Create an id from explicit parts
    #[must_use]
    pub const fn from_parts(created_ms: i64, tiebreak: u32) -> Self {
        Self {
            created_ms,
            tiebreak,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:08x}", self.created_ms, self.tiebreak)
    }
}

/// How an entry can be previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    /// Renderable image; `preview` carries the reference
    Image,
    /// Anything else; shown with a generic file icon
    Other,
}

impl PreviewKind {
    /// Derive the preview kind from a content type
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else {
            Self::Other
        }
    }
}

/// One catalog record
///
/// Entries are immutable once created. For image entries the preview
/// reference is the same as `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    id: EntryId,
    name: String,
    size: u64,
    mime: String,
    tags: Vec<String>,
    url: String,
    preview: Option<String>,
    preview_kind: PreviewKind,
}

impl FileEntry {
    /// Create an entry with a freshly generated id
    ///
    /// Tags are trimmed and empty ones dropped; order and duplicates are
    /// kept as given. The preview kind follows `mime`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime: impl Into<String>,
        tags: Vec<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::with_id(EntryId::generate(), name, size, mime, tags, url)
    }

    /// Create an entry with an explicit id
    #[must_use]
    pub fn with_id(
        id: EntryId,
        name: impl Into<String>,
        size: u64,
        mime: impl Into<String>,
        tags: Vec<String>,
        url: impl Into<String>,
    ) -> Self {
        let mime = mime.into();
        let url = url.into();
        let preview_kind = PreviewKind::from_mime(&mime);
        let preview = match preview_kind {
            PreviewKind::Image => Some(url.clone()),
            PreviewKind::Other => None,
        };

        Self {
            id,
            name: name.into(),
            size,
            mime,
            tags: normalize_tags(tags),
            url,
            preview,
            preview_kind,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Platform-reported content type, possibly empty
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Reference used for download and copy
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Preview reference, only present for images
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub const fn preview_kind(&self) -> PreviewKind {
        self.preview_kind
    }

    /// Whether the entry carries `tag` exactly (case-sensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
