//! In-memory file catalog
//!
//! The catalog is the single source of truth for a gallery session: an
//! append-only list of [`FileEntry`] records whose insertion order is the
//! baseline display order. There is no update or delete path.
//!
//! # Examples
//!
//! ```
//! use tagdeck::catalog::{FileCatalog, FileEntry};
//!
//! let mut catalog = FileCatalog::new();
//! catalog.append(FileEntry::new("cat.png", 2048, "image/png", vec!["emoji".into()], "file:///tmp/cat.png"));
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.all()[0].name(), "cat.png");
//! ```

pub mod entry;
pub mod tags;

pub use entry::{EntryId, FileEntry, PreviewKind};
pub use tags::TagIndex;

/// Ordered, append-only collection of file entries
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    entries: Vec<FileEntry>,
}

impl FileCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the catalog
    ///
    /// The entry is trusted as given; no validation happens here.
    pub fn append(&mut self, entry: FileEntry) {
        tracing::debug!(id = %entry.id(), name = entry.name(), "catalog append");
        self.entries.push(entry);
    }

    /// All entries in insertion order
    #[must_use]
    pub fn all(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// First entry with the given display name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FileCatalog {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
