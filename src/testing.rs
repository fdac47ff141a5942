//! Testing utilities for tagdeck
//!
//! Fixture builders for entries and catalogs, so unit tests can describe a
//! gallery in one line.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{FileCatalog, FileEntry};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Build an untyped entry with the given name and tags
///
/// The URL is a `file://` reference under `/tmp` and the size is zero.
#[must_use]
pub fn entry(name: &str, tags: &[&str]) -> FileEntry {
    typed_entry(name, 0, "", tags)
}

/// Build an entry with explicit size and content type
#[must_use]
pub fn typed_entry(name: &str, size: u64, mime: &str, tags: &[&str]) -> FileEntry {
    FileEntry::new(
        name,
        size,
        mime,
        tags.iter().map(ToString::to_string).collect(),
        format!("file:///tmp/{name}"),
    )
}

/// Catalog with one image and one document
///
/// ```text
/// cat.png     [emoji, cute]
/// report.pdf  [doc]
/// ```
#[must_use]
pub fn sample_catalog() -> FileCatalog {
    let mut catalog = FileCatalog::new();
    catalog.append(typed_entry("cat.png", 1536, "image/png", &["emoji", "cute"]));
    catalog.append(typed_entry("report.pdf", 1_048_576, "application/pdf", &["doc"]));
    catalog
}

/// Names of the given entries, in order
#[must_use]
pub fn names<'a>(entries: impl IntoIterator<Item = &'a FileEntry>) -> Vec<&'a str> {
    entries.into_iter().map(FileEntry::name).collect()
}

struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under the binary's default `warn` subscriber and return the log
#[must_use]
pub fn capture_warnings(f: impl FnOnce()) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_ansi(false)
        .with_writer(move || LogBuffer(Arc::clone(&writer)))
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
