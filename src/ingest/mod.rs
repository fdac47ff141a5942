//! Turning files on disk into catalog entries
//!
//! Ingestion is the only place that touches the filesystem before a file
//! reaches the catalog. It expands glob patterns, reads metadata, guesses a
//! mime type from the extension and attaches the user's tags.
//!
//! ```text
//! patterns ─→ expand_patterns ─→ paths ─→ FileEntry::from_path ─→ GalleryEvent::FileIngested
//!                                              ▲
//!                            parse_tags / prompt_tags
//! ```

pub mod error;

pub use error::{IngestError, Result};

use crate::catalog::FileEntry;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};
use url::Url;

/// Split comma-separated tag text
///
/// Tags are trimmed and empty pieces dropped. Order and duplicates are kept.
///
/// ```
/// use tagdeck::ingest::parse_tags;
///
/// assert_eq!(parse_tags(" a, b ,,a "), vec!["a", "b", "a"]);
/// assert!(parse_tags("").is_empty());
/// ```
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Guess a mime type from the file extension
///
/// Unknown or missing extensions give an empty string.
#[must_use]
pub fn detect_mime(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };

    match ext.to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "rs" => "text/x-rust",
        "json" => "application/json",
        "toml" => "application/toml",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "",
    }
}

/// Percent-encoded `file://` reference for an absolute path
///
/// # Errors
///
/// Returns `RelativePath` if `path` is not absolute.
pub fn file_url(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| IngestError::RelativePath(path.to_path_buf()))
}

/// Filesystem path behind a `file://` reference
#[must_use]
pub fn path_from_url(url: &str) -> Option<PathBuf> {
    if url.strip_prefix("file://")?.is_empty() {
        return None;
    }
    let parsed = Url::parse(url).ok()?;
    if parsed.scheme() != "file" {
        return None;
    }
    parsed.to_file_path().ok()
}

impl FileEntry {
    /// Build an entry from a file on disk
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for missing paths, `NotAFile` for directories and
    /// special files, `EmptyName` when the path has no file name.
    pub fn from_path(path: &Path, tags: Vec<String>) -> Result<Self> {
        if !path.exists() {
            return Err(IngestError::NotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(IngestError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| IngestError::EmptyName(path.to_path_buf()))?;

        let canonical = path.canonicalize()?;

        Ok(Self::new(
            name,
            metadata.len(),
            detect_mime(path),
            tags,
            file_url(&canonical)?,
        ))
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand glob patterns, collecting what had to be skipped
fn expand_into<S: AsRef<str>>(
    patterns: &[S],
    skipped: &mut Vec<IngestError>,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !is_glob(pattern) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let matches = glob::glob(pattern).map_err(|e| IngestError::invalid_pattern(pattern, e))?;
        let before = paths.len();
        for found in matches {
            match found {
                Ok(path) => paths.push(path),
                Err(e) => skipped.push(IngestError::Io(e.into_error())),
            }
        }

        if paths.len() == before {
            skipped.push(IngestError::NoMatch(pattern.to_string()));
        }
    }

    Ok(paths)
}

fn warn_skipped(skipped: &[IngestError]) {
    for err in skipped {
        tracing::warn!(error = %err, "skipping");
    }
}

/// Expand glob patterns into paths
///
/// Literal paths pass through untouched. Patterns that match nothing are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `InvalidPattern` if a glob fails to parse.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut skipped = Vec::new();
    let paths = expand_into(patterns, &mut skipped)?;
    warn_skipped(&skipped);
    Ok(paths)
}

/// Ask for comma-separated tags for one file
///
/// An empty answer means no tags.
///
/// # Errors
///
/// Returns `Prompt` if the terminal interaction fails.
pub fn prompt_tags(file_name: &str) -> Result<Vec<String>> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Tags for {file_name} (comma separated)"))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| IngestError::Prompt(e.to_string()))?;

    Ok(parse_tags(&answer))
}

/// Result of a batch ingestion
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Entries built, in input order
    pub entries: Vec<FileEntry>,
    /// Paths and patterns that produced no entry
    pub skipped: Vec<IngestError>,
}

/// Batch ingestion with shared tags
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    tags: Vec<String>,
    prompt: bool,
}

impl Ingestor {
    /// Ingest with `tags` applied to every file
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self {
            tags,
            prompt: false,
        }
    }

    /// Also ask for extra tags per file
    #[must_use]
    pub const fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags for one file: the shared tags, then any prompted ones
    ///
    /// A cancelled prompt adds nothing.
    fn tags_for(&self, path: &Path) -> Vec<String> {
        let mut tags = self.tags.clone();
        if self.prompt {
            let name = path
                .file_name()
                .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
            match prompt_tags(&name) {
                Ok(extra) => tags.extend(extra),
                Err(err) => tracing::warn!(error = %err, "no extra tags"),
            }
        }
        tags
    }

    fn collect_paths(&self, paths: &[PathBuf], report: &mut IngestReport) {
        for path in paths {
            if !path.is_file() {
                let err = if path.exists() {
                    IngestError::NotAFile(path.clone())
                } else {
                    IngestError::NotFound(path.clone())
                };
                report.skipped.push(err);
                continue;
            }

            match FileEntry::from_path(path, self.tags_for(path)) {
                Ok(entry) => report.entries.push(entry),
                Err(err) => report.skipped.push(err),
            }
        }
    }

    /// Build entries for `paths`, in order
    ///
    /// Paths that cannot be ingested are skipped with a warning.
    #[must_use]
    pub fn ingest_paths(&self, paths: &[PathBuf]) -> Vec<FileEntry> {
        let mut report = IngestReport::default();
        self.collect_paths(paths, &mut report);
        warn_skipped(&report.skipped);
        report.entries
    }

    /// Expand `patterns` and ingest every match, reporting skips to the caller
    ///
    /// Nothing is logged above `debug`, so a full-screen front end can show
    /// the skips itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` for a glob that fails to parse.
    pub fn collect_patterns<S: AsRef<str>>(&self, patterns: &[S]) -> Result<IngestReport> {
        let mut report = IngestReport::default();
        let paths = expand_into(patterns, &mut report.skipped)?;
        self.collect_paths(&paths, &mut report);

        tracing::debug!(
            added = report.entries.len(),
            skipped = report.skipped.len(),
            "batch ingested"
        );
        Ok(report)
    }

    /// Expand `patterns` and ingest every match
    ///
    /// Skipped paths and patterns are logged at `warn`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` for a glob that fails to parse.
    pub fn ingest_patterns<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<FileEntry>> {
        let report = self.collect_patterns(patterns)?;
        warn_skipped(&report.skipped);
        Ok(report.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PreviewKind;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("emoji, cute"), vec!["emoji", "cute"]);
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
        assert_eq!(parse_tags("a,a"), vec!["a", "a"]);
        assert_eq!(parse_tags("single"), vec!["single"]);
    }

    #[test]
    fn test_detect_mime() {
        assert_eq!(detect_mime(Path::new("cat.PNG")), "image/png");
        assert_eq!(detect_mime(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(detect_mime(Path::new("report.pdf")), "application/pdf");
        assert_eq!(detect_mime(Path::new("notes")), "");
        assert_eq!(detect_mime(Path::new("archive.xyz")), "");
    }

    #[test]
    fn test_file_url_round_trips_to_path() {
        let url = file_url(Path::new("/tmp/a.png")).unwrap();
        assert_eq!(url, "file:///tmp/a.png");
        assert_eq!(path_from_url(&url), Some(PathBuf::from("/tmp/a.png")));
        assert_eq!(path_from_url("https://example.com/a"), None);
        assert_eq!(path_from_url("file://"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_percent_encodes_reserved_characters() {
        let url = file_url(Path::new("/tmp/a b#1%.png")).unwrap();
        assert_eq!(url, "file:///tmp/a%20b%231%25.png");
        assert!(Url::parse(&url).is_ok());
        assert_eq!(path_from_url(&url), Some(PathBuf::from("/tmp/a b#1%.png")));
    }

    #[test]
    fn test_file_url_rejects_relative_path() {
        let err = file_url(Path::new("relative/a.png")).unwrap_err();
        assert!(matches!(err, IngestError::RelativePath(_)));
    }

    #[test]
    fn test_collect_patterns_reports_skips() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", b"1");

        let present = format!("{}/a.txt", dir.path().display());
        let missing = format!("{}/missing.txt", dir.path().display());
        let no_match = format!("{}/*.nothing", dir.path().display());
        let report = Ingestor::default()
            .collect_patterns(&[present, missing, no_match])
            .unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert!(matches!(report.skipped[0], IngestError::NoMatch(_)));
        assert!(matches!(report.skipped[1], IngestError::NotFound(_)));
    }

    #[test]
    fn test_from_path_reads_metadata() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "cat.png", &[0u8; 1536]);

        let entry = FileEntry::from_path(&path, vec!["emoji".into()]).unwrap();
        assert_eq!(entry.name(), "cat.png");
        assert_eq!(entry.size(), 1536);
        assert_eq!(entry.mime(), "image/png");
        assert_eq!(entry.preview_kind(), PreviewKind::Image);
        assert!(entry.url().starts_with("file://"));
        assert!(entry.url().ends_with("cat.png"));
        assert_eq!(entry.preview(), Some(entry.url()));
        assert_eq!(entry.tags(), &["emoji"]);
    }

    #[test]
    fn test_from_path_non_image_has_no_preview() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes.txt", b"hello");

        let entry = FileEntry::from_path(&path, vec![]).unwrap();
        assert_eq!(entry.size(), 5);
        assert_eq!(entry.preview_kind(), PreviewKind::Other);
        assert!(entry.preview().is_none());
    }

    #[test]
    fn test_from_path_rejects_missing_and_directories() {
        let dir = TempDir::new().unwrap();

        let missing = FileEntry::from_path(&dir.path().join("gone.txt"), vec![]);
        assert!(matches!(missing, Err(IngestError::NotFound(_))));

        let not_file = FileEntry::from_path(dir.path(), vec![]);
        assert!(matches!(not_file, Err(IngestError::NotAFile(_))));
    }

    #[test]
    fn test_expand_patterns_globs_and_literals() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.png", b"1");
        write(&dir, "b.png", b"2");
        write(&dir, "c.txt", b"3");

        let glob = format!("{}/*.png", dir.path().display());
        let literal = format!("{}/c.txt", dir.path().display());
        let paths = expand_patterns(&[glob, literal]).unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.txt"]);
    }

    #[test]
    fn test_expand_patterns_no_match_is_skipped() {
        let dir = TempDir::new().unwrap();
        let glob = format!("{}/*.nothing", dir.path().display());
        assert!(expand_patterns(&[glob]).unwrap().is_empty());
    }

    #[test]
    fn test_expand_patterns_invalid_glob() {
        let result = expand_patterns(&["[unclosed"]);
        assert!(matches!(result, Err(IngestError::InvalidPattern { .. })));
    }

    #[test]
    fn test_ingestor_applies_tags_and_skips_bad_paths() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "report.pdf", b"%PDF");
        let missing = dir.path().join("missing.pdf");

        let ingestor = Ingestor::new(vec!["doc".into()]);
        let entries = ingestor
            .ingest_paths(&[missing, good, dir.path().to_path_buf()]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "report.pdf");
        assert_eq!(entries[0].tags(), &["doc"]);
    }

    #[test]
    fn test_ingest_patterns_warns_about_skips() {
        let log = crate::testing::capture_warnings(|| {
            let entries = Ingestor::default()
                .ingest_patterns(&["/definitely/missing/file.png"])
                .unwrap();
            assert!(entries.is_empty());
        });

        assert!(log.contains("WARN"));
        assert!(log.contains("File not found: /definitely/missing/file.png"));
    }

    #[test]
    fn test_ingest_patterns_empty_is_noop() {
        let entries = Ingestor::default().ingest_patterns::<&str>(&[]).unwrap();
        assert!(entries.is_empty());
    }
}
