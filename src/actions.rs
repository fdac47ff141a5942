//! Side effects triggered from the detail view
//!
//! Each action takes one catalog entry and returns an [`ActionOutcome`]
//! describing what happened. Presentation (status bar, colored stdout) is
//! left to the caller.

use crate::catalog::FileEntry;
use crate::ingest::path_from_url;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by entry actions
#[derive(Debug, Error)]
pub enum ActionError {
    /// No system clipboard could be opened
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Clipboard rejected the text
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Reference is not a local `file://` URL
    #[error("Cannot download '{0}': only file:// references are supported")]
    UnsupportedReference(String),

    /// Entry name has no file-name component to save under
    #[error("Cannot save '{0}': the name is not a file name")]
    InvalidName(String),

    /// Download target exists and is not a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// System opener failed
    #[error("Failed to open '{target}': {reason}")]
    Open { target: String, reason: String },

    /// Filesystem error during download
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for actions
pub type Result<T> = std::result::Result<T, ActionError>;

/// What a successful action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Reference placed on the clipboard
    Copied { url: String },
    /// File copied to `path`
    Downloaded { path: PathBuf },
    /// Reference handed to the system opener
    Opened { target: String },
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { url } => write!(f, "Copied {url} to clipboard"),
            Self::Downloaded { path } => write!(f, "Saved to {}", path.display()),
            Self::Opened { target } => write!(f, "Opened {target}"),
        }
    }
}

/// How long copied text must outlive the call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardHold {
    /// Hand the text over and return; the caller keeps running
    Release,
    /// Keep clipboard ownership until another program takes the text
    UntilTaken,
}

impl ClipboardHold {
    /// Hold for a process that exits right after copying
    ///
    /// X11 and Wayland selections vanish with their owner, so Linux waits.
    #[must_use]
    pub const fn for_one_shot() -> Self {
        if cfg!(target_os = "linux") {
            Self::UntilTaken
        } else {
            Self::Release
        }
    }
}

#[cfg(target_os = "linux")]
fn hold_text(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn hold_text(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Copy the entry's reference to the system clipboard
///
/// With [`ClipboardHold::UntilTaken`] this blocks until another program
/// replaces the clipboard contents.
///
/// # Errors
///
/// Returns `ClipboardUnavailable` or `Clipboard` when the clipboard cannot be
/// used (headless sessions, missing display server).
pub fn copy_url(entry: &FileEntry, hold: ClipboardHold) -> Result<ActionOutcome> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ActionError::ClipboardUnavailable(e.to_string()))?;
    let copied = match hold {
        ClipboardHold::Release => clipboard.set_text(entry.url()),
        ClipboardHold::UntilTaken => hold_text(&mut clipboard, entry.url()),
    };
    copied.map_err(|e| ActionError::Clipboard(e.to_string()))?;

    tracing::debug!(name = entry.name(), ?hold, "copied url");
    Ok(ActionOutcome::Copied {
        url: entry.url().to_string(),
    })
}

/// Save a copy of the entry's file into `dir` under the entry's name
///
/// Only the last component of the name is used, so the copy always lands
/// inside `dir`. `dir` is created if missing. Downloading a file onto
/// itself is a no-op.
///
/// # Errors
///
/// Returns `UnsupportedReference` for non-`file://` references,
/// `InvalidName` for names like `..`, `NotADirectory` when `dir` is a file,
/// `Io` when copying fails.
pub fn download(entry: &FileEntry, dir: &Path) -> Result<ActionOutcome> {
    let source = path_from_url(entry.url())
        .ok_or_else(|| ActionError::UnsupportedReference(entry.url().to_string()))?;
    let file_name = Path::new(entry.name())
        .file_name()
        .ok_or_else(|| ActionError::InvalidName(entry.name().to_string()))?;

    if dir.exists() && !dir.is_dir() {
        return Err(ActionError::NotADirectory(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir)?;

    let dest = dir.join(file_name);
    let same_file = match (source.canonicalize(), dest.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if !same_file {
        std::fs::copy(&source, &dest)?;
    }

    tracing::debug!(name = entry.name(), dest = %dest.display(), "downloaded");
    Ok(ActionOutcome::Downloaded { path: dest })
}

/// Open the entry's preview, or its file, with the system handler
///
/// # Errors
///
/// Returns `Open` if the opener could not be launched.
pub fn open_preview(entry: &FileEntry) -> Result<ActionOutcome> {
    let target = entry.preview().unwrap_or_else(|| entry.url());
    let launch = path_from_url(target).map_or_else(
        || open::that(target),
        |path| open::that(path.as_os_str()),
    );

    launch.map_err(|e| ActionError::Open {
        target: target.to_string(),
        reason: e.to_string(),
    })?;

    Ok(ActionOutcome::Opened {
        target: target.to_string(),
    })
}
