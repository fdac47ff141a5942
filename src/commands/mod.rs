//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and a session loaded from the command's files.

pub mod browse;
pub mod entry;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use entry::{copy_url, download};
pub use list::execute as list;
pub use show::execute as show;

use crate::{
    DeckError,
    catalog::FileEntry,
    cli::IngestArgs,
    config::DeckConfig,
    ingest::Ingestor,
    render::RenderCoordinator,
    session::GallerySession,
};

type Result<T> = std::result::Result<T, DeckError>;

/// Start a session holding every file named by `args`
///
/// # Errors
/// Returns an error if a glob pattern is invalid.
pub fn load_session(args: &IngestArgs, prompt: bool, config: &DeckConfig) -> Result<GallerySession> {
    let ingestor = Ingestor::new(args.tags()).with_prompt(prompt);
    let entries = ingestor.ingest_patterns(&args.files)?;

    let mut session = GallerySession::with_coordinator(RenderCoordinator::new(config.badge_limit));
    session.ingest_all(entries);
    Ok(session)
}

/// First entry in the session named `name`
///
/// # Errors
/// Returns `InvalidInput` for a blank name and `EntryNotFound` if no
/// ingested file has that name.
pub fn find_entry<'a>(session: &'a GallerySession, name: &str) -> Result<&'a FileEntry> {
    if name.trim().is_empty() {
        return Err(DeckError::InvalidInput("file name is empty".to_string()));
    }
    session
        .catalog()
        .find_by_name(name)
        .ok_or_else(|| DeckError::EntryNotFound(name.to_string()))
}
