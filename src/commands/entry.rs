//! Entry actions - copy a reference or download a copy

use super::find_entry;
use crate::{
    DeckError,
    actions::{self, ClipboardHold},
    config::DeckConfig,
    output,
    session::GallerySession,
};
use colored::Colorize;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, DeckError>;

/// Copy the reference of the file named `name` to the clipboard
///
/// On Linux this keeps serving the reference until another program takes
/// over the clipboard.
///
/// # Errors
/// Returns an error if the file is unknown or the clipboard is unavailable.
pub fn copy_url(session: &GallerySession, name: &str, quiet: bool) -> Result<()> {
    let entry = find_entry(session, name)?;
    let hold = ClipboardHold::for_one_shot();
    if hold == ClipboardHold::UntilTaken && !quiet {
        eprintln!("{}", "Serving the clipboard until another program copies something...".dimmed());
    }
    let outcome = actions::copy_url(entry, hold)?;

    if quiet {
        println!("{}", entry.url());
    } else {
        println!("{}", output::outcome_line(&outcome));
    }
    Ok(())
}

/// Save a copy of the file named `name`
///
/// `to` overrides the configured download directory.
///
/// # Errors
/// Returns an error if the file is unknown or the copy fails.
pub fn download(
    session: &GallerySession,
    name: &str,
    to: Option<PathBuf>,
    config: &DeckConfig,
    quiet: bool,
) -> Result<()> {
    let entry = find_entry(session, name)?;
    let dir = to.unwrap_or_else(|| config.download_dir());
    let outcome = actions::download(entry, &dir)?;

    if quiet {
        if let actions::ActionOutcome::Downloaded { path } = &outcome {
            println!("{}", path.display());
        }
    } else {
        println!("{}", output::outcome_line(&outcome));
    }
    Ok(())
}
