//! Show command - print one file's detail record

use super::find_entry;
use crate::{DeckError, detail::describe, output, session::GallerySession};

type Result<T> = std::result::Result<T, DeckError>;

/// Execute the show command
///
/// # Errors
/// Returns `EntryNotFound` if no ingested file is named `name`.
pub fn execute(session: &GallerySession, name: &str, json: bool) -> Result<()> {
    let detail = describe(find_entry(session, name)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in output::detail_lines(&detail) {
            println!("{line}");
        }
    }
    Ok(())
}
