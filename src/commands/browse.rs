//! Browse command - interactive card gallery

use crate::{
    DeckError,
    config::DeckConfig,
    session::GallerySession,
    ui::{AppState, Gallery},
};

type Result<T> = std::result::Result<T, DeckError>;

/// Execute the browse command
///
/// # Errors
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn execute(session: GallerySession, config: &DeckConfig, quiet: bool) -> Result<()> {
    let mut state = AppState::new(session, config.empty_message.clone(), config.download_dir());
    Gallery::new().run(&mut state)?;

    if !quiet {
        println!("Browsed {} file(s).", state.session.catalog().len());
    }
    Ok(())
}
