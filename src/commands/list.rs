//! List command - print the cards matching a query and tag

use crate::{DeckError, config::DeckConfig, output::ListPresenter, session::GallerySession};

type Result<T> = std::result::Result<T, DeckError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn execute(
    mut session: GallerySession,
    search: Option<String>,
    tag: Option<String>,
    json: bool,
    config: &DeckConfig,
    quiet: bool,
) -> Result<()> {
    if let Some(query) = search {
        session.set_query(query);
    }
    if tag.is_some() {
        session.select_tag(tag);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
        return Ok(());
    }

    let mut presenter = ListPresenter::new(config.empty_message.clone(), quiet);
    session.process(&mut presenter);
    presenter.print();
    Ok(())
}
