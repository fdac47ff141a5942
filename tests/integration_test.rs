//! Integration tests for tagdeck
//!
//! These tests drive a whole session through the public API: files are
//! ingested from a temporary directory, filtered, and rendered into a
//! recording presenter.

use std::fs;
use std::path::Path;
use tagdeck::{
    DeckError,
    catalog::{FileCatalog, FileEntry, TagIndex},
    commands,
    cli::IngestArgs,
    config::DeckConfig,
    detail::describe,
    ingest::Ingestor,
    output::ListPresenter,
    query::evaluate,
    render::mock::RecordingPresenter,
    session::{GalleryEvent, GallerySession},
    size::format_size,
};
use tempfile::TempDir;

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

fn scenario_session() -> GallerySession {
    let mut session = GallerySession::new();
    session.ingest(FileEntry::new("cat.png", 2048, "image/png", tags(&["emoji", "cute"]), "file:///tmp/cat.png"));
    session.ingest(FileEntry::new("report.pdf", 1536, "application/pdf", tags(&["doc"]), "file:///tmp/report.pdf"));
    session
}

fn write_file(dir: &Path, name: &str, bytes: usize) {
    fs::write(dir.join(name), vec![b'x'; bytes]).unwrap();
}

#[test]
fn test_size_labels() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(1_048_576), "1.0 MB");
}

#[test]
fn test_query_and_tag_scenario() {
    let mut catalog = FileCatalog::new();
    catalog.append(FileEntry::new("cat.png", 2048, "image/png", tags(&["emoji", "cute"]), "file:///cat.png"));
    catalog.append(FileEntry::new("report.pdf", 1536, "application/pdf", tags(&["doc"]), "file:///report.pdf"));

    let names = |found: Vec<&FileEntry>| found.iter().map(|e| e.name().to_string()).collect::<Vec<_>>();

    assert_eq!(names(evaluate(catalog.all(), "cat", None)), vec!["cat.png"]);
    assert_eq!(names(evaluate(catalog.all(), "", Some("doc"))), vec!["report.pdf"]);
    assert!(evaluate(catalog.all(), "xyz", None).is_empty());
    assert_eq!(evaluate(catalog.all(), "", None).len(), 2);
}

#[test]
fn test_tag_index_accumulates() {
    let mut index = TagIndex::new();
    index.update(["a", "b"]);
    index.update(["b", "c"]);
    index.update(["b", "c"]);
    assert_eq!(index.sorted(), vec!["a", "b", "c"]);
}

#[test]
fn test_session_renders_cards_and_tag_options() {
    let mut session = scenario_session();
    let mut presenter = RecordingPresenter::default();

    session.process(&mut presenter);
    assert_eq!(presenter.card_names(), vec!["cat.png", "report.pdf"]);
    assert_eq!(presenter.tag_options, vec!["cute", "doc", "emoji"]);
    assert_eq!(presenter.cards[0].size_label, "2.0 KB");
    assert_eq!(presenter.cards[1].size_label, "1.5 KB");

    session.dispatch(GalleryEvent::QueryChanged("CAT".into()));
    session.process(&mut presenter);
    assert_eq!(presenter.card_names(), vec!["cat.png"]);
    // Options are offered once
    assert_eq!(presenter.tag_options, vec!["cute", "doc", "emoji"]);

    session.dispatch(GalleryEvent::QueryChanged("xyz".into()));
    session.process(&mut presenter);
    assert!(presenter.cards.is_empty());
    assert!(presenter.showing_empty);
}

#[test]
fn test_later_ingest_extends_options() {
    let mut session = scenario_session();
    let mut presenter = RecordingPresenter::default();
    session.process(&mut presenter);

    session.select_tag(Some("doc".into()));
    session.ingest(FileEntry::new("notes.txt", 10, "text/plain", tags(&["doc", "work"]), "file:///tmp/notes.txt"));
    session.process(&mut presenter);

    assert_eq!(presenter.card_names(), vec!["report.pdf", "notes.txt"]);
    assert_eq!(presenter.tag_options, vec!["cute", "doc", "emoji", "work"]);
    assert_eq!(session.pending(), 0);
}

#[test]
fn test_ingest_directory_into_session() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "cat.png", 2048);
    write_file(dir.path(), "dog.jpg", 100);
    write_file(dir.path(), "report.pdf", 1536);

    let pattern = format!("{}/*", dir.path().display());
    let entries = Ingestor::new(tags(&["shots"])).ingest_patterns(&[pattern]).unwrap();
    assert_eq!(entries.len(), 3);

    let mut session = GallerySession::new();
    session.ingest_all(entries);
    session.set_query("cat");

    let view = session.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].name, "cat.png");
    assert_eq!(view.cards[0].badges, vec!["shots"]);
    assert_eq!(session.tag_index().sorted(), vec!["shots"]);
}

#[test]
fn test_load_session_and_find_entry() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "cat.png", 2048);

    let args = IngestArgs {
        files: vec![dir.path().join("cat.png").display().to_string()],
        tags: vec!["emoji,cute".into()],
    };
    let session = commands::load_session(&args, false, &DeckConfig::default()).unwrap();

    let entry = commands::find_entry(&session, "cat.png").unwrap();
    assert_eq!(entry.tags(), ["emoji", "cute"]);
    assert!(entry.url().starts_with("file://"));
    assert!(matches!(
        commands::find_entry(&session, "missing.png"),
        Err(DeckError::EntryNotFound(_))
    ));
    assert!(matches!(
        commands::find_entry(&session, " "),
        Err(DeckError::InvalidInput(_))
    ));

    let detail = describe(entry);
    assert_eq!(detail.title, "cat.png");
    assert_eq!(detail.size_label, "2.0 KB");
    assert_eq!(detail.preview_ref.as_deref(), Some(entry.url()));
}

#[test]
fn test_download_copies_file() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(src.path(), "report.pdf", 64);

    let args = IngestArgs {
        files: vec![src.path().join("report.pdf").display().to_string()],
        tags: Vec::new(),
    };
    let config = DeckConfig::default();
    let session = commands::load_session(&args, false, &config).unwrap();

    commands::download(&session, "report.pdf", Some(out.path().to_path_buf()), &config, true).unwrap();
    assert_eq!(fs::read(out.path().join("report.pdf")).unwrap().len(), 64);
}

#[test]
fn test_list_presenter_empty_message() {
    let mut session = scenario_session();
    session.set_query("nothing-matches");

    colored::control::set_override(false);
    let mut presenter = ListPresenter::new("Nothing here", false);
    session.process(&mut presenter);
    assert_eq!(presenter.lines(), ["Nothing here"]);
    assert_eq!(presenter.tag_options(), ["cute", "doc", "emoji"]);

    let mut quiet = ListPresenter::new("Nothing here", true);
    session.set_query("cat");
    session.process(&mut quiet);
    assert_eq!(quiet.lines(), ["cat.png"]);
}
