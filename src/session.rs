//! Gallery session: state ownership and the refresh queue
//!
//! A [`GallerySession`] owns everything that lives for one gallery session:
//! the catalog, the tag index, the current filter and the list of tag
//! options already offered to the front end. It is created empty and simply
//! dropped at the end of the session.
//!
//! # Workflow
//!
//! ```text
//! GalleryEvent
//!     ├─ FileIngested  → catalog.append → tags.update ─┐
//!     ├─ QueryChanged  → filter.query ─────────────────┤
//!     └─ TagSelected   → filter.selected_tag ──────────┤
//!                                                      ↓
//!                                  queue += RecomputeView (exactly one)
//!                                                      ↓
//! process(presenter) → evaluate → refresh → presenter.render → offered += delta
//! ```
//!
//! Events are applied to completion as they are dispatched; redraws are
//! explicit and only happen in [`GallerySession::process`].

use crate::catalog::{EntryId, FileCatalog, FileEntry, TagIndex};
use crate::detail::{EntryDetail, describe};
use crate::query::{FilterState, evaluate_state};
use crate::render::{Presenter, RenderCoordinator, RenderInstructions};
use std::collections::VecDeque;

/// Input events the session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A new entry was produced by ingestion
    FileIngested(FileEntry),
    /// The search text changed
    QueryChanged(String),
    /// The tag filter changed; `None` selects all tags
    TagSelected(Option<String>),
}

/// Work queued by events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Re-evaluate the filter and redraw
    RecomputeView,
}

/// State for one gallery session
#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    catalog: FileCatalog,
    tags: TagIndex,
    filter: FilterState,
    offered_tags: Vec<String>,
    queue: VecDeque<SessionAction>,
    coordinator: RenderCoordinator,
}

impl GallerySession {
    /// Create an empty session with default rendering options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session using `coordinator` for view models
    #[must_use]
    pub fn with_coordinator(coordinator: RenderCoordinator) -> Self {
        Self {
            coordinator,
            ..Self::default()
        }
    }

    /// Apply an event and queue one view recompute
    pub fn dispatch(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::FileIngested(entry) => {
                self.tags.update(entry.tags());
                self.catalog.append(entry);
            }
            GalleryEvent::QueryChanged(query) => {
                self.filter.query = query;
            }
            GalleryEvent::TagSelected(tag) => {
                self.filter.selected_tag = tag.filter(|t| !t.is_empty());
            }
        }
        self.queue.push_back(SessionAction::RecomputeView);
    }

    /// Append an entry produced by ingestion
    pub fn ingest(&mut self, entry: FileEntry) {
        self.dispatch(GalleryEvent::FileIngested(entry));
    }

    /// Append several entries, one event each
    pub fn ingest_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.ingest(entry);
        }
    }

    /// Replace the search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(GalleryEvent::QueryChanged(query.into()));
    }

    /// Replace the tag filter
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.dispatch(GalleryEvent::TagSelected(tag));
    }

    /// Run every queued action against `presenter`
    ///
    /// Returns the number of redraws performed.
    pub fn process<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> usize {
        let mut redraws = 0;
        while let Some(action) = self.queue.pop_front() {
            match action {
                SessionAction::RecomputeView => {
                    let view = self.view();
                    presenter.render(&view);
                    self.offered_tags.extend(view.new_tag_options);
                    redraws += 1;
                }
            }
        }
        redraws
    }

    /// Compute the current view without touching the queue
    ///
    /// The tag delta is relative to the options offered so far.
    #[must_use]
    pub fn view(&self) -> RenderInstructions {
        let filtered = evaluate_state(self.catalog.all(), &self.filter);
        self.coordinator
            .refresh(&filtered, &self.tags, &self.offered_tags)
    }

    /// Entries matching the current filter, in catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&FileEntry> {
        evaluate_state(self.catalog.all(), &self.filter)
    }

    /// Detail record for an activated card
    #[must_use]
    pub fn activate(&self, id: EntryId) -> Option<EntryDetail> {
        self.catalog.get(id).map(describe)
    }

    #[must_use]
    pub const fn catalog(&self) -> &FileCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn tag_index(&self) -> &TagIndex {
        &self.tags
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Tag options handed to the front end so far, in offer order
    #[must_use]
    pub fn offered_tags(&self) -> &[String] {
        &self.offered_tags
    }

    /// Number of queued actions
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
