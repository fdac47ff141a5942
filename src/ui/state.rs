//! Application state for the gallery TUI
//!
//! Wraps a [`GallerySession`] with everything the terminal front end needs:
//! the query being typed, the selected tag option, the grid cursor, the
//! current mode and status messages. Every edit that changes the filter is
//! dispatched to the session and the resulting redraws are drained into the
//! [`GridModel`] right away.

use crate::actions::{self, ActionOutcome, ClipboardHold};
use crate::catalog::EntryId;
use crate::detail::EntryDetail;
use crate::ingest::{Ingestor, parse_tags};
use crate::render::{CardView, Presenter};
use crate::session::GallerySession;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Label of the first tag option, which clears the tag filter
pub const ALL_TAGS_LABEL: &str = "all";

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Details modal is visible
    Details,
    /// Add-file prompt is active
    Input,
}

/// Message severity for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Action triggered from the details modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    CopyUrl,
    Download,
    Open,
}

/// Which answer the add-file prompt is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputStep {
    /// File path or glob pattern
    Path,
    /// Comma-separated tags for the given pattern
    Tags { pattern: String },
}

/// State for the add-file prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub step: InputStep,
    pub buffer: String,
}

impl InputState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: InputStep::Path,
            buffer: String::new(),
        }
    }

    /// Prompt shown for the current step
    #[must_use]
    pub fn prompt(&self) -> String {
        match &self.step {
            InputStep::Path => "File path or pattern".to_string(),
            InputStep::Tags { pattern } => format!("Tags for {pattern} (comma separated)"),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Presenter backing the card grid and the tag bar
#[derive(Debug, Clone, Default)]
pub struct GridModel {
    /// Cards of the latest render
    pub cards: Vec<CardView>,
    /// Whether the latest render was the empty state
    pub empty: bool,
    /// Tag options offered so far; never shrinks
    pub tag_options: Vec<String>,
}

impl Presenter for GridModel {
    fn clear(&mut self) {
        self.cards.clear();
        self.empty = false;
    }

    fn render_card(&mut self, card: &CardView) {
        self.cards.push(card.clone());
    }

    fn render_empty(&mut self) {
        self.empty = true;
    }

    fn offer_tags(&mut self, tags: &[String]) {
        self.tag_options.extend(tags.iter().cloned());
    }
}

/// Application state for the gallery
#[derive(Debug)]
pub struct AppState {
    /// Catalog, index and filter
    pub session: GallerySession,
    /// Latest rendered view
    pub grid: GridModel,
    /// Current search query
    pub query: String,
    /// Selected tag option; 0 is "all"
    pub tag_cursor: usize,
    /// Focused card
    pub cursor: usize,
    /// Cards per grid row (set during render)
    pub columns: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Entry shown in the details modal
    pub detail: Option<(EntryId, EntryDetail)>,
    /// Add-file prompt state
    pub input: Option<InputState>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Placeholder shown for an empty view
    pub empty_message: String,
    /// Where downloads are saved
    pub download_dir: PathBuf,
    /// Whether the gallery should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create state around `session` and draw its pending updates
    #[must_use]
    pub fn new(session: GallerySession, empty_message: impl Into<String>, download_dir: PathBuf) -> Self {
        let query = session.filter().query.clone();
        let mut state = Self {
            session,
            grid: GridModel::default(),
            query,
            tag_cursor: 0,
            cursor: 0,
            columns: 1,
            mode: Mode::Normal,
            detail: None,
            input: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            empty_message: empty_message.into(),
            download_dir,
            should_exit: false,
        };
        state.refresh();
        state.tag_cursor = state.tag_position(state.session.filter().selected_tag.as_deref());
        state
    }

    /// Drain the session queue into the grid
    pub fn refresh(&mut self) {
        self.session.process(&mut self.grid);
        self.cursor = self.cursor.min(self.grid.cards.len().saturating_sub(1));
    }

    fn tag_position(&self, tag: Option<&str>) -> usize {
        tag.and_then(|t| self.grid.tag_options.iter().position(|o| o == t))
            .map_or(0, |i| i + 1)
    }

    /// Send the typed query to the session
    fn sync_query(&mut self) {
        self.session.set_query(self.query.clone());
        self.refresh();
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
        self.sync_query();
    }

    /// Remove the last character from the query
    pub fn query_backspace(&mut self) {
        if self.query.pop().is_some() {
            self.sync_query();
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.sync_query();
        }
    }

    /// Tag option labels, "all" first
    #[must_use]
    pub fn tag_labels(&self) -> Vec<&str> {
        std::iter::once(ALL_TAGS_LABEL)
            .chain(self.grid.tag_options.iter().map(String::as_str))
            .collect()
    }

    /// Currently selected tag, `None` for "all"
    #[must_use]
    pub fn selected_tag(&self) -> Option<&str> {
        self.tag_cursor
            .checked_sub(1)
            .and_then(|i| self.grid.tag_options.get(i))
            .map(String::as_str)
    }

    /// Move the tag selection forward or backward, wrapping around
    pub fn cycle_tag(&mut self, forward: bool) {
        let count = self.grid.tag_options.len() + 1;
        self.tag_cursor = if forward {
            (self.tag_cursor + 1) % count
        } else {
            (self.tag_cursor + count - 1) % count
        };
        self.session.select_tag(self.selected_tag().map(String::from));
        self.cursor = 0;
        self.refresh();
    }

    pub const fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.grid.cards.len() {
            self.cursor += 1;
        }
    }

    pub const fn cursor_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + self.columns < self.grid.cards.len() {
            self.cursor += self.columns;
        }
    }

    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.grid.cards.len().saturating_sub(1);
    }

    /// Card under the cursor
    #[must_use]
    pub fn current_card(&self) -> Option<&CardView> {
        self.grid.cards.get(self.cursor)
    }

    /// Open the details modal for the focused card
    pub fn open_details(&mut self) {
        let Some(id) = self.current_card().map(|c| c.id) else {
            return;
        };
        if let Some(detail) = self.session.activate(id) {
            self.detail = Some((id, detail));
            self.mode = Mode::Details;
        }
    }

    /// Close the details modal
    pub fn close_details(&mut self) {
        self.detail = None;
        self.mode = Mode::Normal;
    }

    /// Run an action on the entry in the details modal
    pub fn perform(&mut self, action: DetailAction) {
        let Some(entry) = self
            .detail
            .as_ref()
            .and_then(|(id, _)| self.session.catalog().get(*id))
        else {
            return;
        };

        let result = match action {
            DetailAction::CopyUrl => actions::copy_url(entry, ClipboardHold::Release),
            DetailAction::Download => actions::download(entry, &self.download_dir),
            DetailAction::Open => actions::open_preview(entry),
        };
        self.report(result);
    }

    fn report(&mut self, result: actions::Result<ActionOutcome>) {
        match result {
            Ok(outcome) => self.add_message(MessageLevel::Success, outcome.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "action failed");
                self.add_message(MessageLevel::Error, e.to_string());
            }
        }
    }

    /// Open the add-file prompt
    pub fn start_input(&mut self) {
        self.input = Some(InputState::new());
        self.mode = Mode::Input;
    }

    /// Close the add-file prompt without ingesting
    pub fn cancel_input(&mut self) {
        self.input = None;
        self.mode = Mode::Normal;
    }

    /// Accept the current prompt answer
    ///
    /// The path step advances to the tag step; the tag step ingests.
    pub fn submit_input(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };

        match input.step {
            InputStep::Path => {
                let pattern = input.buffer.trim().to_string();
                if pattern.is_empty() {
                    self.cancel_input();
                    return;
                }
                self.input = Some(InputState {
                    step: InputStep::Tags { pattern },
                    buffer: String::new(),
                });
            }
            InputStep::Tags { pattern } => {
                self.mode = Mode::Normal;
                self.ingest(&pattern, parse_tags(&input.buffer));
            }
        }
    }

    /// Ingest every file matching `pattern` with `tags`
    ///
    /// Skipped paths go to the status bar, never to the log at `warn`: the
    /// terminal is in raw mode while the gallery runs.
    pub fn ingest(&mut self, pattern: &str, tags: Vec<String>) {
        let report = match Ingestor::new(tags).collect_patterns(&[pattern]) {
            Ok(report) => report,
            Err(e) => {
                self.add_message(MessageLevel::Error, e.to_string());
                return;
            }
        };

        for err in &report.skipped {
            tracing::debug!(error = %err, "skipping");
        }

        let count = report.entries.len();
        if count == 0 {
            let reason = report
                .skipped
                .first()
                .map_or_else(|| format!("No files added from {pattern}"), ToString::to_string);
            self.add_message(MessageLevel::Warning, reason);
            return;
        }

        self.session.ingest_all(report.entries);
        self.refresh();
        let text = match report.skipped.len() {
            0 => format!("Added {count} file(s)"),
            n => format!("Added {count} file(s), skipped {n}"),
        };
        self.add_message(MessageLevel::Success, text);
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Short summary for the status bar: shown/total and active tag
    #[must_use]
    pub fn summary(&self) -> String {
        let shown = self.grid.cards.len();
        let total = self.session.catalog().len();
        match self.selected_tag() {
            Some(tag) => format!("{shown}/{total} files · #{tag}"),
            None => format!("{shown}/{total} files"),
        }
    }
}
