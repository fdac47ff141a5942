//! View models for the card grid and the tag-filter control
//!
//! The coordinator is a pure function of its inputs: the filtered entries,
//! the current tag index and the tag options already offered to the filter
//! control. It never touches the catalog itself.
//!
//! # Architecture
//!
//! ```text
//! filtered entries ─┐
//! tag index ────────┼─→ RenderCoordinator::refresh ─→ RenderInstructions ─→ Presenter
//! offered options ──┘
//! ```
//!
//! Presenters (the TUI grid, plain stdout output) only consume
//! [`RenderInstructions`]; they never query the catalog.

pub mod mock;

use crate::catalog::{EntryId, FileEntry, PreviewKind, TagIndex};
use crate::size::format_size;
use serde::Serialize;
use std::collections::HashSet;

/// Default number of tag badges shown per card
pub const DEFAULT_BADGE_LIMIT: usize = 3;

/// Display model for one card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Entry the card stands for
    pub id: EntryId,
    /// File name
    pub name: String,
    /// Human-readable size
    pub size_label: String,
    /// Leading tags shown as badges
    pub badges: Vec<String>,
    /// Whether more tags exist than badges shown
    pub more_tags: bool,
    pub preview_kind: PreviewKind,
    /// Preview reference for image cards
    pub preview: Option<String>,
}

impl CardView {
    /// Build a card, showing at most `badge_limit` tags
    #[must_use]
    pub fn from_entry(entry: &FileEntry, badge_limit: usize) -> Self {
        let tags = entry.tags();
        Self {
            id: entry.id(),
            name: entry.name().to_string(),
            size_label: format_size(entry.size()),
            badges: tags.iter().take(badge_limit).cloned().collect(),
            more_tags: tags.len() > badge_limit,
            preview_kind: entry.preview_kind(),
            preview: entry.preview().map(ToString::to_string),
        }
    }
}

/// Everything a presenter needs for one redraw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderInstructions {
    /// Cards in display order
    pub cards: Vec<CardView>,
    /// Set when nothing matched the current filter
    pub empty: bool,
    /// Tag options to append to the filter control, sorted
    pub new_tag_options: Vec<String>,
}

/// Builds [`RenderInstructions`] from a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCoordinator {
    badge_limit: usize,
}

impl Default for RenderCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_BADGE_LIMIT)
    }
}

impl RenderCoordinator {
    /// Create a coordinator showing at most `badge_limit` tags per card
    #[must_use]
    pub const fn new(badge_limit: usize) -> Self {
        Self { badge_limit }
    }

    /// Produce cards, the empty-state flag and the tag-option delta
    ///
    /// The delta is every indexed tag not yet in `previously_offered`.
    #[must_use]
    pub fn refresh<S: AsRef<str>>(
        &self,
        filtered: &[&FileEntry],
        all_tags: &TagIndex,
        previously_offered: &[S],
    ) -> RenderInstructions {
        let cards: Vec<CardView> = filtered
            .iter()
            .map(|entry| CardView::from_entry(entry, self.badge_limit))
            .collect();

        let offered: HashSet<&str> = previously_offered.iter().map(|s| s.as_ref()).collect();
        let new_tag_options: Vec<String> = all_tags
            .sorted()
            .into_iter()
            .filter(|tag| !offered.contains(tag))
            .map(ToString::to_string)
            .collect();

        tracing::debug!(
            cards = cards.len(),
            new_tags = new_tag_options.len(),
            "view recomputed"
        );

        RenderInstructions {
            empty: cards.is_empty(),
            cards,
            new_tag_options,
        }
    }
}

/// Render boundary implemented by front ends
///
/// [`Presenter::render`] drives a full redraw: it clears the grid, draws each
/// card (or the empty state) and appends new tag options.
pub trait Presenter {
    /// Drop the previously drawn cards
    fn clear(&mut self) {}

    /// Draw one card
    fn render_card(&mut self, card: &CardView);

    /// Draw the "no matching files" placeholder
    fn render_empty(&mut self);

    /// Append options to the tag-filter control
    fn offer_tags(&mut self, tags: &[String]);

    /// Redraw the whole view
    fn render(&mut self, view: &RenderInstructions) {
        self.clear();
        if view.empty {
            self.render_empty();
        } else {
            for card in &view.cards {
                self.render_card(card);
            }
        }
        if !view.new_tag_options.is_empty() {
            self.offer_tags(&view.new_tag_options);
        }
    }
}
