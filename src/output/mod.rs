//! Output formatting for CLI display
//!
//! Plain-terminal counterparts of the gallery: card lines, detail blocks and
//! action results. [`ListPresenter`] implements the render boundary for the
//! `list` command.

use crate::actions::ActionOutcome;
use crate::catalog::PreviewKind;
use crate::detail::EntryDetail;
use crate::render::{CardView, Presenter};
use colored::Colorize;

/// Format a card as one line
#[must_use]
pub fn card_line(card: &CardView, quiet: bool) -> String {
    if quiet {
        return card.name.clone();
    }

    let marker = match card.preview_kind {
        PreviewKind::Image => "[img]".cyan(),
        PreviewKind::Other => "[file]".dimmed(),
    };

    let mut line = format!("  {marker} {}  {}", card.name.bold(), card.size_label.dimmed());
    if !card.badges.is_empty() {
        let badges: Vec<String> = card.badges.iter().map(|t| format!("#{t}")).collect();
        line.push_str(&format!("  {}", badges.join(" ").yellow()));
    }
    if card.more_tags {
        line.push_str(" …");
    }
    line
}

/// Format a detail record as labelled lines
#[must_use]
pub fn detail_lines(detail: &EntryDetail) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", "Name:".bold(), detail.title),
        format!("{} {}", "Size:".bold(), detail.size_label),
        format!("{} {}", "Tags:".bold(), detail.tags_label),
    ];
    if let Some(preview) = &detail.preview_ref {
        lines.push(format!("{} {}", "Preview:".bold(), preview));
    }
    lines.push(format!("{} {}", "URL:".bold(), detail.download_ref));
    lines
}

/// Format an action result
#[must_use]
pub fn outcome_line(outcome: &ActionOutcome) -> String {
    format!("{} {outcome}", "✓".green())
}

/// Collects a rendered view as printable lines
#[derive(Debug, Clone)]
pub struct ListPresenter {
    lines: Vec<String>,
    tag_options: Vec<String>,
    empty_message: String,
    quiet: bool,
}

impl ListPresenter {
    #[must_use]
    pub fn new(empty_message: impl Into<String>, quiet: bool) -> Self {
        Self {
            lines: Vec::new(),
            tag_options: Vec::new(),
            empty_message: empty_message.into(),
            quiet,
        }
    }

    /// Lines of the latest render
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every tag option offered so far
    #[must_use]
    pub fn tag_options(&self) -> &[String] {
        &self.tag_options
    }

    /// Print the latest render, followed by the known tags unless quiet
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
        if !self.quiet && !self.tag_options.is_empty() {
            println!("\n{} {}", "Tags:".bold(), self.tag_options.join(", "));
        }
    }
}

impl Presenter for ListPresenter {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn render_card(&mut self, card: &CardView) {
        self.lines.push(card_line(card, self.quiet));
    }

    fn render_empty(&mut self) {
        if !self.quiet {
            self.lines.push(self.empty_message.dimmed().to_string());
        }
    }

    fn offer_tags(&mut self, tags: &[String]) {
        self.tag_options.extend(tags.iter().cloned());
    }
}
