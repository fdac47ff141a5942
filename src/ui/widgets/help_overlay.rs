//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(text, self.theme.focus_style().add_modifier(Modifier::UNDERLINED))
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.focus_style()),
            Span::raw(desc),
        ])
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Browse"),
            Line::default(),
            self.help_line("  ←↑↓→", "Move between cards"),
            self.help_line("  Home/End", "First/last card"),
            self.help_line("  Enter", "Show details"),
            self.help_line("  Ctrl+O", "Add files"),
            self.help_line("  Esc", "Quit"),
            Line::default(),
            self.heading("  Filter"),
            Line::default(),
            self.help_line("  Type", "Search file names"),
            self.help_line("  Backspace", "Delete last character"),
            self.help_line("  Ctrl+U", "Clear search"),
            self.help_line("  Tab/S-Tab", "Next/previous tag"),
            Line::default(),
            self.heading("  Details"),
            Line::default(),
            self.help_line("  c", "Copy URL"),
            self.help_line("  d", "Download"),
            self.help_line("  o", "Open preview"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
