//! Status bar widget for displaying messages

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget: latest message on the left, view summary on the right
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Shown/total counts and active tag
    summary: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], summary: &'a str, theme: &'a Theme) -> Self {
        Self {
            messages,
            summary,
            theme,
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.theme.message_style(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        Paragraph::new(Line::styled(self.summary, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::{contains, render_rows};

    #[test]
    fn test_shows_latest_message_and_summary() {
        let theme = Theme::default();
        let old = StatusMessage::new(MessageLevel::Info, "old".into());
        let new = StatusMessage::new(MessageLevel::Error, "broken".into());
        let messages = [&old, &new];

        let rows = render_rows(StatusBar::new(&messages, "2/5 files", &theme), 60, 3);
        assert!(contains(&rows, "✗ broken"));
        assert!(!contains(&rows, "old"));
        assert!(contains(&rows, "2/5 files"));
    }
}
