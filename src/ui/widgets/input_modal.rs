//! Add-file prompt modal

use super::centered_rows;
use crate::ui::state::InputState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Single-line text prompt
pub struct InputModal<'a> {
    state: &'a InputState,
    theme: &'a Theme,
}

impl<'a> InputModal<'a> {
    #[must_use]
    pub const fn new(state: &'a InputState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for InputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rows(60, 4, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(format!(" {} ", self.state.prompt()));

        let lines = vec![
            Line::from(vec![
                Span::styled("> ", self.theme.focus_style()),
                Span::raw(self.state.buffer.as_str()),
                Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::styled("Enter to confirm, Esc to cancel", self.theme.dimmed_style()),
        ];

        Paragraph::new(lines).block(block).render(popup_area, buf);
    }
}
