//! Card grid widget
//!
//! Lays the current cards out left to right, top to bottom, in as many
//! columns as fit. Rows scroll so the focused card stays visible.

use crate::catalog::PreviewKind;
use crate::render::CardView;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Minimum card width in columns
pub const CARD_WIDTH: u16 = 24;

/// Card height in rows, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Number of card columns that fit in `width`
#[must_use]
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Grid of file cards
pub struct CardGrid<'a> {
    cards: &'a [CardView],
    cursor: usize,
    empty_message: &'a str,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    #[must_use]
    pub const fn new(
        cards: &'a [CardView],
        cursor: usize,
        empty_message: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            cards,
            cursor,
            empty_message,
            theme,
        }
    }

    fn card_lines(&self, card: &'a CardView) -> Vec<Line<'a>> {
        let marker = match card.preview_kind {
            PreviewKind::Image => Span::styled("▣ ", self.theme.image_style()),
            PreviewKind::Other => Span::styled("▢ ", self.theme.dimmed_style()),
        };

        let mut badges: Vec<Span<'a>> = Vec::new();
        for (i, tag) in card.badges.iter().enumerate() {
            if i > 0 {
                badges.push(Span::raw(" "));
            }
            badges.push(Span::styled(format!("#{tag}"), self.theme.tag_style()));
        }
        if card.more_tags {
            badges.push(Span::styled(" …", self.theme.dimmed_style()));
        }

        vec![
            Line::from(vec![
                marker,
                Span::styled(card.name.as_str(), self.theme.name_style()),
            ]),
            Line::styled(card.size_label.as_str(), self.theme.dimmed_style()),
            Line::from(badges),
        ]
    }

    fn render_card(&self, card: &'a CardView, focused: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.card_lines(card))
            .block(block)
            .render(area, buf);
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Files ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.cards.is_empty() {
            Paragraph::new(Line::styled(self.empty_message, self.theme.dimmed_style()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let columns = columns_for(inner.width);
        #[allow(clippy::cast_possible_truncation)]
        let card_width = inner.width / columns as u16;
        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        let first_row = (self.cursor / columns).saturating_sub(visible_rows - 1);

        for (index, card) in self
            .cards
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(visible_rows * columns)
        {
            #[allow(clippy::cast_possible_truncation)]
            let (row, col) = ((index / columns - first_row) as u16, (index % columns) as u16);
            let cell = Rect::new(
                inner.x + col * card_width,
                inner.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            )
            .intersection(inner);

            if cell.height > 0 {
                self.render_card(card, index == self.cursor, cell, buf);
            }
        }
    }
}
