//! Tag filter bar
//!
//! Shows "all" followed by every tag offered so far, in offer order, with
//! the selected option highlighted. When the options overflow, the bar
//! scrolls so the selection stays visible.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SEPARATOR: &str = "  ";

/// Columns a padded label takes on screen
fn label_width(label: &str) -> usize {
    Span::raw(format!(" {label} ")).width()
}

/// Tag filter bar widget
pub struct TagBar<'a> {
    labels: &'a [&'a str],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> TagBar<'a> {
    #[must_use]
    pub const fn new(labels: &'a [&'a str], selected: usize, theme: &'a Theme) -> Self {
        Self {
            labels,
            selected,
            theme,
        }
    }

    /// First label to draw so that `selected` fits in `width`
    fn first_visible(&self, width: usize) -> usize {
        let mut used = 0;
        let mut first = self.selected.min(self.labels.len().saturating_sub(1));
        for i in (0..=first).rev() {
            let cost = label_width(self.labels[i]) + SEPARATOR.len();
            if used + cost > width && i != first {
                break;
            }
            used += cost;
            first = i;
        }
        first
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Tag (Tab) ");

        let inner = block.inner(area);
        block.render(area, buf);

        if self.labels.is_empty() {
            return;
        }

        let start = self.first_visible(usize::from(inner.width));
        let mut spans = Vec::new();
        if start > 0 {
            spans.push(Span::styled("… ", self.theme.dimmed_style()));
        }
        for (i, label) in self.labels.iter().enumerate().skip(start) {
            if i > start {
                spans.push(Span::raw(SEPARATOR));
            }
            let style = if i == self.selected {
                self.theme.selected_style()
            } else {
                self.theme.tag_style()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
