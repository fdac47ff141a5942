//! Details modal widget for displaying an entry's detail record

use super::centered_rect;
use crate::detail::EntryDetail;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const LABEL_WIDTH: usize = 9;

/// Details modal widget
pub struct DetailsModal<'a> {
    detail: &'a EntryDetail,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    #[must_use]
    pub const fn new(detail: &'a EntryDetail, theme: &'a Theme) -> Self {
        Self { detail, theme }
    }

    fn field(&self, label: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), self.theme.dimmed_style()),
            Span::raw(value),
        ])
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::styled(self.detail.title.as_str(), self.theme.name_style()),
            Line::styled("─".repeat(60), self.theme.border_style()),
            Line::default(),
            self.field("Size:", &self.detail.size_label),
            Line::from(vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", "Tags:"), self.theme.dimmed_style()),
                Span::styled(self.detail.tags_label.as_str(), self.theme.tag_style()),
            ]),
        ];

        if let Some(preview) = &self.detail.preview_ref {
            lines.push(self.field("Preview:", preview));
        }
        lines.push(self.field("URL:", &self.detail.download_ref));

        lines.push(Line::default());
        lines.push(Line::styled("─".repeat(60), self.theme.border_style()));
        lines.push(Line::from(vec![
            Span::styled("c", self.theme.focus_style()),
            Span::raw(" copy url  "),
            Span::styled("d", self.theme.focus_style()),
            Span::raw(" download  "),
            Span::styled("o", self.theme.focus_style()),
            Span::raw(" open  "),
            Span::styled(
                "any other key closes",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ),
        ]));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(70, 50, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(" File Details ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}
