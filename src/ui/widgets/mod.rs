//! Ratatui widgets for the gallery TUI

mod card_grid;
mod details_modal;
mod help_bar;
mod help_overlay;
mod input_modal;
mod search_bar;
mod status_bar;
mod tag_bar;

pub use card_grid::{CARD_HEIGHT, CARD_WIDTH, CardGrid, columns_for};
pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use input_modal::InputModal;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_bar::TagBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Centered area sized as a percentage of `area`
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let width_percent = width_percent.min(100);
    let height_percent = height_percent.min(100);

    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Centered area with a fixed height in rows
pub(crate) fn centered_rows(width_percent: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    let row = Rect::new(area.x, y, area.width, height);
    let width_percent = width_percent.min(100);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(row)[1]
}
