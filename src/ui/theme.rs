//! Color theme definitions for the gallery TUI

use super::state::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border of the focused card and active inputs
    pub focus: Color,
    /// Card borders and dividers
    pub border: Color,
    /// Dimmed/inactive text
    pub dimmed: Color,
    /// Tag badges
    pub tag: Color,
    /// Image marker
    pub image: Color,
    /// Background of the selected tag option
    pub selection_bg: Color,
    /// Foreground of the selected tag option
    pub selection_fg: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            focus: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            image: Color::Green,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
        }
    }

    /// Style for the selected tag option
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused borders and key names
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    #[must_use]
    pub fn image_style(&self) -> Style {
        Style::default().fg(self.image)
    }

    /// Card title style
    #[must_use]
    pub fn name_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for a status message
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Success => self.success,
            MessageLevel::Error => self.error,
            MessageLevel::Warning => self.warning,
            MessageLevel::Info => self.info,
        };
        Style::default().fg(color)
    }
}
