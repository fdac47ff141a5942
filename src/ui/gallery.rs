//! Terminal gallery: setup, draw and the event loop

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    CardGrid, DetailsModal, HelpBar, HelpOverlay, InputModal, SearchBar, StatusBar, TagBar,
    columns_for,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// Interactive card gallery
#[derive(Debug, Default)]
pub struct Gallery {
    theme: Theme,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Run the gallery until the user quits
    ///
    /// The terminal is restored even when the loop fails.
    ///
    /// # Errors
    ///
    /// Returns `NotATerminal` when stdout is not a TTY, or an IO error from
    /// the terminal backend.
    pub fn run(&self, state: &mut AppState) -> Result<()> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        let mut terminal = Self::setup_terminal()?;
        let outcome = self.run_loop(&mut terminal, state);
        let cleanup = Self::cleanup_terminal();
        terminal.show_cursor()?;

        outcome.and(cleanup)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        while !state.should_exit {
            state.cleanup_messages();
            terminal.draw(|frame| {
                self.render(frame, state);
                self.render_overlays(frame, state);
            })?;

            match poll_and_handle(state, Duration::from_millis(100))? {
                EventResult::Action(action) => state.perform(action),
                EventResult::Quit => state.should_exit = true,
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        tracing::debug!(files = state.session.catalog().len(), "gallery closed");
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let theme = &self.theme;
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Tag bar
                Constraint::Min(5),    // Card grid
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let search_bar = SearchBar::new(&state.query, theme).focused(state.mode == Mode::Normal);
        frame.render_widget(search_bar, main_layout[0]);

        let labels = state.tag_labels();
        frame.render_widget(TagBar::new(&labels, state.tag_cursor, theme), main_layout[1]);

        // Grid block borders take two columns
        state.columns = columns_for(main_layout[2].width.saturating_sub(2));
        let grid = CardGrid::new(&state.grid.cards, state.cursor, &state.empty_message, theme);
        frame.render_widget(grid, main_layout[2]);

        let messages = state.active_messages();
        let summary = state.summary();
        frame.render_widget(StatusBar::new(&messages, &summary, theme), main_layout[3]);

        let hints = HelpBar::hints_for(state.mode);
        frame.render_widget(HelpBar::new(&hints, theme), main_layout[4]);
    }

    /// Render overlays (help, details, add-file prompt)
    fn render_overlays(&self, frame: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(&self.theme), frame.area()),
            Mode::Details => {
                if let Some((_, detail)) = &state.detail {
                    frame.render_widget(DetailsModal::new(detail, &self.theme), frame.area());
                }
            }
            Mode::Input => {
                if let Some(input) = &state.input {
                    frame.render_widget(InputModal::new(input, &self.theme), frame.area());
                }
            }
            Mode::Normal => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GallerySession;
    use crate::testing::entry;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn make_state() -> AppState {
        let mut session = GallerySession::new();
        session.ingest(entry("cat.png", &["emoji"]));
        session.ingest(entry("report.pdf", &["doc"]));
        AppState::new(session, "No matching files.", PathBuf::from("."))
    }

    #[test]
    fn test_full_frame_renders() {
        let gallery = Gallery::new();
        let mut state = make_state();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| {
                gallery.render(frame, &mut state);
                gallery.render_overlays(frame, &state);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("cat.png"));
        assert!(text.contains("report.pdf"));
        assert!(text.contains(" all "));
        assert!(text.contains("2/2 files"));
        assert_eq!(state.columns, 4);
    }

    #[test]
    fn test_details_overlay_renders() {
        let gallery = Gallery::new();
        let mut state = make_state();
        state.open_details();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| {
                gallery.render(frame, &mut state);
                gallery.render_overlays(frame, &state);
            })
            .unwrap();

        assert!(screen_text(&terminal).contains("File Details"));
    }
}
