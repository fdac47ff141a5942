//! Event handling for the gallery TUI
//!
//! Maps key events to state changes. Filter edits are applied to the
//! session immediately; side effects (clipboard, download, opener) are
//! returned as [`EventResult::Action`] for the run loop to perform.

use super::state::{AppState, DetailAction, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Run an action on the entry in the details modal
    Action(DetailAction),
    /// Exit the gallery
    Quit,
    /// No action taken
    Ignored,
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,

        (KeyCode::Enter, _) => {
            state.open_details();
            EventResult::Continue
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            state.start_input();
            EventResult::Continue
        }

        // Grid navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Tag filter
        (KeyCode::Tab, _) => {
            state.cycle_tag(true);
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.cycle_tag(false);
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::Continue
            }
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events in the details modal
fn handle_details_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('c') if key.modifiers == KeyModifiers::NONE => {
            EventResult::Action(DetailAction::CopyUrl)
        }
        KeyCode::Char('d') => EventResult::Action(DetailAction::Download),
        KeyCode::Char('o') => EventResult::Action(DetailAction::Open),
        _ => {
            // Any other key closes
            state.close_details();
            EventResult::Continue
        }
    }
}

/// Handle events in the add-file prompt
fn handle_input_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        state.cancel_input();
        return EventResult::Continue;
    }

    if key.code == KeyCode::Enter {
        state.submit_input();
        return EventResult::Continue;
    }

    let Some(input) = state.input.as_mut() else {
        state.cancel_input();
        return EventResult::Continue;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            input.buffer.clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            input.buffer.push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            input.buffer.pop();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a key event according to the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Details => handle_details_mode(state, key),
        Mode::Input => handle_input_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GallerySession;
    use crate::testing::entry;
    use std::path::PathBuf;

    fn make_state() -> AppState {
        let mut session = GallerySession::new();
        session.ingest(entry("cat.png", &["emoji"]));
        session.ingest(entry("dog.png", &["emoji", "dog"]));
        session.ingest(entry("report.pdf", &["doc"]));
        AppState::new(session, "No matching files.", PathBuf::from("."))
    }

    fn press(state: &mut AppState, code: KeyCode) -> EventResult {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut AppState, c: char) -> EventResult {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_filters_grid() {
        let mut state = make_state();
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('o'));
        assert_eq!(state.query, "do");
        assert_eq!(state.grid.cards.len(), 1);
        assert_eq!(state.grid.cards[0].name, "dog.png");

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.grid.cards.len(), 3);
        assert_eq!(press(&mut state, KeyCode::Backspace), EventResult::Ignored);
    }

    #[test]
    fn test_tab_cycles_tag_filter() {
        let mut state = make_state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.selected_tag(), Some("doc"));
        assert_eq!(state.grid.cards.len(), 1);

        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.selected_tag(), None);
        assert_eq!(state.grid.cards.len(), 3);
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state();
        state.columns = 3;

        assert_eq!(press(&mut state, KeyCode::Right), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        press(&mut state, KeyCode::End);
        assert_eq!(state.cursor, 2);
        press(&mut state, KeyCode::Home);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_details_modal_keys() {
        let mut state = make_state();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, Mode::Details);

        assert_eq!(
            press(&mut state, KeyCode::Char('c')),
            EventResult::Action(DetailAction::CopyUrl)
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('d')),
            EventResult::Action(DetailAction::Download)
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('o')),
            EventResult::Action(DetailAction::Open)
        );
        assert_eq!(state.mode, Mode::Details);

        press(&mut state, KeyCode::Char('x'));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_input_mode_collects_text() {
        let mut state = make_state();
        ctrl(&mut state, 'o');
        assert_eq!(state.mode, Mode::Input);

        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Char('b'));
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input.as_ref().unwrap().buffer, "a");
        assert_eq!(state.query, "");

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.input.is_none());
    }

    #[test]
    fn test_help_toggle() {
        let mut state = make_state();
        press(&mut state, KeyCode::F(1));
        assert_eq!(state.mode, Mode::Help);
        press(&mut state, KeyCode::Char('z'));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_quit() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Quit);
        assert_eq!(ctrl(&mut state, 'c'), EventResult::Quit);
    }
}
