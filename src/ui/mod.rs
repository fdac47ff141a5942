//! Terminal gallery front end
//!
//! A ratatui/crossterm presenter for a [`GallerySession`](crate::session::GallerySession).
//! The session decides what is shown; this module only draws it and turns
//! key presses into session events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Gallery                    │
//! │        (terminal setup + event loop)        │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (session + │ │ (widgets) │ │  (events) │
//! │ GridModel) │ └───────────┘ └───────────┘
//! └────────────┘
//! ```
//!
//! # Layout
//!
//! Search bar, tag bar, card grid, status bar and a one-line help bar, with
//! the details modal, the add-file prompt and the help screen drawn on top.

pub mod error;
mod events;
mod gallery;
mod state;
mod theme;
pub mod widgets;

pub use error::{Result, UiError};
pub use events::{EventResult, handle_key};
pub use gallery::Gallery;
pub use state::{
    ALL_TAGS_LABEL, AppState, DetailAction, GridModel, InputState, InputStep, MessageLevel, Mode,
    StatusMessage,
};
pub use theme::Theme;
