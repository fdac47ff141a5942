//! Tagdeck - tag files and browse them as a filterable card gallery
//!
//! Files are ingested into an in-memory catalog together with free-form
//! tags. A query engine filters the catalog by name and tag, and a render
//! coordinator turns the filtered view into card models for a presenter:
//! the terminal gallery or plain stdout.
//!
//! ```text
//! ingest ─→ FileCatalog.append ─→ TagIndex.update ─┐
//!                                                   ├─→ evaluate ─→ refresh ─→ Presenter
//! query / tag selection ─→ FilterState ─────────────┘
//! ```

use thiserror::Error;

pub mod actions;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod ingest;
pub mod output;
pub mod query;
pub mod render;
pub mod session;
pub mod size;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DeckError {
    /// Ingestion error
    #[error("Ingest error: {0}")]
    IngestError(#[from] ingest::IngestError),
    /// Clipboard, download or opener error
    #[error("Action failed: {0}")]
    ActionError(#[from] actions::ActionError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// No ingested file has the requested name
    #[error("No file named '{0}'")]
    EntryNotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
