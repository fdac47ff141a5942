//! Command-line interface definitions and parsing
//!
//! Every command starts a fresh session: the given files are ingested, then
//! the command works on the resulting catalog.
//!
//! # Commands
//!
//! - **browse**: Interactive card gallery (default)
//! - **list**: Print the cards matching a query and tag filter
//! - **show**: Print the detail record of one file
//! - **copy-url**: Copy a file's reference to the clipboard
//! - **download**: Save a copy of a file into the download directory
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagdeck::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tagdeck", "list", "*.png", "-t", "emoji,cute", "--tag", "emoji"]);
//! match cli.get_command() {
//!     Commands::List { ingest, tag, .. } => {
//!         assert_eq!(ingest.tags(), vec!["emoji", "cute"]);
//!         assert_eq!(tag.as_deref(), Some("emoji"));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::ingest::parse_tags;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Files to ingest and the tags to give them
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestArgs {
    /// Files to add (glob patterns are expanded: *.png, shots/**/*)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Comma-separated tags applied to every file (repeatable)
    #[arg(short = 't', long = "tags", value_name = "TAGS")]
    pub tags: Vec<String>,
}

impl IngestArgs {
    /// Parsed tags from every `-t` occurrence, in order
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.tags.iter().flat_map(|t| parse_tags(t)).collect()
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagdeck")]
#[command(about = "Tag files and browse them as a card gallery", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive gallery (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Ask for extra tags for each file before opening
        #[arg(long = "prompt-tags")]
        prompt_tags: bool,
    },

    /// Print matching cards
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Case-insensitive file name search
        #[arg(short = 's', long = "search", value_name = "QUERY")]
        search: Option<String>,

        /// Only files carrying exactly this tag
        #[arg(long = "tag", value_name = "TAG")]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the details of one file
    Show {
        /// File name to show
        name: String,

        #[command(flatten)]
        ingest: IngestArgs,

        /// Print JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// Copy a file's reference to the clipboard
    #[command(name = "copy-url")]
    CopyUrl {
        /// File name to copy
        name: String,

        #[command(flatten)]
        ingest: IngestArgs,
    },

    /// Save a copy of a file
    Download {
        /// File name to download
        name: String,

        #[command(flatten)]
        ingest: IngestArgs,

        /// Target directory (overrides config)
        #[arg(long = "to", value_name = "DIR")]
        to: Option<PathBuf>,
    },
}

impl Commands {
    /// Ingestion arguments shared by every command
    #[must_use]
    pub const fn ingest_args(&self) -> &IngestArgs {
        match self {
            Self::Browse { ingest, .. }
            | Self::List { ingest, .. }
            | Self::Show { ingest, .. }
            | Self::CopyUrl { ingest, .. }
            | Self::Download { ingest, .. } => ingest,
        }
    }

    /// Whether each file should prompt for extra tags
    #[must_use]
    pub const fn prompts_for_tags(&self) -> bool {
        matches!(
            self,
            Self::Browse {
                prompt_tags: true,
                ..
            }
        )
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            ingest: IngestArgs::default(),
            prompt_tags: false,
        })
    }
}
