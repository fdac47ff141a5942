//! Tagdeck CLI application entry point
//!
//! Every invocation starts a fresh session: the files named on the command
//! line are ingested with their tags, then the chosen command runs against
//! that session.
//!
//! # Usage
//!
//! ```bash
//! # Open the gallery (default command)
//! tagdeck browse shots/*.png -t screenshot
//!
//! # Print the cards matching a search and tag
//! tagdeck list 'shots/*' -t emoji,cute -s cat --tag emoji
//!
//! # Details, clipboard and download for a single file
//! tagdeck show cat.png shots/cat.png
//! tagdeck copy-url cat.png shots/cat.png
//! tagdeck download cat.png shots/cat.png --to ~/saved
//!
//! # Quiet mode (only output results)
//! tagdeck -q list 'shots/*'
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/tagdeck/config.toml` on Linux) and are created with defaults
//! on first run. `RUST_LOG` overrides the configured log level.

use colored::Colorize;
use tagdeck::{
    DeckError,
    cli::{Cli, Commands},
    commands,
    config::DeckConfig,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, DeckError>;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => DeckConfig::load_from(path)?,
        None => DeckConfig::load()?,
    };
    init_tracing(&config.log_level);

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();
    let session = commands::load_session(command.ingest_args(), command.prompts_for_tags(), &config)?;
    tracing::debug!(files = session.catalog().len(), "session loaded");

    match command {
        Commands::Browse { .. } => commands::browse(session, &config, quiet),
        Commands::List {
            search, tag, json, ..
        } => commands::list(session, search, tag, json, &config, quiet),
        Commands::Show { name, json, .. } => commands::show(&session, &name, json),
        Commands::CopyUrl { name, .. } => commands::copy_url(&session, &name, quiet),
        Commands::Download { name, to, .. } => {
            commands::download(&session, &name, to, &config, quiet)
        }
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
