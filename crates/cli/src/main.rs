use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use feedrail_types::{Deck, SidebarOptions, deck::default_deck_path};

/// Feedrail: a multi-column feed reader for the terminal.
#[derive(Debug, Parser)]
#[command(name = "feedrail", version, about)]
struct Cli {
    /// Lay the sidebar out along the top instead of the left edge
    #[arg(long)]
    horizontal: bool,

    /// Compact mode: collapse utility controls and quiet transitions
    #[arg(long)]
    small: bool,

    /// Path to the deck file (defaults to the config directory)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Override the current user's login from the deck
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let deck = load_deck(&cli)?;
    let options = SidebarOptions {
        horizontal: cli.horizontal,
        small: cli.small,
    };

    feedrail_tui::run(deck, options).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the deck from the given path, the default location, or the demo
/// deck when no file exists yet.
fn load_deck(cli: &Cli) -> Result<Deck> {
    let mut deck = match &cli.deck {
        Some(path) => Deck::load(path).with_context(|| format!("loading deck from {}", path.display()))?,
        None => {
            let path = default_deck_path();
            if path.exists() {
                Deck::load(&path).with_context(|| format!("loading deck from {}", path.display()))?
            } else {
                info!(path = %path.display(), "no deck file found; using the demo deck");
                Deck::demo()
            }
        }
    };
    if let Some(user) = &cli.user {
        deck.username = user.clone();
    }
    Ok(deck)
}
