//! Deck configuration files.
//!
//! A deck is the JSON file feeding the application store: the current user
//! and the ordered column list. The default location is the standard config
//! directory (`~/.config/feedrail/deck.json` on most platforms), overridable
//! via the `FEEDRAIL_DECK_PATH` environment variable or a CLI flag.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::Column;

/// Environment variable allowing callers to override the deck file path.
pub const DECK_PATH_ENV: &str = "FEEDRAIL_DECK_PATH";

/// Default filename for the JSON payload.
pub const DECK_FILE_NAME: &str = "deck.json";

/// Error surfaced when reading or parsing a deck fails.
#[derive(Debug, Error)]
pub enum DeckError {
    /// I/O failure (for example, permissions or missing file).
    #[error("deck I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Deserialization failure.
    #[error("deck parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted deck: the current user plus the ordered column set.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Login of the current user; drives the sidebar avatar header
    #[serde(default)]
    pub username: String,
    /// Ordered column list; position is the navigation target index
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Deck {
    /// Loads a deck from the given path.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// A small demo deck used when no deck file exists yet.
    pub fn demo() -> Self {
        Self {
            username: "octocat".into(),
            columns: vec![
                Column {
                    id: "notifications".into(),
                    kind: crate::ColumnKind::Notifications,
                    subtype: None,
                    owner: None,
                    repo: None,
                },
                Column {
                    id: "dashboard".into(),
                    kind: crate::ColumnKind::Activity,
                    subtype: Some("USER_RECEIVED_EVENTS".into()),
                    owner: Some("octocat".into()),
                    repo: None,
                },
                Column {
                    id: "rust-lang".into(),
                    kind: crate::ColumnKind::Activity,
                    subtype: Some("ORG_PUBLIC_EVENTS".into()),
                    owner: Some("rust-lang".into()),
                    repo: None,
                },
            ],
        }
    }
}

/// Resolves the deck path: env override first, then the config directory,
/// then a file next to the working directory as a last resort.
pub fn default_deck_path() -> PathBuf {
    if let Ok(path) = env::var(DECK_PATH_ENV)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }
    config_dir()
        .map(|dir| dir.join("feedrail").join(DECK_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DECK_FILE_NAME))
}
