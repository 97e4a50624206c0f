use std::io;

use thiserror::Error;

/// Errors raised while loading the game or driving the terminal.
/// Rejected moves and empty pickups are ordinary outcomes and never show up here.
#[derive(Debug, Error)]
pub enum GameError {
    /// No item template exists for the requested key.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A map cell refers to a terrain label missing from the terrain table.
    #[error("unknown terrain '{label}' at {x},{y}")]
    UnknownTerrain { label: String, x: u16, y: u16 },

    /// An items.json entry that can't be used; only that entry is dropped.
    #[error("invalid item template '{key}': {reason}")]
    InvalidItemTemplate { key: String, reason: String },

    /// The map file is structurally inconsistent (dimensions, start position, etc.).
    #[error("invalid map: {0}")]
    InvalidMap(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl GameError {
    pub fn invalid_map(message: String) -> GameError {
        GameError::InvalidMap(message)
    }
}
