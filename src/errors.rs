use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiaBotError {
    #[error("Sentiment lexicon unavailable at {path}: {reason}")]
    LexiconUnavailable { path: PathBuf, reason: String },

    #[error("Invalid trend window: {0} (window must be at least 1)")]
    InvalidWindow(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl LiaBotError {
    /// Actionable guidance for errors the user can fix themselves
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::LexiconUnavailable { .. } => Some(
                "You can try:\n  \
                 1. Check that [scorer].lexicon_path points to a readable file\n  \
                 2. Use a tab-separated AFINN lexicon (word<TAB>score per line)\n  \
                 3. Switch to the built-in lexicon with [scorer] backend = \"vader\"",
            ),
            Self::ConfigError(_) | Self::TomlParsing(_) => {
                Some("Check config.toml against config.example.toml, or pass --config <path>")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LiaBotError>;
