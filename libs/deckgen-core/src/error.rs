//! Error types for deckgen-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while loading patterns or writing decks.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("malformed pattern {name:?}: {reason}")]
    MalformedPattern { name: String, reason: String },

    #[error("duplicate pattern name {name:?}")]
    DuplicatePatternName { name: String },

    #[error("patterns {first:?} and {second:?} share the slug {slug:?}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("two decks would be written to {file_name:?}")]
    FileNameCollision { file_name: String },

    #[error("unknown pattern {name:?}")]
    UnknownPattern { name: String },

    #[error("invalid pattern source: {0}")]
    InvalidSource(String),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("csv error: {0}")]
    Csv(String),
}

impl DeckError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPattern {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
