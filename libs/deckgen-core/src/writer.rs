//! Deck serialization.
//!
//! # Markdown format
//! ```markdown
//! # Two Pointers Pattern Flashcards
//!
//! Generated for interview preparation
//!
//!
//! ## Card 1
//!
//! **Front:** Identify the algorithm pattern for: Two Pointers Pattern
//!
//! **Back:** Key indicators:
//! • Find two numbers that sum to target
//!
//! ```
//! Card numbers run across the whole deck. Consecutive cards are separated
//! by one blank line.

use crate::deck::DeckFile;
use crate::error::{DeckError, Result};
use crate::types::Deck;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Line printed under the deck title.
pub const BANNER: &str = "Generated for interview preparation";

/// Output encoding for a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckFormat {
    #[default]
    Markdown,
    Csv,
}

impl DeckFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }
}

/// Render a deck as Markdown cards.
pub fn to_markdown(deck: &Deck) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {} Flashcards\n\n", deck.title()));
    output.push_str(&format!("{BANNER}\n\n"));

    for (idx, card) in deck.cards().iter().enumerate() {
        output.push_str(&format!("\n## Card {}\n\n", idx + 1));
        output.push_str(&format!("**Front:** {}\n\n", card.front));
        output.push_str(&format!("**Back:** {}\n\n", card.back));
    }

    output
}

/// Render a deck as a `front,back` CSV import file.
pub fn to_csv(deck: &Deck) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(["front", "back"])
        .map_err(|e| DeckError::Csv(e.to_string()))?;
    for card in deck.cards() {
        writer
            .write_record([card.front.as_str(), card.back.as_str()])
            .map_err(|e| DeckError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DeckError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DeckError::Csv(e.to_string()))
}

/// Encode a deck in the given format.
pub fn encode(deck: &Deck, format: DeckFormat) -> Result<String> {
    match format {
        DeckFormat::Markdown => Ok(to_markdown(deck)),
        DeckFormat::Csv => to_csv(deck),
    }
}

/// Write an encoded deck to a stream.
pub fn write_to<W: Write>(deck: &Deck, format: DeckFormat, mut writer: W) -> Result<()> {
    let content = encode(deck, format)?;
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(DeckError::Write)
}

/// Write an encoded deck to `path`.
///
/// The content goes to a temporary file next to `path` first and is renamed
/// into place, so `path` is either the complete deck or untouched.
pub fn write_file(deck: &Deck, format: DeckFormat, path: &Path) -> Result<()> {
    let content = encode(deck, format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    // Temp files default to 0600; decks get the same mode `fs::write` would give.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| DeckError::io(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| DeckError::io(path, e))?;
    tmp.persist(path).map_err(|e| DeckError::io(path, e.error))?;

    tracing::debug!("Wrote {} cards to {}", deck.len(), path.display());
    Ok(())
}

/// Write planned decks into `dir`, creating it if needed.
pub fn write_all(files: &[DeckFile], format: DeckFormat, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| DeckError::io(dir, e))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        write_file(&file.deck, format, &path)?;
        written.push(path);
    }

    tracing::info!("Wrote {} deck files to {}", written.len(), dir.display());
    Ok(written)
}
