//! Deck assembly and output planning.

use crate::error::{DeckError, Result};
use crate::registry::PatternRegistry;
use crate::render::render;
use crate::slug::slugify;
use crate::types::{Deck, PatternRecord};
use crate::writer::DeckFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Title used for the combined deck when none is given.
pub const DEFAULT_TITLE: &str = "Algorithm";

/// Build one deck from patterns, keeping their order.
pub fn assemble(title: &str, patterns: &[PatternRecord]) -> Deck {
    let cards = patterns.iter().flat_map(render).collect();
    Deck::new(title.to_string(), cards)
}

/// Which decks a generation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckMode {
    /// One deck covering every pattern.
    Combined,
    /// One deck per pattern.
    PerPattern,
    /// The combined deck followed by every per-pattern deck.
    #[default]
    Both,
}

impl DeckMode {
    fn includes_combined(self) -> bool {
        matches!(self, Self::Combined | Self::Both)
    }

    fn includes_per_pattern(self) -> bool {
        matches!(self, Self::PerPattern | Self::Both)
    }
}

/// A deck and the file name it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckFile {
    pub file_name: String,
    pub deck: Deck,
}

/// File name of the deck covering every pattern.
pub fn combined_file_name(title: &str, format: DeckFormat) -> String {
    match format {
        DeckFormat::Markdown => format!("{}-flashcards-anki.md", slugify(title)),
        DeckFormat::Csv => format!("{}-flashcards.csv", slugify(title)),
    }
}

/// File name of a single pattern's deck.
pub fn pattern_file_name(pattern: &PatternRecord, format: DeckFormat) -> String {
    format!("{}-flashcards.{}", pattern.slug, format.extension())
}

/// Assemble every deck a run produces, in output order.
pub fn plan(
    registry: &PatternRegistry,
    mode: DeckMode,
    title: &str,
    format: DeckFormat,
) -> Result<Vec<DeckFile>> {
    let mut files = Vec::new();

    if mode.includes_combined() {
        files.push(DeckFile {
            file_name: combined_file_name(title, format),
            deck: assemble(title, registry.patterns()),
        });
    }

    if mode.includes_per_pattern() {
        for pattern in registry.patterns() {
            files.push(DeckFile {
                file_name: pattern_file_name(pattern, format),
                deck: assemble(&pattern.name, std::slice::from_ref(pattern)),
            });
        }
    }

    let mut seen = HashSet::new();
    for file in &files {
        if !seen.insert(file.file_name.as_str()) {
            return Err(DeckError::FileNameCollision {
                file_name: file.file_name.clone(),
            });
        }
    }

    tracing::debug!("Planned {} decks ({:?}, {:?})", files.len(), mode, format);
    Ok(files)
}
