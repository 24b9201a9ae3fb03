//! Deterministic study-deck generation.
//!
//! Provides:
//! - Pattern registry loaded from JSON or a study-guide Markdown file
//! - Card templates (identify, examples, implement, complexity)
//! - Deck assembly for combined and per-pattern decks
//! - Markdown and CSV deck writers

pub mod deck;
pub mod error;
pub mod guide;
pub mod registry;
pub mod render;
pub mod slug;
pub mod types;
pub mod writer;

pub use deck::{assemble, plan, DeckFile, DeckMode, DEFAULT_TITLE};
pub use error::{DeckError, Result};
pub use registry::PatternRegistry;
pub use render::render;
pub use slug::slugify;
pub use types::{Card, CardKind, Deck, Example, PatternRecord, RawPattern, DEFAULT_COMPLEXITY};
pub use writer::{encode, to_csv, to_markdown, write_all, write_file, write_to, DeckFormat};
