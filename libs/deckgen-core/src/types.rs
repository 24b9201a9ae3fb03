//! Core types for deck generation.

use serde::{Deserialize, Serialize};

/// Complexity card answer used when a pattern carries no note.
pub const DEFAULT_COMPLEXITY: &str = "Varies by implementation";

/// Code fence language used when an example does not name one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Pattern as written in a definition file (not yet validated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPattern {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_note: Option<String>,
}

/// Canonical example implementation of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub function_name: String,
    pub code: String,
    pub language: String,
}

/// Validated pattern, as held by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Display name, may contain emoji.
    pub name: String,
    /// ASCII-safe identifier used for file names.
    pub slug: String,
    pub indicators: Vec<String>,
    pub example: Option<Example>,
    pub complexity_note: Option<String>,
}

impl PatternRecord {
    /// Complexity note, or the default placeholder.
    pub fn complexity(&self) -> &str {
        self.complexity_note.as_deref().unwrap_or(DEFAULT_COMPLEXITY)
    }

    /// Number of cards this pattern renders to.
    pub fn card_count(&self) -> usize {
        if self.example.is_some() {
            4
        } else {
            3
        }
    }
}

/// Which template produced a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Identify,
    Examples,
    Implement,
    Complexity,
}

/// One question/answer study unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub front: String,
    pub back: String,
}

/// Titled, ordered collection of cards. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    title: String,
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn new(title: String, cards: Vec<Card>) -> Self {
        Self { title, cards }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(example: Option<Example>) -> PatternRecord {
        PatternRecord {
            name: "Heap Pattern".to_string(),
            slug: "heap-pattern".to_string(),
            indicators: vec![],
            example,
            complexity_note: None,
        }
    }

    #[test]
    fn complexity_defaults_to_placeholder() {
        assert_eq!(record(None).complexity(), "Varies by implementation");
    }

    #[test]
    fn complexity_uses_note_when_present() {
        let mut pattern = record(None);
        pattern.complexity_note = Some("O(n log k) time, O(k) space".to_string());
        assert_eq!(pattern.complexity(), "O(n log k) time, O(k) space");
    }

    #[test]
    fn card_count_depends_on_example() {
        assert_eq!(record(None).card_count(), 3);
        let example = Example {
            function_name: "kth_largest".to_string(),
            code: "def kth_largest(nums, k): ...".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        };
        assert_eq!(record(Some(example)).card_count(), 4);
    }

    #[test]
    fn raw_pattern_rejects_unknown_fields() {
        let json = r#"{"name": "Heap Pattern", "examples": ["K-th largest"]}"#;
        assert!(serde_json::from_str::<RawPattern>(json).is_err());
    }

    #[test]
    fn raw_pattern_defaults_optional_fields() {
        let raw: RawPattern = serde_json::from_str(r#"{"name": "Heap Pattern"}"#).unwrap();
        assert!(raw.indicators.is_empty());
        assert_eq!(raw.slug, None);
        assert_eq!(raw.example_code, None);
    }

    #[test]
    fn card_kind_serializes_snake_case() {
        let json = serde_json::to_string(&CardKind::Implement).unwrap();
        assert_eq!(json, "\"implement\"");
    }
}
