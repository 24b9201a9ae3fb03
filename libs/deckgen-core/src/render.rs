//! Card templates.
//!
//! Every pattern renders to the same fixed sequence:
//! Identify, Examples, Implement (only with an example), Complexity.

use crate::types::{Card, CardKind, PatternRecord};

const INDICATORS_HEADER: &str = "Key indicators:";
const EXAMPLES_HEADER: &str = "Common examples:";
const BULLET: &str = "• ";

/// Render one pattern into its cards.
pub fn render(pattern: &PatternRecord) -> Vec<Card> {
    let mut cards = Vec::with_capacity(pattern.card_count());

    cards.push(identify_card(pattern));
    cards.push(examples_card(pattern));
    if let Some(card) = implement_card(pattern) {
        cards.push(card);
    }
    cards.push(complexity_card(pattern));

    cards
}

fn identify_card(pattern: &PatternRecord) -> Card {
    let mut back = String::from(INDICATORS_HEADER);
    for indicator in &pattern.indicators {
        back.push('\n');
        back.push_str(BULLET);
        back.push_str(indicator);
    }

    Card {
        kind: CardKind::Identify,
        front: format!("Identify the algorithm pattern for: {}", pattern.name),
        back,
    }
}

// The body stays empty: generated decks have always shipped only the header.
fn examples_card(pattern: &PatternRecord) -> Card {
    Card {
        kind: CardKind::Examples,
        front: format!("Give examples of {} problems", pattern.name),
        back: EXAMPLES_HEADER.to_string(),
    }
}

fn implement_card(pattern: &PatternRecord) -> Option<Card> {
    let example = pattern.example.as_ref()?;
    Some(Card {
        kind: CardKind::Implement,
        front: format!(
            "Implement {} using {}",
            example.function_name, pattern.name
        ),
        back: format!("```{}\n{}\n```", example.language, example.code),
    })
}

fn complexity_card(pattern: &PatternRecord) -> Card {
    Card {
        kind: CardKind::Complexity,
        front: format!("What is the time/space complexity of {}?", pattern.name),
        back: pattern.complexity().to_string(),
    }
}
