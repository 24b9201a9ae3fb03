//! Validated, ordered pattern registry.
//!
//! # JSON format
//! ```json
//! {
//!   "title": "Algorithm",
//!   "patterns": [
//!     {
//!       "name": "🔍 Two Pointers Pattern",
//!       "slug": "two-pointers-pattern",
//!       "indicators": ["Find two numbers that sum to target"],
//!       "example_function_name": "two_sum_sorted",
//!       "example_code": "def two_sum_sorted(nums, target): ...",
//!       "complexity_note": "O(n) time, O(1) space"
//!     }
//!   ]
//! }
//! ```
//! A bare array of patterns is accepted as well.

use crate::error::{DeckError, Result};
use crate::guide;
use crate::slug::{is_valid_slug, slugify};
use crate::types::{Example, PatternRecord, RawPattern, DEFAULT_LANGUAGE};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default)]
    title: Option<String>,
    patterns: Vec<RawPattern>,
}

/// Ordered list of validated patterns for one generation run.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    title: Option<String>,
    patterns: Vec<PatternRecord>,
}

impl PatternRegistry {
    /// Validate raw records, keeping their order.
    pub fn from_raw(raw: Vec<RawPattern>) -> Result<Self> {
        let mut patterns = Vec::with_capacity(raw.len());
        let mut seen_names = HashSet::new();
        let mut seen_slugs: HashMap<String, String> = HashMap::new();

        for record in raw {
            let pattern = validate(record)?;

            if !seen_names.insert(pattern.name.clone()) {
                return Err(DeckError::DuplicatePatternName { name: pattern.name });
            }
            if let Some(first) = seen_slugs.get(&pattern.slug) {
                return Err(DeckError::DuplicateSlug {
                    slug: pattern.slug.clone(),
                    first: first.clone(),
                    second: pattern.name,
                });
            }
            seen_slugs.insert(pattern.slug.clone(), pattern.name.clone());

            patterns.push(pattern);
        }

        Ok(Self {
            title: None,
            patterns,
        })
    }

    /// Parse a JSON definition: either an array of patterns or a document
    /// object with an optional `title` and a `patterns` array.
    pub fn load_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| DeckError::InvalidSource(format!("invalid JSON: {e}")))?;

        let (title, raw) = match value {
            serde_json::Value::Array(_) => {
                let raw: Vec<RawPattern> = serde_json::from_value(value)
                    .map_err(|e| DeckError::InvalidSource(e.to_string()))?;
                (None, raw)
            }
            serde_json::Value::Object(_) => {
                let doc: Document = serde_json::from_value(value)
                    .map_err(|e| DeckError::InvalidSource(e.to_string()))?;
                (doc.title, doc.patterns)
            }
            _ => {
                return Err(DeckError::InvalidSource(
                    "expected an array of patterns or an object with a \"patterns\" array"
                        .to_string(),
                ))
            }
        };

        let mut registry = Self::from_raw(raw)?;
        registry.title = title.filter(|t| !t.trim().is_empty());
        Ok(registry)
    }

    /// Extract patterns from a study-guide Markdown file.
    pub fn load_guide(content: &str) -> Result<Self> {
        Self::from_raw(guide::extract(content)?)
    }

    /// Read a definition file, choosing the format from its extension.
    pub fn load_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?;

        let registry = match extension.as_deref() {
            Some("json") => Self::load_json(&content)?,
            Some("md") | Some("markdown") => Self::load_guide(&content)?,
            _ => {
                return Err(DeckError::InvalidSource(format!(
                    "unsupported source {}: expected .json or .md",
                    path.display()
                )))
            }
        };

        tracing::info!(
            "Loaded {} patterns from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Document-level title, when the source supplied one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn patterns(&self) -> &[PatternRecord] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by display name or slug.
    pub fn get(&self, key: &str) -> Option<&PatternRecord> {
        self.patterns
            .iter()
            .find(|p| p.name == key || p.slug == key)
    }

    /// Subset of the registry, in registry order. Keys are display names or slugs.
    pub fn select<S: AsRef<str>>(&self, keys: &[S]) -> Result<Self> {
        let mut wanted = HashSet::new();
        for key in keys {
            let key = key.as_ref();
            let pattern = self.get(key).ok_or_else(|| DeckError::UnknownPattern {
                name: key.to_string(),
            })?;
            wanted.insert(pattern.name.as_str());
        }

        let patterns = self
            .patterns
            .iter()
            .filter(|p| wanted.contains(p.name.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            title: self.title.clone(),
            patterns,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate(raw: RawPattern) -> Result<PatternRecord> {
    if raw.name.trim().is_empty() {
        return Err(DeckError::malformed(&raw.name, "pattern name is empty"));
    }

    let function_name = non_blank(raw.example_function_name);
    let code = non_blank(raw.example_code);
    let language = non_blank(raw.example_language);

    let example = match (function_name, code) {
        (Some(function_name), Some(code)) => Some(Example {
            function_name,
            code,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }),
        (Some(_), None) => {
            return Err(DeckError::malformed(
                &raw.name,
                "example function name without example code",
            ))
        }
        (None, Some(_)) => {
            return Err(DeckError::malformed(
                &raw.name,
                "example code without an example function name",
            ))
        }
        (None, None) => {
            if language.is_some() {
                return Err(DeckError::malformed(
                    &raw.name,
                    "example language without an example",
                ));
            }
            None
        }
    };

    let slug = match raw.slug {
        Some(slug) if is_valid_slug(&slug) => slug,
        Some(slug) => {
            return Err(DeckError::malformed(
                &raw.name,
                format!("slug {slug:?} must use only lowercase letters, digits and inner hyphens"),
            ))
        }
        None => slugify(&raw.name),
    };

    Ok(PatternRecord {
        name: raw.name,
        slug,
        indicators: raw.indicators,
        example,
        complexity_note: non_blank(raw.complexity_note),
    })
}
