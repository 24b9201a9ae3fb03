//! Pattern extraction from a study-guide Markdown file.
//!
//! # Format
//! ```markdown
//! ## Algorithm Problem Identification Guide
//!
//! #### **🔍 Two Pointers Pattern**
//! **Key indicators**:
//! - Find two numbers that sum to target
//! - Check if string is palindrome
//!
//! **Examples**:
//! - Two Sum in sorted array
//!
//! **Complexity**: O(n) time, O(1) space
//!
//! (fenced python block defining `two_sum_sorted`)
//! ```
//! Patterns run until the next pattern header or a heading of level 1-2.
//! An indicator bullet continues only on indented lines.

use crate::error::{DeckError, Result};
use crate::types::RawPattern;
use regex::Regex;
use std::sync::OnceLock;

/// Heading that opens the identification section.
pub const SECTION_HEADING: &str = "## Algorithm Problem Identification Guide";

const PATTERN_HEADER_PREFIX: &str = "#### **";
const FENCE: &str = "```";

static FUNCTION_NAME: OnceLock<Regex> = OnceLock::new();

fn function_name_pattern() -> &'static Regex {
    FUNCTION_NAME.get_or_init(|| {
        Regex::new(
            r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:def|fn|function)\s+([A-Za-z_][A-Za-z0-9_]*)",
        )
        .expect("static function name pattern is valid")
    })
}

/// First function declared in a code block.
pub fn function_name(code: &str) -> Option<&str> {
    function_name_pattern()
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract raw patterns, in document order.
pub fn extract(content: &str) -> Result<Vec<RawPattern>> {
    let mut lines = content.lines();

    if !lines.by_ref().any(|line| line.trim_end() == SECTION_HEADING) {
        return Err(DeckError::InvalidSource(format!(
            "section {SECTION_HEADING:?} not found"
        )));
    }

    let mut extractor = Extractor::default();
    for line in lines {
        if extractor.process_line(line) == Flow::Stop {
            break;
        }
    }

    let patterns = extractor.finalize();
    tracing::debug!("Extracted {} patterns from guide", patterns.len());
    Ok(patterns)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Indicators,
    Other,
}

struct CodeBlock {
    language: String,
    lines: Vec<String>,
}

#[derive(Default)]
struct Extractor {
    current: Option<RawPattern>,
    patterns: Vec<RawPattern>,
    field: Option<Field>,
    code: Option<CodeBlock>,
}

impl Extractor {
    fn process_line(&mut self, line: &str) -> Flow {
        if self.code.is_some() {
            self.handle_code_line(line);
            return Flow::Continue;
        }

        let trimmed = line.trim();

        if let Some(name) = pattern_name(trimmed) {
            self.flush();
            self.current = Some(RawPattern {
                name: name.to_string(),
                ..Default::default()
            });
            return Flow::Continue;
        }

        if is_section_break(trimmed) {
            self.flush();
            return Flow::Stop;
        }

        if trimmed.starts_with("### ") {
            self.field = None;
            return Flow::Continue;
        }

        if let Some(language) = trimmed.strip_prefix(FENCE) {
            self.field = None;
            self.code = Some(CodeBlock {
                language: language.trim().to_string(),
                lines: Vec::new(),
            });
            return Flow::Continue;
        }

        if self.current.is_none() {
            return Flow::Continue;
        }

        if let Some((label, rest)) = label(trimmed) {
            self.handle_label(label, rest);
        } else if self.field == Some(Field::Indicators) {
            self.handle_indicator_line(line);
        }

        Flow::Continue
    }

    fn handle_label(&mut self, label: &str, rest: &str) {
        let Some(ref mut pattern) = self.current else {
            return;
        };

        match label.to_ascii_lowercase().as_str() {
            "key indicators" => {
                self.field = Some(Field::Indicators);
                if let Some(item) = bullet(rest).or(Some(rest)).filter(|s| !s.is_empty()) {
                    pattern.indicators.push(item.to_string());
                }
            }
            "complexity" => {
                self.field = Some(Field::Other);
                if !rest.is_empty() {
                    pattern.complexity_note = Some(rest.to_string());
                }
            }
            _ => self.field = Some(Field::Other),
        }
    }

    fn handle_indicator_line(&mut self, line: &str) {
        let Some(ref mut pattern) = self.current else {
            return;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(item) = bullet(trimmed) {
            pattern.indicators.push(item.to_string());
            return;
        }

        let indented = line.starts_with(char::is_whitespace);
        match pattern.indicators.last_mut() {
            // Wrapped continuation of the previous bullet.
            Some(previous) if indented => {
                previous.push('\n');
                previous.push_str(trimmed);
            }
            // Unindented prose closes the list.
            Some(_) => self.field = Some(Field::Other),
            None => pattern.indicators.push(trimmed.to_string()),
        }
    }

    fn handle_code_line(&mut self, line: &str) {
        if line.trim() == FENCE {
            if let Some(block) = self.code.take() {
                self.attach_example(block);
            }
        } else if let Some(ref mut block) = self.code {
            block.lines.push(line.to_string());
        }
    }

    fn attach_example(&mut self, block: CodeBlock) {
        let Some(ref mut pattern) = self.current else {
            return;
        };
        if pattern.example_code.is_some() {
            return;
        }

        let code = block.lines.join("\n");
        if let Some(name) = function_name(&code) {
            pattern.example_function_name = Some(name.to_string());
            pattern.example_language = Some(block.language).filter(|l| !l.is_empty());
            pattern.example_code = Some(code);
        }
    }

    fn flush(&mut self) {
        self.field = None;
        if let Some(pattern) = self.current.take() {
            self.patterns.push(pattern);
        }
    }

    fn finalize(mut self) -> Vec<RawPattern> {
        // An unterminated fence still counts as a candidate example.
        if let Some(block) = self.code.take() {
            self.attach_example(block);
        }
        self.flush();
        self.patterns
    }
}

fn pattern_name(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix(PATTERN_HEADER_PREFIX)?;
    let end = rest.find("**")?;
    let name = rest[..end].trim();
    (name.contains("Pattern") && !name.is_empty()).then_some(name)
}

fn is_section_break(trimmed: &str) -> bool {
    trimmed.starts_with("# ") || trimmed.starts_with("## ")
}

/// Split `**Label**: rest` into its parts.
fn label(trimmed: &str) -> Option<(&str, &str)> {
    let rest = trimmed.strip_prefix("**")?;
    let end = rest.find("**")?;
    let after = rest[end + 2..].strip_prefix(':')?;
    Some((rest[..end].trim(), after.trim()))
}

fn bullet(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .map(str::trim_end)
}
