//! Command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use deckgen_core::{plan, write_all, DeckFormat, PatternRegistry, DEFAULT_TITLE};

use crate::GenerateArgs;

/// Load, render and write every deck. Nothing is written unless all decks
/// were built successfully.
pub fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<PathBuf>> {
    let registry = PatternRegistry::load_path(&args.source.source)?;
    let registry = if args.patterns.is_empty() {
        registry
    } else {
        registry.select(args.patterns.as_slice())?
    };

    if registry.is_empty() {
        tracing::warn!("No patterns found in {}", args.source.source.display());
    }

    let title = args
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or(registry.title())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();
    let format = DeckFormat::from(args.format);

    let files = plan(&registry, args.mode.into(), &title, format)?;
    let card_total: usize = registry.patterns().iter().map(|p| p.card_count()).sum();

    let written = write_all(&files, format, &args.out)?;
    tracing::info!(
        "Generated {} flashcards across {} files in {}",
        card_total,
        written.len(),
        args.out.display()
    );

    Ok(written)
}

/// Print `<slug>\t<cards>\t<name>` for each pattern.
pub fn list<W: Write>(source: &Path, mut out: W) -> anyhow::Result<()> {
    let registry = PatternRegistry::load_path(source)?;
    for pattern in registry.patterns() {
        writeln!(out, "{}\t{}\t{}", pattern.slug, pattern.card_count(), pattern.name)?;
    }
    Ok(())
}

/// Validate a source, returning the number of patterns it defines.
pub fn check(source: &Path) -> anyhow::Result<usize> {
    let registry = PatternRegistry::load_path(source)?;
    Ok(registry.len())
}
