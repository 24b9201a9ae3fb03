pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use deckgen_core::{DeckFormat, DeckMode};

/// Default study guide the patterns are extracted from.
pub const DEFAULT_SOURCE: &str = "docs/algo.md";

/// Default directory for generated decks.
pub const DEFAULT_OUT_DIR: &str = "generated/flashcards";

#[derive(Debug, Parser)]
#[command(name = "deckgen")]
#[command(about = "Generate study flashcard decks from algorithm pattern definitions", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render and write flashcard decks
    Generate(GenerateArgs),
    /// List the patterns a source defines
    List(SourceArgs),
    /// Validate a source without writing anything
    Check(SourceArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Pattern definitions (.json) or study guide (.md)
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory, created when missing
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Which decks to write
    #[arg(short, long, value_enum, default_value_t = ModeArg::Both)]
    pub mode: ModeArg,

    /// Deck file format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Markdown)]
    pub format: FormatArg,

    /// Title of the combined deck (defaults to the source's title, then "Algorithm")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Only generate these patterns (display name or slug); repeatable
    #[arg(short, long = "pattern")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Combined,
    PerPattern,
    Both,
}

impl From<ModeArg> for DeckMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Combined => DeckMode::Combined,
            ModeArg::PerPattern => DeckMode::PerPattern,
            ModeArg::Both => DeckMode::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Csv,
}

impl From<FormatArg> for DeckFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => DeckFormat::Markdown,
            FormatArg::Csv => DeckFormat::Csv,
        }
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => {
            commands::generate(&args)?;
        }
        Command::List(args) => {
            commands::list(&args.source, std::io::stdout().lock())?;
        }
        Command::Check(args) => {
            let count = commands::check(&args.source)?;
            println!("{}: {} patterns OK", args.source.display(), count);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["deckgen", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.source.source, PathBuf::from("docs/algo.md"));
        assert_eq!(args.out, PathBuf::from("generated/flashcards"));
        assert_eq!(args.mode, ModeArg::Both);
        assert_eq!(args.format, FormatArg::Markdown);
        assert!(args.patterns.is_empty());
    }

    #[test]
    fn generate_with_options() {
        let cli = Cli::try_parse_from([
            "deckgen",
            "generate",
            "--source",
            "patterns.json",
            "--mode",
            "per-pattern",
            "--format",
            "csv",
            "--pattern",
            "heap-pattern",
            "--pattern",
            "Sliding Window Pattern",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.mode, ModeArg::PerPattern);
        assert_eq!(DeckFormat::from(args.format), DeckFormat::Csv);
        assert_eq!(args.patterns, vec!["heap-pattern", "Sliding Window Pattern"]);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["deckgen", "generate", "--mode", "shuffled"]).is_err());
    }
}
