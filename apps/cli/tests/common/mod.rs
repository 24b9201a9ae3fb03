//! Shared helpers for CLI integration tests.
//!
//! Every test works inside its own temporary directory so generated decks
//! never touch the repository tree.

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use deckgen::{FormatArg, GenerateArgs, ModeArg, SourceArgs};
use tempfile::TempDir;

/// Temporary workspace holding a source file and an output directory.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a source file into the workspace and return its path.
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write source");
        path
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("generated").join("flashcards")
    }

    /// Generate arguments with the CLI defaults for everything but paths.
    pub fn generate_args(&self, source: PathBuf) -> GenerateArgs {
        GenerateArgs {
            source: SourceArgs { source },
            out: self.out_dir(),
            mode: ModeArg::Both,
            format: FormatArg::Markdown,
            title: None,
            patterns: vec![],
        }
    }

    pub fn read_output(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.out_dir().join(file_name)).expect("Failed to read output")
    }

    /// File names in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.out_dir()) else {
            return vec![];
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
