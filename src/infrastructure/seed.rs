// src/infrastructure/seed.rs
use crate::domain::Note;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Notes used when no seed file is given.
pub fn demo_notes() -> Vec<Note> {
    vec![
        Note::new("title1", "text", ["t1", "t2", "t3"]),
        Note::new("title2", "text hei hello hola", ["t1", "t4", "t5"]),
    ]
}

/// TOML list of notes used to fill a board before running queries.
///
/// ```toml
/// [[notes]]
/// title = "title1"
/// text = "text"
/// tags = ["t1", "t2", "t3"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct SeedFile {
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl SeedFile {
    pub fn demo() -> Self {
        Self { notes: demo_notes() }
    }

    /// Load seed notes from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

        let seed = Self::parse(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;
        debug!(?path, notes = seed.notes.len(), "Loaded seed file");
        Ok(seed)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML seed")
    }
}
