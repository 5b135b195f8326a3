use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Whether an insert introduced a new string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    Duplicate,
}

/// Base locale catalog: every extracted string maps to itself.
///
/// Entries keep first-seen order, which is stable for a given source tree.
#[derive(Debug, Default)]
pub struct Catalog {
    data: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `text` as both key and value. Re-inserting a known string is a no-op.
    pub fn insert(&mut self, text: String) -> InsertOutcome {
        if self.data.contains_key(&text) {
            return InsertOutcome::Duplicate;
        }
        self.data.insert(text.clone(), Value::String(text));
        InsertOutcome::Added
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Pretty JSON with 2-space indentation and non-ASCII kept as-is.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data).context("Failed to serialize locale catalog")
    }

    /// Write the catalog to `path`, creating parent directories as needed.
    ///
    /// The file is truncated and rewritten in full; no trailing newline is added.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = self.to_json()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}
