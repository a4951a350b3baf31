//! compile_commands.json entries.
//!
//! See <https://clang.llvm.org/docs/JSONCompilationDatabase.html>. Only the
//! `command` form is produced; `arguments` is never written.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single compile command from compile_commands.json.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// The working directory for compilation.
    pub directory: String,

    /// The full compilation command (space-separated).
    pub command: String,

    /// The source file path, absolute or relative to `directory`.
    pub file: String,
}

/// A compile_commands.json read back from disk.
#[derive(Debug, Clone)]
pub struct CompileDatabase {
    commands: Vec<CompileCommand>,
}

impl CompileDatabase {
    /// Load compile commands from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| crate::BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse compile commands from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> crate::Result<Self> {
        let commands: Vec<CompileCommand> = serde_json::from_str(json)?;
        Ok(Self { commands })
    }

    /// Get all compile commands.
    pub fn commands(&self) -> &[CompileCommand] {
        &self.commands
    }
}
