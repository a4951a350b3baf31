//! Serialization of a [`Collection`] into its two JSON artifacts.

use crate::{BuildError, Collection, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the compilation database.
pub const COMPILE_COMMANDS_JSON: &str = "compile_commands.json";

/// File name of the full collection.
pub const BUILD_JSON: &str = "build.json";

/// Paths of the artifacts written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub compile_commands: PathBuf,
    pub build: PathBuf,
}

/// Create `dir` and any missing parents. Fails if `dir` exists as a file.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(BuildError::NotADirectory(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir).map_err(|source| BuildError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `compile_commands.json` and `build.json` into `out_dir`.
///
/// Not atomic: a failure on the second file leaves the first in place.
pub fn write_outputs(collection: &Collection, out_dir: &Path) -> Result<OutputFiles> {
    ensure_dir(out_dir)?;

    let files = OutputFiles {
        compile_commands: out_dir.join(COMPILE_COMMANDS_JSON),
        build: out_dir.join(BUILD_JSON),
    };

    write_json(&files.compile_commands, &collection.commands)?;
    write_json(&files.build, collection)?;

    Ok(files)
}
