//! Error types for compdb-build.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for compdb-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that abort a run.
///
/// A missing include directory and a truncated trailing command record are
/// tolerated and never show up here.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    /// Failed to read one of the input dumps.
    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(compdb::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing an include directory failed for a reason other than "not found".
    #[error("Failed to list include directory {}: {source}", path.display())]
    #[diagnostic(
        code(compdb::list_dir),
        help("only missing include directories are skipped; check permissions and that the path is a directory")
    )]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("Failed to create output directory {}: {source}", path.display())]
    #[diagnostic(code(compdb::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output path exists but is a file.
    #[error("Not a directory: {}", .0.display())]
    #[diagnostic(code(compdb::not_a_directory))]
    NotADirectory(PathBuf),

    /// Failed to write an output artifact.
    #[error("Failed to write {}: {source}", path.display())]
    #[diagnostic(code(compdb::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or parse JSON.
    #[error("Failed to process JSON: {0}")]
    #[diagnostic(code(compdb::json))]
    Json(#[from] serde_json::Error),

    /// Failed to parse the TOML configuration file.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(code(compdb::config))]
    ParseToml(#[from] toml::de::Error),
}
