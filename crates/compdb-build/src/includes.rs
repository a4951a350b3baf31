//! Include-path dump scanning.
//!
//! Each line of the dump holds space-separated include directories. Every
//! directory is recorded as given and its immediate `.h` entries are
//! collected as headers.

use crate::{BuildError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Include directories and the headers found in them, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeScan {
    pub includes: Vec<String>,
    pub headers: Vec<String>,
}

/// Whether a directory entry name has a `.h` extension, case-insensitively.
///
/// Leading dots belong to the stem, so `.h` and `..h` have no extension.
pub fn is_header(name: &str) -> bool {
    name.trim_start_matches('.')
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("h"))
}

/// List the entry names of `dir`, sorted by name.
///
/// Returns `Ok(None)` when the directory does not exist. Every other listing
/// failure is an error.
pub fn list_dir_sorted(dir: &Path) -> Result<Option<Vec<String>>> {
    let list_err = |source: std::io::Error| BuildError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(list_err(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(list_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(Some(names))
}

/// Scan an include dump.
///
/// Headers are joined to their include token with `/` regardless of the
/// host separator.
pub fn scan_includes(dump: &str) -> Result<IncludeScan> {
    let mut scan = IncludeScan::default();

    for line in dump.lines().map(str::trim).filter(|l| !l.is_empty()) {
        // runs of spaces yield empty tokens; they are recorded and list as not found
        for token in line.split(' ').map(str::trim) {
            tracing::debug!(include = token, "extracting include");
            scan.includes.push(token.to_string());

            let Some(names) = list_dir_sorted(Path::new(token))? else {
                tracing::debug!(include = token, "skipping include, directory not found");
                continue;
            };

            for name in names.into_iter().filter(|n| is_header(n)) {
                let header = format!("{token}/{name}");
                tracing::trace!(%header, "found header");
                scan.headers.push(header);
            }
        }
    }

    Ok(scan)
}
