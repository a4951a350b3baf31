//! Optional configuration file (`compdb.toml`).
//!
//! ```toml
//! list = "build/list.txt"
//! incs = "build/incs.txt"
//! root = ".."
//! output = "build/ccdb"
//! ```
//!
//! Relative paths are taken relative to the directory of the file itself.

use crate::{BuildError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input and output locations for one run. Any key may be left out and
/// supplied on the command line instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildPaths {
    /// Compile-command list dump.
    #[serde(default)]
    pub list: Option<PathBuf>,

    /// Include-path dump.
    #[serde(default)]
    pub incs: Option<PathBuf>,

    /// Project root.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Output directory.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl BuildPaths {
    /// Load from a TOML file, resolving relative paths against its directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_str(&content)?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(config.relative_to(base))
    }

    /// Parse from a TOML string without resolving paths.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Join every relative path onto `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| {
            p.map(|p| if p.is_absolute() { p } else { base.join(p) })
        };
        Self {
            list: resolve(self.list),
            incs: resolve(self.incs),
            root: resolve(self.root),
            output: resolve(self.output),
        }
    }

    /// Fill in any key missing here from `fallback`.
    pub fn or(self, fallback: BuildPaths) -> Self {
        Self {
            list: self.list.or(fallback.list),
            incs: self.incs.or(fallback.incs),
            root: self.root.or(fallback.root),
            output: self.output.or(fallback.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let toml = r#"
list = "make/list.txt"
root = "/abs/project"
        "#;

        let config = BuildPaths::from_str(toml).unwrap();

        assert_eq!(config.list, Some(PathBuf::from("make/list.txt")));
        assert_eq!(config.root, Some(PathBuf::from("/abs/project")));
        assert!(config.incs.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = BuildPaths::from_str("lists = \"x\"").unwrap_err();
        assert!(matches!(err, BuildError::ParseToml(_)));
    }

    #[test]
    fn test_from_file_resolves_relative() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compdb.toml");
        std::fs::write(&path, "list = \"list.txt\"\noutput = \"/abs/out\"\n").unwrap();

        let config = BuildPaths::from_file(&path).unwrap();

        assert_eq!(config.list, Some(dir.path().join("list.txt")));
        assert_eq!(config.output, Some(PathBuf::from("/abs/out")));
    }

    #[test]
    fn test_command_line_overrides_file() {
        let cli = BuildPaths {
            list: Some(PathBuf::from("cli-list")),
            ..Default::default()
        };
        let file = BuildPaths {
            list: Some(PathBuf::from("file-list")),
            incs: Some(PathBuf::from("file-incs")),
            ..Default::default()
        };

        let merged = cli.or(file);

        assert_eq!(merged.list, Some(PathBuf::from("cli-list")));
        assert_eq!(merged.incs, Some(PathBuf::from("file-incs")));
        assert!(merged.root.is_none());
    }
}
