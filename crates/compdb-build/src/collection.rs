//! The aggregate written to `build.json`.

use crate::includes::scan_includes;
use crate::list::parse_list;
use crate::{CompileCommand, Result};
use serde::{Deserialize, Serialize};

/// Everything derived from one pair of dumps.
///
/// `files` runs parallel to `commands`: one entry per command, holding its
/// `file` field. Field order is the key order of `build.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Project root, as supplied by the caller.
    pub root: String,
    pub commands: Vec<CompileCommand>,
    pub headers: Vec<String>,
    pub includes: Vec<String>,
    pub files: Vec<String>,
}

impl Collection {
    /// Create an empty collection for the given project root.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Append every complete record of a compile-command list dump.
    pub fn extract_commands(&mut self, dump: &str) {
        for command in parse_list(dump) {
            self.files.push(command.file.clone());
            self.commands.push(command);
        }
    }

    /// Append the include directories of an include dump and the headers
    /// found in them.
    pub fn extract_includes(&mut self, dump: &str) -> Result<()> {
        let scan = scan_includes(dump)?;
        self.includes.extend(scan.includes);
        self.headers.extend(scan.headers);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_parallel_to_commands() {
        let mut collection = Collection::new("/proj");
        collection.extract_commands("/proj\ncc -c a.c\na.c\n/proj\ncc -c b.c\nsrc/b.c\n/proj\n");
        collection.extract_commands("/other\ncc -c c.c\nc.c");

        assert_eq!(collection.commands.len(), 3);
        assert_eq!(collection.files, vec!["a.c", "src/b.c", "c.c"]);
        assert_eq!(collection.root, "/proj");
    }

    #[test]
    fn test_include_pass_independent_of_commands() {
        let mut collection = Collection::new("/proj");
        collection
            .extract_includes("/compdb/definitely/missing\n")
            .unwrap();

        assert!(collection.commands.is_empty());
        assert!(collection.headers.is_empty());
        assert_eq!(collection.includes, vec!["/compdb/definitely/missing"]);
    }

    #[test]
    fn test_json_key_order() {
        let collection = Collection::new("/proj");
        let json = serde_json::to_string(&collection).unwrap();

        assert_eq!(
            json,
            r#"{"root":"/proj","commands":[],"headers":[],"includes":[],"files":[]}"#
        );
    }
}
