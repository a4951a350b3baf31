//! JSON compilation database generation from build dumps.
//!
//! The build emits two plain-text dumps:
//! - a list of compiler invocations, three lines per source file
//!   (working directory, command, file)
//! - a list of include directories, space-separated
//!
//! This crate turns them into `compile_commands.json` for clang tooling and
//! `build.json`, which additionally records the project root, the include
//! directories and every header found in them.
//!
//! # Example
//!
//! ```no_run
//! use compdb_build::{generate, Job};
//!
//! let job = Job {
//!     list: "make/list.txt".into(),
//!     incs: "make/incs.txt".into(),
//!     root: "..".into(),
//!     output: "build".into(),
//! };
//! let (collection, files) = generate(&job)?;
//! println!("{} commands -> {}", collection.commands.len(), files.compile_commands.display());
//! # Ok::<(), compdb_build::BuildError>(())
//! ```

mod collection;
mod compile_commands;
mod config;
mod error;
pub mod includes;
pub mod list;
mod writer;

pub use collection::Collection;
pub use compile_commands::{CompileCommand, CompileDatabase};
pub use config::BuildPaths;
pub use error::{BuildError, Result};
pub use writer::{ensure_dir, write_outputs, OutputFiles, BUILD_JSON, COMPILE_COMMANDS_JSON};

use std::path::{Path, PathBuf};

/// Validated locations for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub list: PathBuf,
    pub incs: PathBuf,
    pub root: PathBuf,
    pub output: PathBuf,
}

fn read_dump(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read both dumps, build the collection and write it out.
pub fn generate(job: &Job) -> Result<(Collection, OutputFiles)> {
    let dump_list = read_dump(&job.list)?;
    let dump_incs = read_dump(&job.incs)?;

    let mut collection = Collection::new(job.root.to_string_lossy());
    collection.extract_commands(&dump_list);
    collection.extract_includes(&dump_incs)?;

    let files = write_outputs(&collection, &job.output)?;
    Ok((collection, files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let proj = tmp.path().join("proj");
        let inc = proj.join("inc");
        fs::create_dir_all(&inc).unwrap();
        fs::write(inc.join("x.h"), "").unwrap();
        fs::write(inc.join("y.txt"), "").unwrap();

        let proj_str = proj.to_str().unwrap();
        let inc_str = inc.to_str().unwrap();
        let list = tmp.path().join("list.txt");
        let incs = tmp.path().join("incs.txt");
        fs::write(&list, format!("{proj_str}\nclang -c a.c\na.c\n")).unwrap();
        fs::write(&incs, format!("{inc_str}\n")).unwrap();

        let job = Job {
            list,
            incs,
            root: proj.clone(),
            output: tmp.path().join("out"),
        };
        let (collection, files) = generate(&job).unwrap();

        assert_eq!(
            collection.commands,
            vec![CompileCommand {
                directory: proj_str.to_string(),
                command: "clang -c a.c".to_string(),
                file: "a.c".to_string(),
            }]
        );
        assert_eq!(collection.headers, vec![format!("{inc_str}/x.h")]);
        assert_eq!(collection.includes, vec![inc_str.to_string()]);
        assert_eq!(collection.files, vec!["a.c"]);
        assert_eq!(collection.root, proj_str);

        let db = CompileDatabase::from_file(&files.compile_commands).unwrap();
        assert_eq!(db.commands(), collection.commands.as_slice());
    }

    #[test]
    fn test_generate_missing_list_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let job = Job {
            list: tmp.path().join("missing.txt"),
            incs: tmp.path().join("missing-too.txt"),
            root: tmp.path().to_path_buf(),
            output: tmp.path().join("out"),
        };

        let err = generate(&job).unwrap_err();
        assert!(matches!(err, BuildError::Read { .. }));
        assert!(!job.output.exists());
    }
}
