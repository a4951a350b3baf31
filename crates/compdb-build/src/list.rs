//! Parser for the compile-command list dump.
//!
//! The dump is a flat sequence of records, three non-blank lines each:
//!
//! ```text
//! /home/user/project/build
//! gcc -I../include -c ../src/main.c
//! ../src/main.c
//! ```
//!
//! Blank lines are ignored anywhere and never advance the record.

use crate::CompileCommand;

/// What the parser expects from the next non-blank line.
///
/// The in-progress fields travel with the state, so a record can only be
/// emitted once all three are present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    AwaitingDirectory,
    AwaitingCommand {
        directory: String,
    },
    AwaitingFile {
        directory: String,
        command: String,
    },
}

impl ListState {
    /// Consume one trimmed, non-blank line.
    ///
    /// Returns the next state and the completed entry, if this line was the
    /// `file` of a record.
    pub fn advance(self, line: &str) -> (ListState, Option<CompileCommand>) {
        match self {
            ListState::AwaitingDirectory => (
                ListState::AwaitingCommand {
                    directory: line.to_string(),
                },
                None,
            ),
            ListState::AwaitingCommand { directory } => (
                ListState::AwaitingFile {
                    directory,
                    command: line.to_string(),
                },
                None,
            ),
            ListState::AwaitingFile { directory, command } => (
                ListState::AwaitingDirectory,
                Some(CompileCommand {
                    directory,
                    command,
                    file: line.to_string(),
                }),
            ),
        }
    }

    /// Whether the parser sits between records.
    pub fn is_idle(&self) -> bool {
        matches!(self, ListState::AwaitingDirectory)
    }
}

/// Parse a list dump into complete compile commands, in input order.
///
/// A truncated trailing record is dropped without error.
pub fn parse_list(dump: &str) -> Vec<CompileCommand> {
    let mut state = ListState::default();
    let mut commands = Vec::new();

    for line in dump.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (next, entry) = state.advance(line);
        if let Some(entry) = entry {
            tracing::trace!(file = %entry.file, "extracted compile command");
            commands.push(entry);
        }
        state = next;
    }

    if !state.is_idle() {
        tracing::debug!(?state, "dropping incomplete trailing record");
    }

    commands
}
