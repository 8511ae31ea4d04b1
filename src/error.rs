// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-processing layer. The extraction engine itself has
/// no error type: a row it cannot read is simply unknown.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("No input file selected.")]
    NoInput,

    #[error("No attributes selected.")]
    NothingRequested,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Workbook error on {path}: {reason}")]
    Workbook {
        path: PathBuf,
        reason: String,
    },

    #[error("Input file {0} has no header row.")]
    EmptyInput(PathBuf),

    #[error("'{column}' column not found. Available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

impl RunError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunError::Io { path: path.into(), source }
    }

    pub fn workbook(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RunError::Workbook { path: path.into(), reason: reason.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_lists_headers() {
        let e = RunError::MissingColumn { column: s!("Details"), available: row!["Item", "Desc"] };
        assert_eq!(e.to_string(), "'Details' column not found. Available columns: Item, Desc");
    }
}
