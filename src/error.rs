// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing the CSV source or generating messages.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The CSV source has no header line.
    #[error("CSV file is empty")]
    EmptyInput,

    /// The header names the same column twice.
    #[error("duplicate column `{name}` in CSV header")]
    DuplicateHeader { name: String },

    /// A data row's field count does not match the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RowShape {
        /// 1-based physical line number in the CSV source
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A record lacks a column required to name its output file.
    #[error("row {row}: missing field `{field}` required for output file name")]
    MissingField { field: String, row: usize },

    /// The computed output name would leave the output directory.
    #[error("row {row}: `{name}` is not a valid output file name")]
    InvalidFileName { name: String, row: usize },

    /// An output file would be written twice or already exists.
    #[error("output file {} already exists", path.display())]
    OutputCollision { path: PathBuf },

    /// Any underlying read or write failure.
    #[error("cannot access {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MergeError>;
