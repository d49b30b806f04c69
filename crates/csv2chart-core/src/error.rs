// File: crates/csv2chart-core/src/error.rs
// Summary: Error types for loading CSV tables and building charts.

use std::path::PathBuf;

use thiserror::Error;

/// A directive in a comment line could not be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown directive `{0}`")]
    UnknownDirective(String),

    #[error("directive `{name}`: `{value}` is not a number")]
    InvalidNumber { name: String, value: String },

    #[error("directive `{name}`: `{value}` is not a boolean")]
    InvalidBool { name: String, value: String },

    #[error("directive `{name}`: `{value}` is not a color")]
    InvalidColor { name: String, value: String },
}

/// Errors that abort the conversion of a single file.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the input failed mid-stream or it is not valid UTF-8.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Row and column are matrix indices (comment and blank lines excluded).
    #[error("missing cell at row {row}, column {column}")]
    MissingCell { column: usize, row: usize },

    #[error("value `{value}` at row {row}, column {column} is not a number")]
    InvalidValue { column: usize, row: usize, value: String },

    #[error("table has no data cells")]
    EmptyData,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
