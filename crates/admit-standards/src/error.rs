//! Error types for reference-data loading.

use std::path::PathBuf;

use admit_model::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading the reference tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference file not found in the standards directory.
    #[error("reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse program vocabulary {source_name}: {source}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read majors table {source_name}: {source}")]
    CsvRead {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// Invalid value in a reference-table field.
    #[error("invalid {field} value '{value}' in {source_name}")]
    InvalidValue {
        field: &'static str,
        value: String,
        source_name: String,
    },

    /// The same program is listed under two type groups.
    #[error("program `{program}` is listed under both {first} and {second}")]
    DuplicateProgramType {
        program: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for reference-data loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
