//! Dataset I/O error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a dataset from being read or written
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Required column '{column}' not found in {path:?}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
