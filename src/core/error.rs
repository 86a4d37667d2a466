//! Configuration-level errors that abort a run.
//!
//! Lookup failures never show up here: they are recovered where they happen
//! and turned into "not found" values in the report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetailError {
    #[error("Cannot read batch file {path}: {source}")]
    BatchRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in batch file {path}: {source}")]
    BatchParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Batch file {path} must be a JSON object whose values are arrays of arrays (bad entry: {key})")]
    BatchShape { path: PathBuf, key: String },

    #[error("'{0}' is neither an IPv4 address nor a readable batch file")]
    InvalidTarget(String),

    #[error("Cannot read registry file {path}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry data: {0}")]
    RegistryParse(#[from] serde_json::Error),
}

pub type DetailResult<T> = Result<T, DetailError>;
