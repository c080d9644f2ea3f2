//! Error types for FARS data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the accident dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Network Errors ===
    /// HTTP request could not be sent or its body could not be read.
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("CSV file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Content uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {origin}")]
    UnsupportedEncoding {
        origin: String,
        encoding: &'static str,
    },

    /// CSV content is empty.
    #[error("CSV is empty: {origin}")]
    EmptyCsv { origin: String },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// Parsed table has a header but no rows.
    #[error("CSV has no data rows: {origin}")]
    EmptyDataFrame { origin: String },

    /// A header cell is blank.
    #[error("CSV has an empty column name: {origin}")]
    EmptyColumnName { origin: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
