//! CSV parsing into Polars DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads a local CSV file into a DataFrame.
pub fn read_csv_file(path: &Path, max_size: u64) -> Result<DataFrame> {
    check_file_size_with_limit(path, max_size)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    read_csv_bytes(bytes, &path.display().to_string())
}

/// Parses in-memory CSV content into a DataFrame.
///
/// The first row is the header. Column types are inferred from the whole
/// input so late float or string values do not break integer columns.
/// `origin` only labels errors and logs.
pub fn read_csv_bytes(mut bytes: Vec<u8>, origin: &str) -> Result<DataFrame> {
    check_encoding(&bytes, origin)?;
    if bytes.starts_with(&UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            origin: origin.to_string(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, origin)?;
    Ok(df)
}

/// Validate DataFrame shape after loading.
///
/// Rejects tables without rows and tables with blank header cells.
pub fn validate_dataframe_shape(df: &DataFrame, origin: &str) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            origin: origin.to_string(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                origin: origin.to_string(),
            });
        }
    }

    Ok(())
}

/// Rejects UTF-16 input, which Polars cannot parse.
fn check_encoding(bytes: &[u8], origin: &str) -> Result<()> {
    let encoding = match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => "UTF-16 LE",
        Some([0xFE, 0xFF]) => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        origin: origin.to_string(),
        encoding,
    })
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
