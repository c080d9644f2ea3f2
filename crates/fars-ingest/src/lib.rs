//! FARS accident data ingestion.
//!
//! This crate loads the accident CSV, either downloaded over HTTP or read
//! from disk, into a Polars DataFrame wrapped in a [`Dataset`].
//!
//! # Example
//!
//! ```ignore
//! use fars_ingest::{DataSource, LoadOptions, load_dataset};
//! use fars_model::FarsColumn;
//!
//! let dataset = load_dataset(&DataSource::default(), &LoadOptions::default())?;
//! if let Some(hours) = dataset.codes(FarsColumn::Hour) {
//!     println!("{} hour values", hours.len());
//! }
//! ```

mod csv;
mod dataset;
mod error;
mod fetch;
mod loader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_bytes, read_csv_file,
    validate_dataframe_shape,
};

// === Loading ===
pub use dataset::Dataset;
pub use fetch::fetch_csv;
pub use loader::load_dataset;
pub use source::{DEFAULT_FARS_URL, DEFAULT_TIMEOUT, DataSource, LoadOptions};
