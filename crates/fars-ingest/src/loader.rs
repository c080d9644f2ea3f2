//! One-shot dataset loading.

use std::time::Instant;

use tracing::{info, info_span};

use crate::csv::{read_csv_bytes, read_csv_file};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::fetch::fetch_csv;
use crate::source::{DataSource, LoadOptions};

/// Fetch or read the accident CSV and parse it.
///
/// This is the only fallible step of a run; callers are expected to abort
/// when it fails.
pub fn load_dataset(source: &DataSource, options: &LoadOptions) -> Result<Dataset> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let started = Instant::now();

    let frame = match source {
        DataSource::Url(url) => {
            let bytes = fetch_csv(url, options.timeout)?;
            read_csv_bytes(bytes, url)?
        }
        DataSource::File(path) => read_csv_file(path, options.max_file_size)?,
    };

    let dataset = Dataset::new(frame, source.to_string());
    info!(
        rows = dataset.height(),
        columns = dataset.width(),
        duration_ms = started.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
