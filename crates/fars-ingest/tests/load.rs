//! Integration tests for dataset loading from local files.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use fars_ingest::{DEFAULT_FARS_URL, DataSource, IngestError, LoadOptions, load_dataset};
use fars_model::FarsColumn;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_load_local_file() {
    let file = write_csv(
        "STATE,HOUR,DAY_WEEK,MONTH,WEATHER,LATITUDE,LONGITUD\n\
         1,8,2,1,1,33.1,-86.5\n\
         6,17,7,12,2,36.7,-119.7\n\
         48,99,1,6,,31.0,-99.9\n",
    );
    let source = DataSource::File(file.path().to_path_buf());

    let dataset = load_dataset(&source, &LoadOptions::default()).unwrap();

    assert_eq!(dataset.height(), 3);
    assert_eq!(dataset.width(), 7);
    assert_eq!(dataset.origin(), file.path().display().to_string());
    assert_eq!(
        dataset.codes(FarsColumn::Weather),
        Some(vec![Some(1), Some(2), None])
    );
    assert_eq!(
        dataset.values(FarsColumn::Longitude),
        Some(vec![Some(-86.5), Some(-119.7), Some(-99.9)])
    );
    assert!(!dataset.has_column(FarsColumn::FunctionalSystem));
}

#[test]
fn test_load_missing_file_fails() {
    let source = DataSource::File(PathBuf::from("/definitely/not/here/accident.csv"));
    let result = load_dataset(&source, &LoadOptions::default());
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn test_load_unreachable_url_fails() {
    // Port 9 on localhost is the discard service and is not listening in test sandboxes.
    let source = DataSource::Url("http://127.0.0.1:9/accident.csv".to_string());
    let options = LoadOptions::default().with_timeout(Duration::from_secs(2));
    let result = load_dataset(&source, &options);
    assert!(matches!(result, Err(IngestError::Network { .. })));
}

#[test]
fn test_default_source_is_fars_url() {
    assert_eq!(
        DataSource::default(),
        DataSource::Url(DEFAULT_FARS_URL.to_string())
    );
    assert_eq!(DataSource::default().to_string(), DEFAULT_FARS_URL);
}
