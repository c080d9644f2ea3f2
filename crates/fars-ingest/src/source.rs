//! Where the accident table comes from.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// FARS 2016 accident file mirrored by the DS202 course labs.
pub const DEFAULT_FARS_URL: &str =
    "https://raw.githubusercontent.com/DS202-at-ISU/labs/master/data/fars2016/accident.csv";

/// HTTP request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Location of the accident CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch over HTTP(S).
    Url(String),
    /// Read from the local file system.
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_FARS_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options controlling how the dataset is loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Timeout for the whole HTTP request.
    pub timeout: Duration,
    /// Upper bound on local file size in bytes.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_file_size: crate::csv::MAX_CSV_FILE_SIZE,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
