//! Blocking HTTP download of the accident CSV.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::{IngestError, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("fars-explore/", env!("CARGO_PKG_VERSION"));

/// Download the body at `url`.
///
/// Any transport failure or non-success status is an error; there are no
/// retries.
pub fn fetch_csv(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let network_error = |err: reqwest::Error| IngestError::Network {
        url: url.to_string(),
        message: err.to_string(),
    };

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(network_error)?;

    let started = Instant::now();
    let response = client
        .get(url)
        .header(ACCEPT, "text/csv, text/plain, */*")
        .send()
        .map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(network_error)?;
    debug!(
        url,
        bytes = body.len(),
        duration_ms = started.elapsed().as_millis(),
        "download complete"
    );
    Ok(body.to_vec())
}
