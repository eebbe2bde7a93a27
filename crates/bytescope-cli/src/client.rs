//! Blocking HTTP client for the byte API.
//!
//! Used by the watch loop; fetch failures are reported, not retried — the
//! tick that hit them is simply skipped. There is no backoff between ticks,
//! matching the fixed polling cadence.

use serde::Deserialize;
use thiserror::Error;

/// Client-side fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or decode failure.
    #[error("fetch failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with an error body.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// One fetched frame of bytes, as returned by `/api/random`.
#[derive(Debug, Deserialize)]
pub struct RandomFrame {
    pub bytes: Vec<u8>,
    pub count: usize,
    pub source: String,
    pub timestamp: u64,
}

/// Thin wrapper over a blocking reqwest client bound to one server.
pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// GET `/api/random?count=..&source=..`.
    pub fn fetch_random(&self, source: &str, count: usize) -> Result<RandomFrame, FetchError> {
        let url = format!("{}/api/random?count={count}&source={source}", self.base);
        let resp = self.http.get(&url).send()?;
        if !resp.status().is_success() {
            #[derive(Deserialize)]
            struct ErrorBody {
                message: String,
            }
            let status = resp.status().as_u16();
            let message = resp
                .json::<ErrorBody>()
                .map(|b| b.message)
                .unwrap_or_else(|_| "unreadable error body".to_string());
            return Err(FetchError::Server { status, message });
        }
        Ok(resp.json()?)
    }
}
