mod headers;

use crate::types::FetchOutcome;
use headers::default_headers;
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const REDIRECT_LIMIT: usize = 10;

/// One-shot HTTP fetcher. A single client is shared across all concurrent
/// requests so connections get reused.
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new() -> crate::Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> crate::Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .timeout(timeout)
            .default_headers(default_headers())
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Issue one GET against `url` and fold every possible failure mode into
    /// the returned outcome.
    ///
    /// A completed response with status 200 is a `Success`; any other status
    /// is an `HttpError`. A request that does not complete (timeout,
    /// connection, protocol, or body decoding failure) is a `TransportError`
    /// with a human-readable reason. Single attempt, no retries.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return self.transport_error(url, e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return FetchOutcome::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Success {
                url: url.to_string(),
                body,
            },
            Err(e) => self.transport_error(url, e),
        }
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> FetchOutcome {
        let reason = if err.is_timeout() {
            format!("timed out after {:?}", self.timeout)
        } else {
            err.to_string()
        };
        FetchOutcome::TransportError {
            url: url.to_string(),
            reason,
        }
    }
}
