//! The single outbound HTTP GET behind every fetch.
//!
//! [`Transport`] is the seam between the fetcher and the network: production
//! code uses [`HttpTransport`], tests substitute a recording fake so they can
//! check exactly which requests were (or were not) issued.

use crate::error::FetchError;

/// Performs one blocking GET and returns the raw body.
///
/// Implementations must not retry, cache, or inspect the status code.  A
/// response of any status hands its body back; only a request that produced
/// no response at all is an error.
pub trait Transport: Send {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`Transport`] over `reqwest`'s blocking client.
///
/// Each call builds a fresh request with no extra headers; there is no
/// connection pool and no timeout beyond the client's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = reqwest::blocking::get(url)?;
        tracing::debug!(url, status = %response.status(), "response received");
        let body = response.bytes()?;
        Ok(body.to_vec())
    }
}

impl<T: Transport + Sync> Transport for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
