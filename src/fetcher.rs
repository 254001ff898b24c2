//! The sentence fetcher.
//!
//! One call, one GET, one outcome.  Nothing carries over between calls: no
//! cache, no retry, no shared mutable state.

use crate::error::FetchError;
use crate::outcome::FetchResult;
use crate::source::{HttpTransport, Source, Transport};

/// Fetches placeholder sentences from the upstream providers.
///
/// The contract methods ([`fetch`](Self::fetch),
/// [`fetch_from_source`](Self::fetch_from_source),
/// [`fetch_from_name`](Self::fetch_from_name)) return a [`FetchResult`] in
/// which every failure looks the same.  The `try_*` twins apply the same
/// success rule but report the [`FetchError`] cause.
#[derive(Debug, Clone, Default)]
pub struct SentenceFetcher<T = HttpTransport> {
    transport: T,
}

impl SentenceFetcher<HttpTransport> {
    /// A fetcher that talks to the real providers over HTTP.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl<T: Transport> SentenceFetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch from the default provider (metaphorpsum.com).
    pub fn fetch(&self) -> FetchResult {
        self.try_fetch().into()
    }

    /// Fetch from an explicitly chosen provider.
    pub fn fetch_from_source(&self, source: Source) -> FetchResult {
        self.try_fetch_from_source(source).into()
    }

    /// Fetch from a provider named by an untyped identifier.
    ///
    /// Anything other than an exact provider key fails without touching the
    /// network.
    pub fn fetch_from_name(&self, name: &str) -> FetchResult {
        self.try_fetch_from_name(name).into()
    }

    pub fn try_fetch(&self) -> Result<String, FetchError> {
        self.try_fetch_from_source(Source::default())
    }

    pub fn try_fetch_from_name(&self, name: &str) -> Result<String, FetchError> {
        let source: Source = name.parse()?;
        self.try_fetch_from_source(source)
    }

    pub fn try_fetch_from_source(&self, source: Source) -> Result<String, FetchError> {
        let url = source.url();
        tracing::debug!(%source, url, "fetching sentence");
        let body = self.transport.get(url)?;
        let text = accept_body(body)?;
        tracing::debug!(%source, bytes = text.len(), "sentence fetched");
        Ok(text)
    }
}

/// The success rule: the body must be UTF-8 and non-empty.  Content is not
/// otherwise inspected, so whitespace-only text counts as a sentence.
fn accept_body(body: Vec<u8>) -> Result<String, FetchError> {
    let text = String::from_utf8(body).map_err(|_| FetchError::NotText)?;
    if text.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
