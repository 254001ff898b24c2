//! Failure causes behind a [`FetchResult::Failed`](crate::FetchResult::Failed).
//!
//! The public fetch operations collapse every variant here into the same
//! failure marker.  The cause is still useful for diagnostics, so the `try_*`
//! methods on [`SentenceFetcher`](crate::SentenceFetcher) hand it back.

/// Why a fetch produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The identifier is not exactly one of the recognised source keys.
    #[error("unknown sentence source: {0:?}")]
    InvalidSource(String),

    /// The request never produced a response body (DNS, connect, TLS, I/O).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a zero-length body.
    #[error("empty response body")]
    EmptyBody,

    /// The body is not valid UTF-8 text.
    #[error("response body is not text")]
    NotText,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_source_message_quotes_the_input() {
        let err = FetchError::InvalidSource("@#$%".into());
        assert_eq!(err.to_string(), "unknown sentence source: \"@#$%\"");
    }

    #[test]
    fn empty_identifier_is_still_visible_in_message() {
        let err = FetchError::InvalidSource(String::new());
        assert_eq!(err.to_string(), "unknown sentence source: \"\"");
    }
}
