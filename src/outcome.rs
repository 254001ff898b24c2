//! The tagged result every public fetch operation returns.

use crate::error::FetchError;

/// Outcome of a single fetch.
///
/// `Text` always carries a non-empty string.  Every failure, whatever its
/// cause, is the same `Failed` value; callers that need the cause use the
/// `try_*` methods on [`SentenceFetcher`](crate::SentenceFetcher) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The provider returned non-empty text.
    Text(String),
    /// No usable text was obtained.
    Failed,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Text(_))
    }

    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the sentence, if there is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            FetchResult::Text(t) => Some(t),
            FetchResult::Failed => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            FetchResult::Text(t) => Some(t),
            FetchResult::Failed => None,
        }
    }
}

impl From<Result<String, FetchError>> for FetchResult {
    fn from(result: Result<String, FetchError>) -> Self {
        match result {
            // The fetcher only yields non-empty text on Ok, but an empty
            // string must never surface as success.
            Ok(text) if !text.is_empty() => FetchResult::Text(text),
            Ok(_) => FetchResult::from(Err::<String, _>(FetchError::EmptyBody)),
            Err(e) => {
                tracing::debug!(error = %e, "fetch collapsed to failure");
                FetchResult::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_collapses_to_the_same_marker() {
        let causes = [
            FetchError::InvalidSource("nope".into()),
            FetchError::Transport("connection refused".into()),
            FetchError::EmptyBody,
            FetchError::NotText,
        ];
        for cause in causes {
            assert_eq!(FetchResult::from(Err::<String, _>(cause)), FetchResult::Failed);
        }
    }

    #[test]
    fn empty_ok_is_not_success() {
        let result = FetchResult::from(Ok::<_, FetchError>(String::new()));
        assert!(result.is_failed());
        assert_eq!(result.text(), None);
    }

    #[test]
    fn text_accessors() {
        let result = FetchResult::from(Ok::<_, FetchError>("A sentence.".to_string()));
        assert!(result.is_success());
        assert_eq!(result.text(), Some("A sentence."));
        assert_eq!(result.into_option().as_deref(), Some("A sentence."));
    }
}
