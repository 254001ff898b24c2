//! Upstream sentence providers.
//!
//! This module defines the [`Source`] enumeration and its fixed URL table.
//! The HTTP plumbing lives in [`transport`].
//!
//! ## For contributors — adding a new provider
//!
//! 1. Add a variant to [`Source`] and list it in [`Source::ALL`].
//! 2. Give it a key in [`Source::key`] and a URL in [`Source::url`].
//! 3. Add the key to the [`FromStr`] match so the CLI accepts it.
//!
//! The fetcher and the CLI are provider-agnostic; nothing else changes.

pub mod transport;

pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

/// Which placeholder-text provider to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Source {
    /// metaphorpsum.com, three sentences per request.
    #[default]
    MetaphorPsum,
    /// itsthisforthat.com, one startup pitch per request.
    ItsThisForThat,
}

impl Source {
    /// Every recognised provider, default first.
    pub const ALL: [Source; 2] = [Source::MetaphorPsum, Source::ItsThisForThat];

    /// The identifier callers use to select this provider.
    pub fn key(self) -> &'static str {
        match self {
            Source::MetaphorPsum => "metaphorpsum",
            Source::ItsThisForThat => "itsthisforthat",
        }
    }

    /// The fixed endpoint queried for this provider.
    pub fn url(self) -> &'static str {
        match self {
            Source::MetaphorPsum => "http://metaphorpsum.com/sentences/3",
            Source::ItsThisForThat => "https://itsthisforthat.com/api.php?text",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Source {
    type Err = FetchError;

    /// Exact, case-sensitive match on the key.  No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metaphorpsum" => Ok(Source::MetaphorPsum),
            "itsthisforthat" => Ok(Source::ItsThisForThat),
            other => Err(FetchError::InvalidSource(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
