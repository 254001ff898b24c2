//! daily-sentence — fetch a short placeholder sentence from the web.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────────┐  Source::url()  ┌─────────────┐  GET   ┌──────────────┐
//! │ fetcher.rs   │ ──────────────► │ Transport   │ ─────► │ provider API │
//! │ (predicate)  │ ◄────────────── │ (one call)  │ ◄───── │              │
//! └──────────────┘   raw body      └─────────────┘  body  └──────────────┘
//!        │
//!        ▼ FetchResult::{Text, Failed}
//! ```
//!
//! * **`source/`** — the [`Source`] enumeration, its URL table and the
//!   [`Transport`] seam with its HTTP implementation.
//! * **`fetcher`** — [`SentenceFetcher`]: one GET per call, non-empty text or
//!   failure.
//! * **`outcome`** — [`FetchResult`], the tagged outcome.
//! * **`error`** — [`FetchError`], the cause behind a failure.
//! * **`background`** — [`spawn_fetch`], the same fetch on a worker thread.
//!
//! ```no_run
//! use daily_sentence::{SentenceFetcher, Source};
//!
//! let fetcher = SentenceFetcher::new();
//! if let Some(text) = fetcher.fetch_from_source(Source::ItsThisForThat).text() {
//!     println!("{text}");
//! }
//! ```

pub mod background;
pub mod error;
pub mod fetcher;
pub mod outcome;
pub mod source;

#[cfg(test)]
mod testing;

pub use background::spawn_fetch;
pub use error::FetchError;
pub use fetcher::SentenceFetcher;
pub use outcome::FetchResult;
pub use source::{HttpTransport, Source, Transport};
