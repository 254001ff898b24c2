//! Non-blocking fetches.
//!
//! Runs a single fetch on a dedicated thread and sends the outcome back over
//! an [`mpsc`] channel, so a caller with its own event loop can keep going
//! while the request is in flight.
//!
//! ## For contributors
//!
//! There is exactly one request per spawn: no polling loop, no fan-out, no
//! cancellation.  Dropping the receiver simply discards the outcome.

use std::sync::mpsc;
use std::thread;

use crate::fetcher::SentenceFetcher;
use crate::outcome::FetchResult;
use crate::source::{Source, Transport};

/// Spawn a thread that fetches once from `source`.
///
/// The returned receiver yields exactly one [`FetchResult`].
pub fn spawn_fetch<T>(fetcher: SentenceFetcher<T>, source: Source) -> mpsc::Receiver<FetchResult>
where
    T: Transport + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = fetcher.fetch_from_source(source);
        // If the receiver is gone nobody wants the outcome any more.
        if tx.send(result).is_err() {
            tracing::debug!(%source, "fetch outcome dropped, receiver closed");
        }
    });

    rx
}
