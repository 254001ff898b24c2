//! Test doubles shared by the unit tests.

use std::sync::Mutex;

use crate::error::FetchError;
use crate::source::Transport;

/// A [`Transport`] that replays one canned reply and records every URL it
/// was asked for.
pub struct RecordingTransport {
    reply: Result<Vec<u8>, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn replying(body: &str) -> Self {
        Self::replying_bytes(body.as_bytes().to_vec())
    }

    pub fn replying_bytes(body: Vec<u8>) -> Self {
        Self {
            reply: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(FetchError::Transport(reason.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.reply.clone()
    }
}
