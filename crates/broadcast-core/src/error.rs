//! Error handling for the broadcaster
//!
//! Publishing to an unknown topic and removing an unknown subscription are
//! not errors. The only failure surfaced by the broadcaster is a listener
//! returning an error during dispatch, which aborts the remaining deliveries
//! of that publish.

use thiserror::Error;

/// Broadcaster error type
#[derive(Error, Debug)]
pub enum BroadcastError {
    /// A listener failed while a topic was being dispatched
    #[error("Listener for topic '{topic}' failed: {source}")]
    Listener {
        /// The bare topic being dispatched when the listener failed.
        topic: String,
        /// The error returned by the listener.
        #[source]
        source: anyhow::Error,
    },
}

impl BroadcastError {
    /// Topic whose dispatch was aborted.
    pub fn topic(&self) -> &str {
        match self {
            Self::Listener { topic, .. } => topic,
        }
    }
}

/// Result type alias for broadcaster operations
pub type Result<T> = std::result::Result<T, BroadcastError>;
