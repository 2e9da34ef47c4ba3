//! Error types for remote store operations.

use thiserror::Error;

/// The one user-facing failure message. The UI never distinguishes
/// failure kinds; the specifics stay in the logs.
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Errors from the remote ingredient store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connect, DNS, TLS, client timeout).
    #[error("request to store failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("store returned HTTP {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape.
    #[error("malformed store response: {detail}")]
    MalformedResponse { detail: String },
}

impl StoreError {
    /// The message shown to the user, regardless of what actually failed.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}
