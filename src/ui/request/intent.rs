//! Intents for the request lifecycle.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the request lifecycle reducer.
#[derive(Debug, Clone)]
pub enum RequestIntent {
    /// A request is going out. Clears any stale error first.
    Send,

    /// The request completed. Leaves any error untouched.
    Response,

    /// The request failed with a user-facing message.
    Error { message: String },

    /// User dismissed the error view.
    Clear,
}

impl Intent for RequestIntent {}
