//! Remote ingredient store.
//!
//! The store is an external HTTP JSON endpoint (Firebase-REST shaped):
//! records live under `/ingredients.json`, keyed by server-generated
//! push ids. This module holds the record types, the typed client, and
//! the async worker that bridges orchestrator commands to HTTP calls.

mod client;
mod error;
mod types;
pub mod worker;

pub use client::StoreClient;
pub use error::{StoreError, FAILURE_MESSAGE};
pub use types::{Ingredient, NewIngredient};
