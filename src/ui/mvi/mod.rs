//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or store completions
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Both state machines in this app, the ingredient list and the request
//! lifecycle, are instances of this pattern. Reducers run only on the
//! UI loop thread; side effects (HTTP calls) happen around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
