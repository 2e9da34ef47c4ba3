//! Request lifecycle feature module.
//!
//! Models the single in-flight slot for add/remove calls against the
//! remote store: loading flag plus the last user-facing error.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading flag and optional error message
//! - `intent.rs` - Send / Response / Error / Clear transitions
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::RequestLifecycleState;
