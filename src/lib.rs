//! Terminal ingredient tracker backed by a remote JSON store.
//!
//! State flows one way: user input becomes intents, pure reducers fold
//! intents into new state, and the render pass draws whatever the state
//! says. Remote store calls run on a worker task and re-enter the same
//! loop as events.

pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
