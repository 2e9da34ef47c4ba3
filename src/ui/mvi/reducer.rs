//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into the current state, yielding the next one.
///
/// Reducers are the only place state transitions happen, and they must
/// stay pure: the store calls that surround an `Add` or `Delete` are
/// the orchestrator's job, dispatched around the reduction, never from
/// inside it.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply one transition. Pure; no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
