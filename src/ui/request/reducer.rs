//! Reducer for the request lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::RequestLifecycleState;

/// Reducer for request lifecycle state transitions.
pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestLifecycleState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A fresh attempt always starts clean.
            RequestIntent::Send => RequestLifecycleState::new(true, None),

            RequestIntent::Response => {
                let (_, error) = state.into_parts();
                RequestLifecycleState::new(false, error)
            }

            RequestIntent::Error { message } => {
                RequestLifecycleState::new(false, Some(message))
            }

            RequestIntent::Clear => {
                let (loading, _) = state.into_parts();
                RequestLifecycleState::new(loading, None)
            }
        }
    }
}
