//! State for the request lifecycle.

use crate::ui::mvi::UiState;

/// Single-slot, non-queued request lifecycle.
///
/// Tracks whether a request is in flight and the last error to show.
/// The slot carries no request identity; when requests overlap, the
/// fields reflect only the most recently applied transition. The
/// orchestrator's token guard decides which completion may apply one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestLifecycleState {
    loading: bool,
    error: Option<String>,
}

impl UiState for RequestLifecycleState {}

impl RequestLifecycleState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error to show, if any. `Send` clears it, so by construction
    /// an error is only ever visible while nothing is loading.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub(super) fn new(loading: bool, error: Option<String>) -> Self {
        Self { loading, error }
    }

    pub(super) fn into_parts(self) -> (bool, Option<String>) {
        (self.loading, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = RequestLifecycleState::default();
        assert!(!state.is_loading());
        assert!(!state.has_error());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn error_accessors() {
        let state = RequestLifecycleState::new(false, Some("boom".into()));
        assert!(state.has_error());
        assert_eq!(state.error(), Some("boom"));
    }
}
