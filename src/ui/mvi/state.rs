//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value is a complete snapshot: everything the render pass
/// needs, nothing that has to be recomputed. `Default` gives the
/// initial state (empty list, idle request slot); `PartialEq` lets
/// callers detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
