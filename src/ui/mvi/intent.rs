//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submit, delete key, modal dismissal)
/// - System events (store completions, query results)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
