/// Marker for values fed into a [`Reducer`](super::Reducer): user actions
/// such as a retry, or system events such as a finished fetch.
///
/// Intents cross task boundaries (a fetch completes on a runtime worker),
/// hence `Send`.
pub trait Intent: Send + 'static {}
