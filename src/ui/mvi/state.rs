/// Marker for renderable state.
///
/// States are replaced wholesale on every transition and handed to
/// observers by value, so they must be cheap to clone, comparable for
/// change detection, and have a well-defined starting point.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
