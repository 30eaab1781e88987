/// Marker trait for renderable state.
///
/// Cloneable so observers can keep snapshots, comparable so unchanged
/// states can be skipped.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
