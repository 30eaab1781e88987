/// Marker trait for user actions: key presses on the keypad, dialog
/// navigation, settings toggles.
pub trait Intent: Send + 'static {}
