//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Pure dialogs (settings) implement [`Reducer`] directly. The duel itself
//! is driven through `DuelStateMachine::dispatch`, because dice and coin
//! actions draw randomness and emit toasts.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
