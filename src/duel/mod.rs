//! Duel life-point tracking.
//!
//! ```text
//! DuelIntent ──→ DuelStateMachine ──→ DuelSession ──→ observers
//!                        │
//!                        └──→ ToastSender ──→ ToastReceiver
//! ```

mod duelist;
mod intent;
mod machine;
mod session;
mod toast;

pub use duelist::{Duelist, PlayerSlot};
pub use intent::{DuelIntent, LifePointChange, Multiplier};
pub use machine::{CoinFace, DuelObserver, DuelStateMachine};
pub use session::{DuelSession, MAXIMUM_LIFE_POINTS, STARTING_LIFE_POINTS};
pub use toast::{toast_channel, Toast, ToastKind, ToastReceiver, ToastSender};
