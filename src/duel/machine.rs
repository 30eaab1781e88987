use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::duel::duelist::PlayerSlot;
use crate::duel::intent::{DuelIntent, LifePointChange, Multiplier};
use crate::duel::session::{DuelSession, MAXIMUM_LIFE_POINTS, STARTING_LIFE_POINTS};
use crate::duel::toast::{Toast, ToastKind, ToastSender};

/// Callback invoked with the new session after every change.
pub type DuelObserver = Box<dyn FnMut(&DuelSession) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// Life-point calculator for a two-player duel.
///
/// Every operation runs to completion synchronously. Invalid input (an entry
/// that would overflow, a modification while locked or with nothing entered)
/// is discarded without surfacing an error, so the keypad always stays live.
/// A loss locks the duel until [`reset`](Self::reset).
pub struct DuelStateMachine<R = StdRng> {
    session: DuelSession,
    toasts: ToastSender,
    observers: Vec<DuelObserver>,
    rng: R,
}

impl DuelStateMachine<StdRng> {
    pub fn new(toasts: ToastSender) -> Self {
        Self::with_rng(toasts, StdRng::from_entropy())
    }
}

impl<R: Rng> DuelStateMachine<R> {
    pub fn with_rng(toasts: ToastSender, rng: R) -> Self {
        Self {
            session: DuelSession::default(),
            toasts,
            observers: Vec::new(),
            rng,
        }
    }

    pub fn session(&self) -> &DuelSession {
        &self.session
    }

    /// Register an observer. It is not called for the current state, only
    /// for subsequent changes.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&DuelSession) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn dispatch(&mut self, intent: DuelIntent) {
        match intent {
            DuelIntent::Reset => self.reset(),
            DuelIntent::AppendDigit(digit) => self.append_digit(digit),
            DuelIntent::ApplyMultiplier(multiplier) => self.apply_multiplier(multiplier),
            DuelIntent::ClearPendingEntry => self.clear_pending_entry(),
            DuelIntent::ModifyLifePoints { slot, change } => self.modify_life_points(slot, change),
            DuelIntent::RollDice => {
                self.simulate_dice_roll();
            }
            DuelIntent::FlipCoin => {
                self.simulate_coin_flip();
            }
            DuelIntent::SetSnarkEnabled(enabled) => {
                self.set_snark_enabled(enabled);
            }
            DuelIntent::SetMockEnabled(enabled) => {
                self.set_mock_enabled(enabled);
            }
            DuelIntent::RenameDuelist { slot, name } => self.rename_duelist(slot, &name),
        }
    }

    /// Start a fresh duel: both duelists back to starting life points.
    pub fn reset(&mut self) {
        self.mutate(|session| {
            for slot in PlayerSlot::all() {
                session.duelist_mut(slot).life_points = STARTING_LIFE_POINTS;
            }
            session.pending_entry = 0;
            session.has_shamed_this_duel = false;
            session.is_locked = false;
            session.loser = None;
        });
        tracing::debug!("Duel reset to {} life points", STARTING_LIFE_POINTS);
    }

    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::trace!("Ignoring non-decimal digit {}", digit);
            return;
        }
        let candidate = u64::from(self.session.pending_entry) * 10 + u64::from(digit);
        self.commit_pending_entry(candidate);
    }

    pub fn apply_multiplier(&mut self, multiplier: Multiplier) {
        let candidate = u64::from(self.session.pending_entry) * u64::from(multiplier.factor());
        self.commit_pending_entry(candidate);
    }

    pub fn clear_pending_entry(&mut self) {
        self.mutate(|session| session.pending_entry = 0);
    }

    /// Apply the pending entry to a duelist's life points.
    ///
    /// A result at or below zero clamps to zero and locks the duel. A result
    /// above [`MAXIMUM_LIFE_POINTS`] is rejected outright. The pending entry
    /// is cleared in every case.
    pub fn modify_life_points(&mut self, slot: PlayerSlot, change: LifePointChange) {
        let pending = self.session.pending_entry;
        if pending == 0 || self.session.is_locked {
            tracing::trace!(
                "Life-point change ignored (pending: {}, locked: {})",
                pending,
                self.session.is_locked
            );
            self.clear_pending_entry();
            return;
        }

        let delta = match change {
            LifePointChange::Add => i64::from(pending),
            LifePointChange::Subtract => -i64::from(pending),
        };
        let new_value = i64::from(self.session.duelist(slot).life_points) + delta;

        let mut toast = None;
        self.mutate(|session| {
            if new_value <= 0 {
                session.duelist_mut(slot).life_points = 0;
                session.is_locked = true;
                session.loser = Some(slot);
                if session.mock_enabled {
                    toast = Some(Toast::new(
                        ToastKind::Loss,
                        format!(
                            "Womp, womp! Better luck next time, {}. Congrats {}!",
                            session.duelist(slot).name,
                            session.duelist(slot.opponent()).name
                        ),
                    ));
                }
            } else if new_value > i64::from(MAXIMUM_LIFE_POINTS) {
                tracing::trace!("Rejected life-point change: {} exceeds maximum", new_value);
            } else {
                session.duelist_mut(slot).life_points = new_value as u32;
                toast = shame(session, slot, delta);
            }
            session.pending_entry = 0;
        });

        if self.session.is_locked {
            tracing::debug!("{} lost the duel", self.session.duelist(slot).name);
        }
        if let Some(toast) = toast {
            self.toasts.send(toast);
        }
    }

    /// Roll a six-sided die.
    ///
    /// Returns `None` while the duel is locked: a finished duel accepts
    /// nothing from the keypad but reset, and that includes dice and coin.
    pub fn simulate_dice_roll(&mut self) -> Option<u8> {
        if self.session.is_locked {
            return None;
        }
        let value: u8 = self.rng.gen_range(1..=6);
        self.toasts
            .send(Toast::new(ToastKind::DiceRoll, format!("Dice Roll: {}", value)));
        Some(value)
    }

    /// Flip a coin. Gated on the lock like [`simulate_dice_roll`](Self::simulate_dice_roll).
    pub fn simulate_coin_flip(&mut self) -> Option<CoinFace> {
        if self.session.is_locked {
            return None;
        }
        let face = if self.rng.gen_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        };
        self.toasts
            .send(Toast::new(ToastKind::CoinFlip, format!("Coin Flip: {}", face)));
        Some(face)
    }

    /// Returns true when the flag actually changed.
    pub fn set_snark_enabled(&mut self, enabled: bool) -> bool {
        self.mutate(|session| session.snark_enabled = enabled)
    }

    /// Returns true when the flag actually changed.
    pub fn set_mock_enabled(&mut self, enabled: bool) -> bool {
        self.mutate(|session| session.mock_enabled = enabled)
    }

    /// Blank names are ignored.
    pub fn rename_duelist(&mut self, slot: PlayerSlot, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.mutate(|session| {
            let duelist = session.duelist_mut(slot);
            if duelist.name != name {
                duelist.name = name.to_string();
            }
        });
    }

    fn commit_pending_entry(&mut self, candidate: u64) {
        if self.session.is_locked {
            return;
        }
        match u32::try_from(candidate) {
            Ok(value) if value <= MAXIMUM_LIFE_POINTS => {
                self.mutate(|session| session.pending_entry = value);
            }
            _ => tracing::trace!("Discarded entry {}: exceeds maximum", candidate),
        }
    }

    /// Apply a change and notify observers if the session differs afterwards.
    fn mutate(&mut self, apply: impl FnOnce(&mut DuelSession)) -> bool {
        let before = self.session.clone();
        apply(&mut self.session);
        let changed = self.session != before;
        if changed {
            for observer in &mut self.observers {
                observer(&self.session);
            }
        }
        changed
    }
}

/// At most one ugly (non-multiple-of-100) change per duel earns a toast.
fn shame(session: &mut DuelSession, acting: PlayerSlot, delta: i64) -> Option<Toast> {
    if !session.snark_enabled || session.has_shamed_this_duel || delta % 100 == 0 {
        return None;
    }
    session.has_shamed_this_duel = true;
    let message = if delta > 0 {
        format!(
            "You recovered an ugly amount of life points. For shame, {}...",
            session.duelist(acting).name
        )
    } else {
        format!(
            "You dealt an ugly amount of damage. Dick move, {}!",
            session.duelist(acting.opponent()).name
        )
    };
    Some(Toast::new(ToastKind::Shame, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::toast::{toast_channel, ToastReceiver};
    use rand_chacha::ChaCha8Rng;

    fn machine() -> (DuelStateMachine<ChaCha8Rng>, ToastReceiver) {
        let (tx, rx) = toast_channel();
        let mut machine = DuelStateMachine::with_rng(tx, ChaCha8Rng::seed_from_u64(7));
        machine.reset();
        (machine, rx)
    }

    #[test]
    fn fresh_machine_starts_unlocked_with_no_life_points() {
        let (tx, _rx) = toast_channel();
        let machine = DuelStateMachine::with_rng(tx, ChaCha8Rng::seed_from_u64(0));
        assert!(!machine.session().is_locked);
        assert_eq!(machine.session().duelist(PlayerSlot::PlayerOne).life_points, 0);
        assert_eq!(machine.session().duelist(PlayerSlot::PlayerOne).name, "Player 1");
    }

    #[test]
    fn non_decimal_digit_is_discarded() {
        let (mut machine, _rx) = machine();
        machine.append_digit(4);
        machine.append_digit(12);
        assert_eq!(machine.session().pending_entry, 4);
    }

    #[test]
    fn loss_is_reported_by_loser() {
        let (mut machine, _rx) = machine();
        machine.append_digit(9);
        machine.apply_multiplier(Multiplier::Thousand);
        machine.modify_life_points(PlayerSlot::PlayerTwo, LifePointChange::Subtract);
        assert_eq!(machine.session().loser(), Some(PlayerSlot::PlayerTwo));
    }

    #[test]
    fn first_loss_on_fresh_machine_names_the_right_loser() {
        let (tx, _rx) = toast_channel();
        let mut machine = DuelStateMachine::with_rng(tx, ChaCha8Rng::seed_from_u64(3));
        machine.append_digit(5);
        machine.modify_life_points(PlayerSlot::PlayerTwo, LifePointChange::Subtract);
        assert!(machine.session().is_locked);
        assert_eq!(machine.session().loser(), Some(PlayerSlot::PlayerTwo));

        machine.reset();
        assert_eq!(machine.session().loser(), None);
    }

    #[test]
    fn shame_skipped_for_round_deltas() {
        let mut session = DuelSession::default();
        session.snark_enabled = true;
        assert!(shame(&mut session, PlayerSlot::PlayerOne, -300).is_none());
        assert!(!session.has_shamed_this_duel);
        assert!(shame(&mut session, PlayerSlot::PlayerOne, -301).is_some());
        assert!(session.has_shamed_this_duel);
    }

    #[test]
    fn rename_trims_and_ignores_blank_names() {
        let (mut machine, _rx) = machine();
        machine.rename_duelist(PlayerSlot::PlayerOne, "  Yugi  ");
        machine.rename_duelist(PlayerSlot::PlayerOne, "   ");
        assert_eq!(machine.session().duelist(PlayerSlot::PlayerOne).name, "Yugi");
    }
}
