use crate::duel::duelist::{Duelist, PlayerSlot};

/// Life points each duelist starts a duel with.
pub const STARTING_LIFE_POINTS: u32 = 8000;

/// Upper bound for both life points and the pending entry.
pub const MAXIMUM_LIFE_POINTS: u32 = 80000;

/// Aggregate duel state, handed read-only to observers after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelSession {
    duelists: [Duelist; 2],
    /// Calculator value built from digit and multiplier presses.
    pub pending_entry: u32,
    /// Set on a loss; cleared only by reset.
    pub is_locked: bool,
    /// Set together with `is_locked`.
    pub(crate) loser: Option<PlayerSlot>,
    pub has_shamed_this_duel: bool,
    pub snark_enabled: bool,
    pub mock_enabled: bool,
}

impl Default for DuelSession {
    fn default() -> Self {
        Self {
            duelists: PlayerSlot::all().map(Duelist::for_slot),
            pending_entry: 0,
            is_locked: false,
            loser: None,
            has_shamed_this_duel: false,
            snark_enabled: false,
            mock_enabled: false,
        }
    }
}

impl DuelSession {
    pub fn duelist(&self, slot: PlayerSlot) -> &Duelist {
        &self.duelists[slot.index()]
    }

    pub(crate) fn duelist_mut(&mut self, slot: PlayerSlot) -> &mut Duelist {
        &mut self.duelists[slot.index()]
    }

    pub fn duelists(&self) -> &[Duelist; 2] {
        &self.duelists
    }

    /// Slot whose life points hit zero, if the duel is over.
    pub fn loser(&self) -> Option<PlayerSlot> {
        self.loser
    }
}
