use crate::duel::duelist::PlayerSlot;

/// Keypad multiplier buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    Ten,
    Hundred,
    Thousand,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Hundred => 100,
            Self::Thousand => 1000,
        }
    }
}

/// Direction of a life-point change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifePointChange {
    Add,
    Subtract,
}

/// Every discrete action a player can take during a duel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelIntent {
    Reset,
    AppendDigit(u8),
    ApplyMultiplier(Multiplier),
    ClearPendingEntry,
    ModifyLifePoints {
        slot: PlayerSlot,
        change: LifePointChange,
    },
    RollDice,
    FlipCoin,
    SetSnarkEnabled(bool),
    SetMockEnabled(bool),
    RenameDuelist {
        slot: PlayerSlot,
        name: String,
    },
}
