/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    PlayerOne,
    PlayerTwo,
}

impl PlayerSlot {
    /// Both slots in seating order.
    pub fn all() -> [PlayerSlot; 2] {
        [Self::PlayerOne, Self::PlayerTwo]
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }

    /// Position in the session's duelist array.
    pub fn index(self) -> usize {
        match self {
            Self::PlayerOne => 0,
            Self::PlayerTwo => 1,
        }
    }

    /// Name given to a fresh duelist in this slot ("Player 1", "Player 2").
    pub fn default_name(self) -> String {
        format!("Player {}", self.index() + 1)
    }
}

/// A tracked player: display name and current life points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duelist {
    pub name: String,
    pub life_points: u32,
}

impl Duelist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            life_points: 0,
        }
    }

    pub fn for_slot(slot: PlayerSlot) -> Self {
        Self::new(slot.default_name())
    }
}
