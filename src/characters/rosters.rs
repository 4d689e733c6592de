//! Preset opponent rosters, one per difficulty.

use serde::{Deserialize, Serialize};

use super::definition::CharacterId;
use crate::core::{BattleError, TEAM_SIZE};

/// Opponent difficulty. Each level fields a fixed trio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    /// Fields characters that are locked for the player.
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Resolve a difficulty index in `0..=3`.
    pub fn from_index(index: u8) -> Result<Self, BattleError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(BattleError::UnknownDifficulty(index))
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Character IDs of the opponent team, in slot order.
    #[must_use]
    pub fn roster(self) -> [CharacterId; TEAM_SIZE] {
        let ids = match self {
            Difficulty::Beginner => ["piccolo", "krillin", "yamcha"],
            Difficulty::Intermediate => ["vegeta", "gohan", "trunks"],
            Difficulty::Advanced => ["goku", "vegeta", "piccolo"],
            Difficulty::Expert => ["frieza", "cell", "buu"],
        };
        ids.map(CharacterId::new)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
