//! Battle lifecycle: sides, phases and results.

use serde::{Deserialize, Serialize};

/// One of the two teams in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    #[must_use]
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}

/// Result of a concluded battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    /// Every member of the other side was defeated.
    Winner(Side),
}

impl BattleResult {
    #[must_use]
    pub fn winner(self) -> Side {
        match self {
            BattleResult::Winner(side) => side,
        }
    }

    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == side
    }
}

/// Where the battle is in its lifecycle.
///
/// `NotStarted → InProgress(side) → Concluded(result)`, and back to
/// `NotStarted` on reset. `InProgress` carries whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    NotStarted,
    InProgress(Side),
    Concluded(BattleResult),
}

impl BattlePhase {
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, BattlePhase::InProgress(_))
    }

    /// Side to act, if the battle is running.
    #[must_use]
    pub fn acting(self) -> Option<Side> {
        match self {
            BattlePhase::InProgress(side) => Some(side),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(self) -> Option<BattleResult> {
        match self {
            BattlePhase::Concluded(result) => Some(result),
            _ => None,
        }
    }
}
