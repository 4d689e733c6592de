//! Battle configuration.
//!
//! `BattleConfig` collects the tunables of a battle: Ki regeneration
//! amounts, presentation pacing and the RNG seed. Team size is a rule of
//! the game, not a tunable, and stays fixed at [`TEAM_SIZE`]. Everything
//! has a default matching the standard ruleset, and each field has a
//! `with_*` builder.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Members per side. Team selection, rosters and setup all require exactly this many.
pub const TEAM_SIZE: usize = 3;

/// Ki restored to every player combatant when the player passes.
pub const END_TURN_KI_REGEN: u32 = 15;

/// Ki restored to every combatant at the end of the opponent's turn.
pub const CYCLE_KI_REGEN: u32 = 10;

/// Complete battle configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use strategy_arena::core::BattleConfig;
///
/// let config = BattleConfig::default()
///     .with_seed(7)
///     .with_opponent_turn_delay(Duration::ZERO);
///
/// assert_eq!(config.end_turn_ki_regen, 15);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Ki restored to the player's team by an explicit end turn.
    pub end_turn_ki_regen: u32,

    /// Ki restored to both teams after the opponent acts.
    pub cycle_ki_regen: u32,

    /// Cosmetic pause before the opponent acts (presentation only).
    pub opponent_turn_delay: Duration,

    /// Pause between conclusion and reset (presentation only).
    pub conclusion_delay: Duration,

    /// Resolve the opponent's turn inside the player's action.
    ///
    /// When false the engine stops in the opponent's turn and the caller
    /// invokes `resolve_opponent_turn` after `opponent_turn_delay`.
    pub immediate_opponent_turn: bool,

    /// Seed for the default random source.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            end_turn_ki_regen: END_TURN_KI_REGEN,
            cycle_ki_regen: CYCLE_KI_REGEN,
            opponent_turn_delay: Duration::from_millis(1000),
            conclusion_delay: Duration::from_millis(3000),
            immediate_opponent_turn: true,
            seed: 0,
        }
    }
}

impl BattleConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_end_turn_ki_regen(mut self, amount: u32) -> Self {
        self.end_turn_ki_regen = amount;
        self
    }

    #[must_use]
    pub fn with_cycle_ki_regen(mut self, amount: u32) -> Self {
        self.cycle_ki_regen = amount;
        self
    }

    #[must_use]
    pub fn with_opponent_turn_delay(mut self, delay: Duration) -> Self {
        self.opponent_turn_delay = delay;
        self
    }

    #[must_use]
    pub fn with_conclusion_delay(mut self, delay: Duration) -> Self {
        self.conclusion_delay = delay;
        self
    }

    /// Leave the opponent's turn to the caller.
    #[must_use]
    pub fn deferred_opponent_turn(mut self) -> Self {
        self.immediate_opponent_turn = false;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
