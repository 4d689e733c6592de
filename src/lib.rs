//! # strategy-arena
//!
//! Engine for a 3-vs-3 turn-based character battle game: a static
//! character catalog, team assembly with a persisted team, and the battle
//! state machine with a simple opponent.
//!
//! ## Design Principles
//!
//! 1. **Presentation-agnostic**: no rendering, routing or timers. The
//!    engine is driven by intents and reports back through events.
//!
//! 2. **Explicit inputs**: the player's team is passed to battle setup as
//!    a `TeamSelection`; the opponent's randomness is an injected
//!    `RandomSource`.
//!
//! 3. **Reject, never corrupt**: every operation applies fully or is
//!    refused with a named reason and no state change.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `characters`: definitions, catalog, combatants, difficulty rosters
//! - `team`: team assembly and persistence
//! - `battle`: the battle engine, opponent policy, log and events

pub mod battle;
pub mod characters;
pub mod core;
pub mod team;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, BattleRng, CatalogError, RandomSource, StoreError, TeamError,
    Unavailable,
};

pub use crate::characters::{
    AbilityCategory, AbilityDefinition, AbilityInstance, BaseStats, Catalog, CharacterDefinition,
    CharacterId, Combatant, Difficulty, EffectTag, Rarity, Role,
};

pub use crate::team::{FileTeamStore, MemoryTeamStore, TeamBuilder, TeamSelection, TeamStore, Toggle};

pub use crate::battle::{
    BattleEngine, BattleEvent, BattleLog, BattlePhase, BattleResult, BattleSnapshot, Side, Team,
    TurnOutcome,
};
