//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing in here knows about specific characters or abilities.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BattleConfig, CYCLE_KI_REGEN, END_TURN_KI_REGEN, TEAM_SIZE};
pub use error::{BattleError, CatalogError, StoreError, TeamError, Unavailable};
pub use rng::{BattleRng, RandomSource};
