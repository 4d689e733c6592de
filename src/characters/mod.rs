//! Character system: definitions, catalog, combatants.
//!
//! ## Key Types
//!
//! - `CharacterDefinition`: immutable catalog entry (stats, abilities)
//! - `Catalog`: lookup by `CharacterId`, loaded once
//! - `Combatant`: live battle record projected from a definition
//! - `Difficulty`: preset opponent rosters
//! - `EffectTag`: parsed status effect tags

pub mod catalog;
pub mod combatant;
pub mod definition;
pub mod effect;
pub mod rosters;

pub use catalog::Catalog;
pub use combatant::{AbilityInstance, Combatant};
pub use definition::{
    AbilityCategory, AbilityDefinition, BaseStats, CharacterDefinition, CharacterId, Rarity, Role,
};
pub use effect::{EffectTag, Stat};
pub use rosters::Difficulty;
