//! Character definitions - static catalog data.
//!
//! `CharacterDefinition` holds the immutable properties of a fighter:
//! stats, rarity, role and the ordered list of abilities. Live battle
//! values (current health, Ki, cooldowns) live on `Combatant` instead.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::EffectTag;

/// Unique identifier of a character definition (e.g. `"goku"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Collectible rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

/// Combat role shown on the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Melee,
    Energy,
    Defense,
    Support,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Ability class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Physical,
    Energy,
    Defense,
    Special,
}

impl std::fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AbilityCategory::Physical => "physical",
            AbilityCategory::Energy => "energy",
            AbilityCategory::Defense => "defense",
            AbilityCategory::Special => "special",
        };
        f.write_str(name)
    }
}

/// Base stats. Health and Ki double as battle maximums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: u32,
    pub ki: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// A single ability as authored in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    /// Identifier, unique within its character only.
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: AbilityCategory,
    pub ki_cost: u32,
    /// Turns of unavailability after use.
    pub cooldown: u32,
    /// Authored starting cooldown. Projection ignores it.
    #[serde(default)]
    pub current_cooldown: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    /// Restored to the user, never to the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<u32>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub effects: SmallVec<[EffectTag; 2]>,
}

impl AbilityDefinition {
    /// Create a free, cooldown-less ability of the given category.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: AbilityCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            category,
            ki_cost: 0,
            cooldown: 0,
            current_cooldown: 0,
            damage: None,
            healing: None,
            effects: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_ki_cost(mut self, cost: u32) -> Self {
        self.ki_cost = cost;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = turns;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, amount: u32) -> Self {
        self.damage = Some(amount);
        self
    }

    #[must_use]
    pub fn with_healing(mut self, amount: u32) -> Self {
        self.healing = Some(amount);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, tag: EffectTag) -> Self {
        self.effects.push(tag);
        self
    }
}

/// Static character definition.
///
/// ## Example
///
/// ```
/// use strategy_arena::characters::{
///     AbilityCategory, AbilityDefinition, BaseStats, CharacterDefinition, Rarity, Role,
/// };
///
/// let goku = CharacterDefinition::new("goku", "Goku", Rarity::Legendary, Role::Energy)
///     .with_stats(BaseStats { health: 100, ki: 100, attack: 85, defense: 75, speed: 80 })
///     .with_ability(
///         AbilityDefinition::new("kamehameha", "Kamehameha", AbilityCategory::Energy)
///             .with_ki_cost(30)
///             .with_cooldown(3)
///             .with_damage(35),
///     );
///
/// assert_eq!(goku.abilities.len(), 1);
/// assert!(goku.unlocked);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    pub role: Role,
    /// Gates selection during team assembly.
    pub unlocked: bool,
    pub stats: BaseStats,
    /// Display and use order.
    pub abilities: SmallVec<[AbilityDefinition; 4]>,
}

impl CharacterDefinition {
    /// Create an unlocked character with zeroed stats and no abilities.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity, role: Role) -> Self {
        Self {
            id: CharacterId::new(id),
            name: name.into(),
            image: String::new(),
            description: String::new(),
            rarity,
            role,
            unlocked: true,
            stats: BaseStats::default(),
            abilities: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: AbilityDefinition) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn locked(mut self) -> Self {
        self.unlocked = false;
        self
    }

    /// Find an ability by its identifier.
    #[must_use]
    pub fn ability(&self, id: &str) -> Option<&AbilityDefinition> {
        self.abilities.iter().find(|a| a.id == id)
    }
}
