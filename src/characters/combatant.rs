//! Combatants - live battle state of a character.
//!
//! A `Combatant` is projected from a `CharacterDefinition` at battle start
//! and owned by the battle engine until the battle ends. Health and Ki
//! are clamped to `[0, max]` by every mutator here; nothing else writes
//! them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{AbilityDefinition, CharacterDefinition, CharacterId};
use crate::core::Unavailable;

/// An ability plus its live cooldown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInstance {
    pub definition: AbilityDefinition,
    pub current_cooldown: u32,
}

impl AbilityInstance {
    /// Wrap a definition with a zero cooldown.
    #[must_use]
    pub fn ready(definition: AbilityDefinition) -> Self {
        Self {
            definition,
            current_cooldown: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Check cooldown, then Ki.
    pub fn availability(&self, ki: u32) -> Result<(), Unavailable> {
        if self.current_cooldown > 0 {
            return Err(Unavailable::OnCooldown {
                remaining: self.current_cooldown,
            });
        }
        if self.definition.ki_cost > ki {
            return Err(Unavailable::NotEnoughKi {
                cost: self.definition.ki_cost,
                available: ki,
            });
        }
        Ok(())
    }

    /// Reset the cooldown to the declared value after use.
    pub fn trigger(&mut self) {
        self.current_cooldown = self.definition.cooldown;
    }

    /// Count down one turn, floored at 0.
    pub fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// Live battle record of one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    health: u32,
    max_health: u32,
    ki: u32,
    max_ki: u32,
    abilities: SmallVec<[AbilityInstance; 4]>,
}

impl Combatant {
    /// Project a catalog entry into a fresh combatant.
    ///
    /// Health and Ki start full and every cooldown starts at 0, whatever
    /// the definition authored.
    #[must_use]
    pub fn from_definition(definition: &CharacterDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            image: definition.image.clone(),
            health: definition.stats.health,
            max_health: definition.stats.health,
            ki: definition.stats.ki,
            max_ki: definition.stats.ki,
            abilities: definition
                .abilities
                .iter()
                .cloned()
                .map(AbilityInstance::ready)
                .collect(),
        }
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn ki(&self) -> u32 {
        self.ki
    }

    #[must_use]
    pub fn max_ki(&self) -> u32 {
        self.max_ki
    }

    #[must_use]
    pub fn abilities(&self) -> &[AbilityInstance] {
        &self.abilities
    }

    #[must_use]
    pub fn ability(&self, index: usize) -> Option<&AbilityInstance> {
        self.abilities.get(index)
    }

    pub(crate) fn ability_mut(&mut self, index: usize) -> Option<&mut AbilityInstance> {
        self.abilities.get_mut(index)
    }

    /// Health has reached 0.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_defeated()
    }

    /// Indices of abilities that are off cooldown and affordable.
    ///
    /// Always empty for a defeated combatant.
    #[must_use]
    pub fn usable_abilities(&self) -> SmallVec<[usize; 4]> {
        if self.is_defeated() {
            return SmallVec::new();
        }
        self.abilities
            .iter()
            .enumerate()
            .filter(|(_, a)| a.availability(self.ki).is_ok())
            .map(|(i, _)| i)
            .collect()
    }

    /// Subtract health, floored at 0. Returns the amount actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    /// Add health, capped at max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// Spend Ki, floored at 0.
    pub fn spend_ki(&mut self, amount: u32) {
        self.ki = self.ki.saturating_sub(amount);
    }

    /// Restore Ki, capped at max.
    pub fn restore_ki(&mut self, amount: u32) {
        self.ki = self.ki.saturating_add(amount).min(self.max_ki);
    }

    /// Count every cooldown down by one turn.
    pub fn tick_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.tick();
        }
    }
}
