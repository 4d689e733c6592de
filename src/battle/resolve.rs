//! Ability resolution shared by both sides.
//!
//! `check` validates an action without touching anything; `apply` then
//! performs damage, healing, effects, Ki payment and cooldown reset, in
//! that order, and returns the log lines it produced.

use smallvec::SmallVec;

use super::log;
use crate::characters::Combatant;
use crate::core::BattleError;

/// Log lines produced by one ability use.
pub(crate) type Lines = SmallVec<[String; 4]>;

/// Validate `actor` using ability `ability` on `target`.
pub(crate) fn check(actor: &Combatant, ability: usize, target: &Combatant) -> Result<(), BattleError> {
    if actor.is_defeated() {
        return Err(BattleError::ActorDefeated(actor.name.clone()));
    }
    if target.is_defeated() {
        return Err(BattleError::InvalidTarget(target.name.clone()));
    }
    let instance = actor.ability(ability).ok_or(BattleError::InvalidSelection)?;
    instance
        .availability(actor.ki())
        .map_err(|reason| BattleError::AbilityUnavailable {
            ability: instance.name().to_string(),
            reason,
        })
}

/// Apply a checked ability. Call `check` first.
pub(crate) fn apply(actor: &mut Combatant, ability: usize, target: &mut Combatant) -> Lines {
    let mut lines = Lines::new();
    let Some(instance) = actor.ability(ability) else {
        return lines;
    };
    let definition = instance.definition.clone();

    if let Some(damage) = definition.damage {
        let dealt = target.take_damage(damage);
        tracing::debug!(
            actor = %actor.name,
            ability = %definition.name,
            target = %target.name,
            damage = dealt,
            remaining = target.health(),
            "Ability hit"
        );
        lines.push(log::damage_dealt(&actor.name, &definition.name, &target.name, dealt));
        if target.is_defeated() {
            lines.push(log::defeated(&target.name));
        }
    }

    if let Some(healing) = definition.healing {
        let restored = actor.heal(healing);
        tracing::debug!(actor = %actor.name, restored, "Ability healed");
        lines.push(log::healed(&actor.name, &definition.name, restored));
    }

    if !definition.effects.is_empty() {
        lines.push(log::effects_applied(&actor.name, &definition.effects));
    }

    actor.spend_ki(definition.ki_cost);
    if let Some(instance) = actor.ability_mut(ability) {
        instance.trigger();
    }

    lines
}
