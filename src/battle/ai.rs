//! Opponent turn policy.
//!
//! Deterministic apart from the ability pick: the first standing opponent
//! acts against the first standing player combatant, using an ability
//! chosen uniformly from those it can currently afford and has off
//! cooldown.

use super::phase::Side;
use super::team::Team;
use crate::characters::Combatant;
use crate::core::RandomSource;

/// What the opponent will do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpponentPlan {
    /// One side has nobody standing; the battle is over.
    Concluded { winner: Side },
    /// `ability` is `None` when nothing is usable and the turn is skipped.
    Act {
        actor: usize,
        target: usize,
        ability: Option<usize>,
    },
}

/// Decide the opponent's move.
pub fn plan(opponents: &Team, players: &Team, rng: &mut impl RandomSource) -> OpponentPlan {
    let Some(actor) = opponents.first_active() else {
        return OpponentPlan::Concluded { winner: Side::Player };
    };
    let Some(target) = players.first_active() else {
        return OpponentPlan::Concluded { winner: Side::Opponent };
    };
    let ability = choose_ability(&opponents[actor], rng);
    OpponentPlan::Act { actor, target, ability }
}

/// Pick uniformly among usable abilities.
pub fn choose_ability(actor: &Combatant, rng: &mut impl RandomSource) -> Option<usize> {
    let usable = actor.usable_abilities();
    if usable.is_empty() {
        return None;
    }
    Some(usable[rng.pick(usable.len())])
}
