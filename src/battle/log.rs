//! Battle log.
//!
//! The log is an append-only list of human-readable lines. It is backed by
//! `im::Vector` so snapshots handed to the presentation layer clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::{BattleResult, Side};
use crate::characters::EffectTag;

/// Append-only battle log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    lines: Vector<String>,
}

impl BattleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Lines appended after the first `from`.
    pub fn since(&self, from: usize) -> impl Iterator<Item = &str> {
        self.lines.iter().skip(from).map(String::as_str)
    }
}

// Line templates.

pub(crate) fn battle_started() -> String {
    "Battle started!".to_string()
}

pub(crate) fn damage_dealt(actor: &str, ability: &str, target: &str, damage: u32) -> String {
    format!("{} used {} on {} for {} damage!", actor, ability, target, damage)
}

pub(crate) fn defeated(name: &str) -> String {
    format!("{} has been defeated!", name)
}

pub(crate) fn healed(actor: &str, ability: &str, amount: u32) -> String {
    format!("{} used {} and restored {} health!", actor, ability, amount)
}

pub(crate) fn effects_applied(actor: &str, effects: &[EffectTag]) -> String {
    let described: Vec<String> = effects.iter().map(EffectTag::describe).collect();
    format!("{}'s special effects applied ({})!", actor, described.join(", "))
}

pub(crate) fn turn_ended() -> String {
    "You ended your turn.".to_string()
}

pub(crate) fn skips_turn(actor: &str) -> String {
    format!("{} has no usable abilities and skips the turn.", actor)
}

pub(crate) fn your_turn() -> String {
    "Your turn!".to_string()
}

pub(crate) fn concluded(result: BattleResult) -> String {
    match result.winner() {
        Side::Player => "Victory! All opponents have been defeated.".to_string(),
        Side::Opponent => "Defeat! Your team has been defeated.".to_string(),
    }
}
