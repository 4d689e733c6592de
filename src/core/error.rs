//! Error taxonomy.
//!
//! Every failure in this crate is local and recoverable: a rejected
//! action leaves battle state untouched, a rejected toggle leaves the
//! team selection untouched. Battle and team errors are `Clone` so the
//! engine can queue them as events for the presentation layer.

use thiserror::Error;

use crate::characters::CharacterId;

/// Why an ability cannot be used right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unavailable {
    /// Still cooling down for this many turns.
    OnCooldown { remaining: u32 },
    /// Costs more Ki than the actor holds.
    NotEnoughKi { cost: u32, available: u32 },
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unavailable::OnCooldown { remaining } => {
                write!(f, "on cooldown for {} more turn(s)", remaining)
            }
            Unavailable::NotEnoughKi { cost, available } => {
                write!(f, "needs {} ki but only {} available", cost, available)
            }
        }
    }
}

/// Rejections raised by the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("incomplete team: {resolved} of {required} characters available")]
    IncompleteTeam { resolved: usize, required: usize },

    #[error("unknown difficulty {0}, expected 0-3")]
    UnknownDifficulty(u8),

    #[error("illegal action: {0}")]
    IllegalAction(&'static str),

    #[error("no combatant or ability at that position")]
    InvalidSelection,

    #[error("{0} is defeated and cannot act")]
    ActorDefeated(String),

    #[error("invalid target: {0} is already defeated")]
    InvalidTarget(String),

    #[error("{ability} is unavailable: {reason}")]
    AbilityUnavailable { ability: String, reason: Unavailable },
}

/// Rejections raised while assembling a team.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("team is full ({capacity} characters already selected)")]
    TeamFull { capacity: usize },

    #[error("incomplete team: {selected} of {required} characters selected")]
    IncompleteTeam { selected: usize, required: usize },

    #[error("{0} is locked")]
    Locked(CharacterId),

    #[error("{0} appears more than once")]
    Duplicate(CharacterId),
}

/// Failures loading catalog data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(String),

    #[error("character {0} defined twice")]
    DuplicateId(CharacterId),

    #[error("character {0} has no abilities")]
    NoAbilities(CharacterId),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// Failures writing the persisted team.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("team store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode team: {0}")]
    Encode(#[from] serde_json::Error),
}
