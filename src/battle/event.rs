//! Notifications from the engine to the presentation layer.
//!
//! The engine queues events as it mutates state; the presentation layer
//! drains them with `BattleEngine::take_events` after each call and
//! re-renders.

use super::phase::{BattleResult, Side};
use crate::core::BattleError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// A line was appended to the battle log.
    Logged(String),
    /// The acting side changed.
    TurnChanged(Side),
    /// The battle ended.
    Concluded(BattleResult),
    /// An action was refused; nothing changed.
    Rejected(BattleError),
    /// The engine went back to `NotStarted`.
    Reset,
}

impl BattleEvent {
    /// The log line, for `Logged` events.
    #[must_use]
    pub fn as_log(&self) -> Option<&str> {
        match self {
            BattleEvent::Logged(line) => Some(line),
            _ => None,
        }
    }
}
