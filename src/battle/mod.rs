//! Turn-based battle resolution.
//!
//! - `BattleEngine`: the state machine owning both teams, turn and log
//! - `Team`: one side's live combatants
//! - `ai`: the opponent's move policy
//! - `BattleEvent`: notifications for the presentation layer
//!
//! Resolution is synchronous. The only pause in a battle is the cosmetic
//! delay before the opponent acts, which the engine leaves to the caller
//! when `BattleConfig::immediate_opponent_turn` is off.

pub mod ai;
pub mod engine;
pub mod event;
pub mod log;
pub mod phase;
mod resolve;
pub mod selection;
pub mod team;

pub use ai::OpponentPlan;
pub use engine::{BattleEngine, BattleSnapshot, TurnOutcome};
pub use event::BattleEvent;
pub use log::BattleLog;
pub use phase::{BattlePhase, BattleResult, Side};
pub use selection::PendingSelection;
pub use team::Team;
