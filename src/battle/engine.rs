//! The battle state machine.
//!
//! `BattleEngine` exclusively owns both teams, the turn, the log and the
//! pending selection for one battle at a time. The presentation layer reads
//! it through queries and `snapshot`, submits intents through the methods
//! below, and drains notifications with `take_events`.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --setup--> InProgress(Player) <--> InProgress(Opponent)
//!                              |                       |
//!                              +------> Concluded <----+
//!                                           |
//! NotStarted <----------reset---------------+
//! ```
//!
//! Every operation either applies fully or is rejected without touching
//! state. Rejections are returned as `BattleError` and also queued as
//! `BattleEvent::Rejected`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ai::{self, OpponentPlan};
use super::event::BattleEvent;
use super::log::{self, BattleLog};
use super::phase::{BattlePhase, BattleResult, Side};
use super::resolve;
use super::selection::PendingSelection;
use super::team::Team;
use crate::characters::{Catalog, Difficulty};
use crate::core::{BattleConfig, BattleError, BattleRng, RandomSource, TEAM_SIZE};
use crate::team::TeamSelection;

/// Where the battle stands after a successful player or opponent step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The opponent acts next; call `resolve_opponent_turn`.
    OpponentPending,
    /// Back to the player.
    PlayerTurn,
    Concluded(BattleResult),
}

/// Serializable view of the whole battle for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: BattlePhase,
    pub player: Team,
    pub opponent: Team,
    pub log: BattleLog,
    pub selection: PendingSelection,
}

/// Turn-based 3-vs-3 battle engine.
///
/// ## Example
///
/// ```
/// use strategy_arena::battle::{BattleEngine, BattlePhase, Side};
/// use strategy_arena::characters::{Catalog, Difficulty};
/// use strategy_arena::core::BattleConfig;
/// use strategy_arena::team::TeamSelection;
///
/// let catalog = Catalog::builtin().unwrap();
/// let team = TeamSelection::new(vec!["goku".into(), "vegeta".into(), "piccolo".into()]).unwrap();
///
/// let mut engine = BattleEngine::new(BattleConfig::default().with_seed(1));
/// engine.setup(&catalog, Some(&team), Difficulty::Beginner).unwrap();
/// assert_eq!(engine.phase(), BattlePhase::InProgress(Side::Player));
///
/// // Goku's Kamehameha on Piccolo; the opponent answers immediately.
/// engine.apply_ability(0, 0, 0).unwrap();
/// assert!(engine.is_player_turn());
/// ```
#[derive(Debug)]
pub struct BattleEngine<R: RandomSource = BattleRng> {
    config: BattleConfig,
    phase: BattlePhase,
    player: Team,
    opponent: Team,
    log: BattleLog,
    selection: PendingSelection,
    events: Vec<BattleEvent>,
    team: Option<TeamSelection>,
    rng: R,
}

impl BattleEngine<BattleRng> {
    /// Create an engine using a `BattleRng` seeded from the config.
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        let rng = BattleRng::new(config.seed);
        Self::with_random_source(config, rng)
    }
}

impl<R: RandomSource> BattleEngine<R> {
    /// Create an engine with an injected random source.
    #[must_use]
    pub fn with_random_source(config: BattleConfig, rng: R) -> Self {
        Self {
            config,
            phase: BattlePhase::NotStarted,
            player: Team::default(),
            opponent: Team::default(),
            log: BattleLog::new(),
            selection: PendingSelection::default(),
            events: Vec::new(),
            team: None,
            rng,
        }
    }

    // === Lifecycle ===

    /// Build both teams and start the battle with the player to act.
    ///
    /// Refused with `IncompleteTeam` when no team is given or it does not
    /// resolve to a full team; the caller should send the user back to
    /// team assembly.
    pub fn setup(
        &mut self,
        catalog: &Catalog,
        selection: Option<&TeamSelection>,
        difficulty: Difficulty,
    ) -> Result<(), BattleError> {
        if self.phase != BattlePhase::NotStarted {
            return self.reject(BattleError::IllegalAction("battle already started"));
        }
        let Some(selection) = selection else {
            return self.reject(BattleError::IncompleteTeam { resolved: 0, required: TEAM_SIZE });
        };

        let teams = Team::resolve(catalog, selection.iter(), TEAM_SIZE)
            .and_then(|player| Ok((player, Team::resolve(catalog, &difficulty.roster(), TEAM_SIZE)?)));
        let (player, opponent) = match teams {
            Ok(teams) => teams,
            Err(err) => return self.reject(err),
        };

        self.player = player;
        self.opponent = opponent;
        self.team = Some(selection.clone());
        self.selection.clear();
        self.log = BattleLog::new();
        // Undrained notifications belong to the previous battle
        self.events.clear();
        self.phase = BattlePhase::InProgress(Side::Player);
        tracing::info!(%difficulty, team = ?selection.ids(), "Battle started");
        self.record(log::battle_started());
        self.events.push(BattleEvent::TurnChanged(Side::Player));
        Ok(())
    }

    /// Return to `NotStarted` for a rematch.
    ///
    /// Discards the opponent team and log and rebuilds the player team
    /// fresh from the team the battle was set up with. The presentation
    /// layer waits `config().conclusion_delay` after conclusion before
    /// calling this.
    pub fn reset(&mut self, catalog: &Catalog) -> Result<(), BattleError> {
        self.phase = BattlePhase::NotStarted;
        self.opponent = Team::default();
        self.log = BattleLog::new();
        self.selection.clear();
        self.events.clear();
        self.events.push(BattleEvent::Reset);

        let rebuilt = match &self.team {
            Some(team) => Team::resolve(catalog, team.iter(), TEAM_SIZE),
            None => Ok(Team::default()),
        };
        tracing::info!("Battle reset");
        match rebuilt {
            Ok(player) => {
                self.player = player;
                Ok(())
            }
            Err(err) => {
                self.player = Team::default();
                self.reject(err)
            }
        }
    }

    // === Player actions ===

    /// Use `ability` of player combatant `actor` on opponent `target`.
    ///
    /// On success the turn passes to the opponent, unless every opponent
    /// is down, in which case the battle concludes immediately.
    pub fn apply_ability(
        &mut self,
        actor: usize,
        ability: usize,
        target: usize,
    ) -> Result<TurnOutcome, BattleError> {
        if let Err(err) = self.check_player_action(actor, ability, target) {
            return self.reject(err);
        }

        let lines = match (self.player.get_mut(actor), self.opponent.get_mut(target)) {
            (Some(user), Some(victim)) => resolve::apply(user, ability, victim),
            _ => return self.reject(BattleError::InvalidSelection),
        };
        for line in lines {
            self.record(line);
        }

        if self.opponent.all_defeated() {
            return Ok(self.conclude(BattleResult::Winner(Side::Player)));
        }
        self.pass_to_opponent()
    }

    /// Pass without acting.
    ///
    /// Every player combatant counts its cooldowns down by one and regains
    /// `end_turn_ki_regen` Ki, then the opponent acts.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, BattleError> {
        if let Err(err) = self.ensure_turn(Side::Player) {
            return self.reject(err);
        }
        self.player.end_of_turn(self.config.end_turn_ki_regen, None);
        self.record(log::turn_ended());
        self.pass_to_opponent()
    }

    // === Selection ===

    /// Select the acting player combatant. Clears any chosen ability.
    pub fn select_character(&mut self, index: usize) -> Result<(), BattleError> {
        let checked = self.ensure_turn(Side::Player).and_then(|()| {
            let member = self.player.get(index).ok_or(BattleError::InvalidSelection)?;
            if member.is_defeated() {
                return Err(BattleError::ActorDefeated(member.name.clone()));
            }
            Ok(())
        });
        if let Err(err) = checked {
            return self.reject(err);
        }
        self.selection.set_character(index);
        tracing::debug!(character = index, "Character selected");
        Ok(())
    }

    /// Select an ability of the selected combatant.
    pub fn select_ability(&mut self, index: usize) -> Result<(), BattleError> {
        let checked = self.ensure_turn(Side::Player).and_then(|()| {
            let character = self
                .selection
                .character
                .ok_or(BattleError::IllegalAction("no character selected"))?;
            let member = self.player.get(character).ok_or(BattleError::InvalidSelection)?;
            let ability = member.ability(index).ok_or(BattleError::InvalidSelection)?;
            ability
                .availability(member.ki())
                .map_err(|reason| BattleError::AbilityUnavailable {
                    ability: ability.name().to_string(),
                    reason,
                })
        });
        if let Err(err) = checked {
            return self.reject(err);
        }
        self.selection.set_ability(index);
        tracing::debug!(ability = index, "Ability selected");
        Ok(())
    }

    /// Choose the target and execute the pending action.
    ///
    /// A rejected target keeps the selection so another target can be
    /// picked.
    pub fn select_target(&mut self, index: usize) -> Result<TurnOutcome, BattleError> {
        if let Err(err) = self.ensure_turn(Side::Player) {
            return self.reject(err);
        }
        let Some((actor, ability)) = self.selection.ready() else {
            return self.reject(BattleError::IllegalAction("no ability selected"));
        };
        self.apply_ability(actor, ability, index)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // === Opponent ===

    /// Run the opponent's turn to completion.
    ///
    /// Called by the engine itself when `immediate_opponent_turn` is set;
    /// otherwise by the caller once the pacing delay has elapsed.
    pub fn resolve_opponent_turn(&mut self) -> Result<TurnOutcome, BattleError> {
        if let Err(err) = self.ensure_turn(Side::Opponent) {
            return self.reject(err);
        }

        let (actor, target, ability) = match ai::plan(&self.opponent, &self.player, &mut self.rng) {
            OpponentPlan::Concluded { winner } => return Ok(self.conclude(BattleResult::Winner(winner))),
            OpponentPlan::Act { actor, target, ability } => (actor, target, ability),
        };

        let mut used = None;
        match ability {
            None => {
                let line = log::skips_turn(&self.opponent[actor].name);
                self.record(line);
            }
            Some(ability) => {
                if let (Some(user), Some(victim)) = (self.opponent.get_mut(actor), self.player.get_mut(target)) {
                    let lines = resolve::apply(user, ability, victim);
                    for line in lines {
                        self.record(line);
                    }
                }
                if self.player.all_defeated() {
                    return Ok(self.conclude(BattleResult::Winner(Side::Opponent)));
                }
                used = Some((actor, ability));
            }
        }

        let regen = self.config.cycle_ki_regen;
        self.opponent.end_of_turn(regen, used);
        self.player.end_of_turn(regen, None);

        self.phase = BattlePhase::InProgress(Side::Player);
        self.events.push(BattleEvent::TurnChanged(Side::Player));
        self.record(log::your_turn());
        Ok(TurnOutcome::PlayerTurn)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase == BattlePhase::InProgress(Side::Player)
    }

    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.phase.result()
    }

    #[must_use]
    pub fn player_team(&self) -> &Team {
        &self.player
    }

    #[must_use]
    pub fn opponent_team(&self) -> &Team {
        &self.opponent
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    #[must_use]
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    #[must_use]
    pub fn selection(&self) -> PendingSelection {
        self.selection
    }

    /// Usable ability indices of one combatant.
    #[must_use]
    pub fn usable_abilities(&self, side: Side, index: usize) -> SmallVec<[usize; 4]> {
        self.team(side)
            .get(index)
            .map(|member| member.usable_abilities())
            .unwrap_or_default()
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            player: self.player.clone(),
            opponent: self.opponent.clone(),
            log: self.log.clone(),
            selection: self.selection,
        }
    }

    // === Internals ===

    fn ensure_turn(&self, side: Side) -> Result<(), BattleError> {
        match self.phase {
            BattlePhase::InProgress(acting) if acting == side => Ok(()),
            BattlePhase::InProgress(_) => Err(BattleError::IllegalAction(match side {
                Side::Player => "not the player's turn",
                Side::Opponent => "not the opponent's turn",
            })),
            BattlePhase::NotStarted => Err(BattleError::IllegalAction("battle not started")),
            BattlePhase::Concluded(_) => Err(BattleError::IllegalAction("battle is over")),
        }
    }

    fn check_player_action(&self, actor: usize, ability: usize, target: usize) -> Result<(), BattleError> {
        self.ensure_turn(Side::Player)?;
        let user = self.player.get(actor).ok_or(BattleError::InvalidSelection)?;
        let victim = self.opponent.get(target).ok_or(BattleError::InvalidSelection)?;
        user.ability(ability).ok_or(BattleError::InvalidSelection)?;
        resolve::check(user, ability, victim)
    }

    fn pass_to_opponent(&mut self) -> Result<TurnOutcome, BattleError> {
        self.selection.clear();
        self.phase = BattlePhase::InProgress(Side::Opponent);
        self.events.push(BattleEvent::TurnChanged(Side::Opponent));
        tracing::debug!("Opponent to act");
        if self.config.immediate_opponent_turn {
            self.resolve_opponent_turn()
        } else {
            Ok(TurnOutcome::OpponentPending)
        }
    }

    fn conclude(&mut self, result: BattleResult) -> TurnOutcome {
        self.selection.clear();
        self.phase = BattlePhase::Concluded(result);
        self.record(log::concluded(result));
        self.events.push(BattleEvent::Concluded(result));
        tracing::info!(winner = %result.winner(), log_lines = self.log.len(), "Battle concluded");
        TurnOutcome::Concluded(result)
    }

    fn record(&mut self, line: String) {
        self.log.push(line.clone());
        self.events.push(BattleEvent::Logged(line));
    }

    fn reject<T>(&mut self, err: BattleError) -> Result<T, BattleError> {
        tracing::warn!(error = %err, phase = ?self.phase, "Action rejected");
        self.events.push(BattleEvent::Rejected(err.clone()));
        Err(err)
    }
}
