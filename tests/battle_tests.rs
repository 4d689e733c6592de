//! Battle engine integration tests.
//!
//! These drive full battles through the public API with a small custom
//! catalog, so every number below can be checked by hand.

use std::collections::VecDeque;

use strategy_arena::battle::{BattleEngine, BattleEvent, BattlePhase, BattleResult, Side, TurnOutcome};
use strategy_arena::characters::{
    AbilityCategory, AbilityDefinition, BaseStats, Catalog, CharacterDefinition, Difficulty,
    EffectTag, Rarity, Role,
};
use strategy_arena::core::{BattleConfig, BattleError, RandomSource, Unavailable};
use strategy_arena::team::TeamSelection;

// =============================================================================
// Fixtures
// =============================================================================

/// Replays a fixed list of picks, then always picks 0.
struct Scripted(VecDeque<usize>);

impl Scripted {
    fn new(picks: &[usize]) -> Self {
        Self(picks.iter().copied().collect())
    }
}

impl RandomSource for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        self.0.pop_front().unwrap_or(0).min(len - 1)
    }
}

fn stats(health: u32, ki: u32) -> BaseStats {
    BaseStats { health, ki, attack: 50, defense: 50, speed: 50 }
}

fn fighter(id: &str, name: &str, health: u32, ki: u32) -> CharacterDefinition {
    CharacterDefinition::new(id, name, Rarity::Common, Role::Melee).with_stats(stats(health, ki))
}

/// Player side: hero, sidekick, rookie.
/// Beginner opponents: can never afford their only ability.
/// Intermediate opponents: hit hard every other turn.
fn catalog() -> Catalog {
    let beam = AbilityDefinition::new("beam", "Beam", AbilityCategory::Energy)
        .with_ki_cost(30)
        .with_cooldown(3)
        .with_damage(35);
    let jab = AbilityDefinition::new("jab", "Jab", AbilityCategory::Physical).with_damage(10);
    let mend = AbilityDefinition::new("mend", "Mend", AbilityCategory::Defense)
        .with_ki_cost(10)
        .with_cooldown(2)
        .with_healing(20)
        .with_effect(EffectTag::parse("BUFF_DEF_10"));
    let nova = AbilityDefinition::new("nova", "Nova", AbilityCategory::Special).with_damage(1000);

    let player_kit = |def: CharacterDefinition| {
        def.with_ability(beam.clone())
            .with_ability(jab.clone())
            .with_ability(mend.clone())
            .with_ability(nova.clone())
    };

    let strike = AbilityDefinition::new("strike", "Strike", AbilityCategory::Physical)
        .with_ki_cost(50)
        .with_cooldown(1)
        .with_damage(10);
    let crush = AbilityDefinition::new("crush", "Crush", AbilityCategory::Physical)
        .with_cooldown(1)
        .with_damage(60);
    let guard = AbilityDefinition::new("guard", "Guard", AbilityCategory::Defense).with_healing(5);

    let weak = |def: CharacterDefinition| def.with_ability(strike.clone());
    let strong = |def: CharacterDefinition| def.with_ability(crush.clone()).with_ability(guard.clone());

    Catalog::from_definitions(vec![
        player_kit(fighter("hero", "Hero", 100, 100)),
        player_kit(fighter("sidekick", "Sidekick", 100, 100)),
        player_kit(fighter("rookie", "Rookie", 100, 20)),
        weak(fighter("piccolo", "Piccolo", 100, 40)),
        weak(fighter("krillin", "Krillin", 100, 40)),
        weak(fighter("yamcha", "Yamcha", 100, 40)),
        strong(fighter("vegeta", "Vegeta", 100, 100)),
        strong(fighter("gohan", "Gohan", 100, 100)),
        strong(fighter("trunks", "Trunks", 100, 100)),
    ])
    .unwrap()
}

fn team() -> TeamSelection {
    TeamSelection::new(vec!["hero".into(), "sidekick".into(), "rookie".into()]).unwrap()
}

fn start(config: BattleConfig, difficulty: Difficulty) -> (Catalog, BattleEngine<Scripted>) {
    let catalog = catalog();
    let mut engine = BattleEngine::with_random_source(config, Scripted::new(&[]));
    engine.setup(&catalog, Some(&team()), difficulty).unwrap();
    engine.take_events();
    (catalog, engine)
}

const BEAM: usize = 0;
const JAB: usize = 1;
const MEND: usize = 2;
const NOVA: usize = 3;

// =============================================================================
// Damage, healing and bookkeeping
// =============================================================================

/// Two 35-damage hits on a full 100-health target leave 65, then 30.
#[test]
fn test_damage_sequence() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);

    engine.apply_ability(0, BEAM, 0).unwrap();
    assert_eq!(engine.opponent_team()[0].health(), 65);

    // Beam is cooling down on hero; sidekick has its own
    engine.apply_ability(1, BEAM, 0).unwrap();
    assert_eq!(engine.opponent_team()[0].health(), 30);
}

#[test]
fn test_ki_and_cooldown_bookkeeping() {
    let (_, mut engine) = start(BattleConfig::default().deferred_opponent_turn(), Difficulty::Beginner);

    assert_eq!(engine.apply_ability(0, BEAM, 0), Ok(TurnOutcome::OpponentPending));
    let hero = &engine.player_team()[0];
    assert_eq!(hero.ki(), 70);
    assert_eq!(hero.ability(BEAM).unwrap().current_cooldown, 3);

    // Opponent turn ticks both sides and restores 10 ki
    engine.resolve_opponent_turn().unwrap();
    let hero = &engine.player_team()[0];
    assert_eq!(hero.ki(), 80);
    assert_eq!(hero.ability(BEAM).unwrap().current_cooldown, 2);
    // Already at maximum
    assert_eq!(engine.opponent_team()[0].ki(), 40);
}

#[test]
fn test_healing_applies_to_actor() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);

    // Vegeta crushes hero to 40
    engine.end_turn().unwrap();
    assert_eq!(engine.player_team()[0].health(), 40);

    let before = engine.log().len();
    engine.apply_ability(0, MEND, 2).unwrap();

    let lines: Vec<_> = engine.log().since(before).collect();
    assert_eq!(lines[0], "Hero used Mend and restored 20 health!");
    assert_eq!(lines[1], "Hero's special effects applied (defense +10%)!");
    // Target untouched by healing
    assert_eq!(engine.opponent_team()[2].health(), 100);
}

// =============================================================================
// Rejections
// =============================================================================

/// A 30-ki ability with 20 ki is rejected without touching anything.
#[test]
fn test_unaffordable_ability_rejected() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    let before = engine.snapshot();

    let err = engine.apply_ability(2, BEAM, 0).unwrap_err();
    assert_eq!(
        err,
        BattleError::AbilityUnavailable {
            ability: "Beam".into(),
            reason: Unavailable::NotEnoughKi { cost: 30, available: 20 },
        }
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.take_events(), vec![BattleEvent::Rejected(err)]);
}

#[test]
fn test_ability_on_cooldown_rejected() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    engine.apply_ability(0, BEAM, 0).unwrap();

    let before = engine.snapshot();
    assert_eq!(
        engine.apply_ability(0, BEAM, 0),
        Err(BattleError::AbilityUnavailable {
            ability: "Beam".into(),
            reason: Unavailable::OnCooldown { remaining: 2 },
        })
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_defeated_target_rejected() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    engine.apply_ability(0, NOVA, 0).unwrap();
    assert!(engine.opponent_team()[0].is_defeated());

    let log_len = engine.log().len();
    assert_eq!(
        engine.apply_ability(1, JAB, 0),
        Err(BattleError::InvalidTarget("Piccolo".into()))
    );
    assert_eq!(engine.log().len(), log_len);
    assert!(engine.is_player_turn());
}

#[test]
fn test_out_of_range_indices_rejected() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    assert_eq!(engine.apply_ability(3, JAB, 0), Err(BattleError::InvalidSelection));
    assert_eq!(engine.apply_ability(0, 9, 0), Err(BattleError::InvalidSelection));
    assert_eq!(engine.apply_ability(0, JAB, 3), Err(BattleError::InvalidSelection));
}

#[test]
fn test_actions_before_setup_rejected() {
    let mut engine = BattleEngine::new(BattleConfig::default());
    assert_eq!(
        engine.end_turn(),
        Err(BattleError::IllegalAction("battle not started"))
    );
    assert_eq!(
        engine.apply_ability(0, 0, 0),
        Err(BattleError::IllegalAction("battle not started"))
    );
    assert_eq!(engine.phase(), BattlePhase::NotStarted);
}

// =============================================================================
// Turn flow and opponent
// =============================================================================

/// An opponent with nothing usable skips once and the turn still advances.
#[test]
fn test_opponent_skips_turn() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    let before = engine.log().len();

    assert_eq!(engine.apply_ability(0, BEAM, 0), Ok(TurnOutcome::PlayerTurn));

    let lines: Vec<_> = engine.log().since(before).collect();
    assert_eq!(
        lines,
        vec![
            "Hero used Beam on Piccolo for 35 damage!",
            "Piccolo has no usable abilities and skips the turn.",
            "Your turn!",
        ]
    );
    let skips = engine.log().iter().filter(|l| l.contains("skips the turn")).count();
    assert_eq!(skips, 1);

    // End-of-cycle tick still ran and the turn is back with the player
    let hero = &engine.player_team()[0];
    assert_eq!(hero.ki(), 80);
    assert_eq!(hero.ability(BEAM).unwrap().current_cooldown, 2);
    assert!(engine.is_player_turn());
    assert!(engine.selection().is_empty());
}

#[test]
fn test_end_turn_ticks_and_regenerates() {
    let (_, mut engine) = start(BattleConfig::default().deferred_opponent_turn(), Difficulty::Beginner);

    engine.apply_ability(0, BEAM, 0).unwrap();
    engine.resolve_opponent_turn().unwrap();
    // hero: ki 80, beam cooldown 2

    engine.end_turn().unwrap();
    let hero = &engine.player_team()[0];
    assert_eq!(hero.ki(), 95);
    assert_eq!(hero.ability(BEAM).unwrap().current_cooldown, 1);

    engine.resolve_opponent_turn().unwrap();
    let hero = &engine.player_team()[0];
    assert_eq!(hero.ki(), 100);
    assert_eq!(hero.ability(BEAM).unwrap().current_cooldown, 0);
}

/// The opponent's freshly used ability keeps its full cooldown through
/// its own end-of-turn tick.
#[test]
fn test_opponent_cooldown_not_ticked_same_turn() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);

    engine.end_turn().unwrap();
    let vegeta = &engine.opponent_team()[0];
    assert_eq!(vegeta.ability(0).unwrap().current_cooldown, 1);

    // Crush is cooling down, so Guard is the only choice next time
    engine.end_turn().unwrap();
    let vegeta = &engine.opponent_team()[0];
    assert_eq!(vegeta.ability(0).unwrap().current_cooldown, 0);
    assert!(engine.log().iter().any(|l| l == "Vegeta used Guard and restored 0 health!"));
}

#[test]
fn test_opponent_targets_first_standing() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);

    engine.end_turn().unwrap();
    engine.end_turn().unwrap();
    engine.end_turn().unwrap();
    // Crush, Guard, Crush: hero down, sidekick next
    assert!(engine.player_team()[0].is_defeated());
    assert!(engine.log().iter().any(|l| l == "Hero has been defeated!"));

    engine.end_turn().unwrap();
    engine.end_turn().unwrap();
    assert_eq!(engine.player_team()[1].health(), 40);
}

// =============================================================================
// Conclusion and reset
// =============================================================================

#[test]
fn test_player_victory() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);

    assert_eq!(engine.apply_ability(0, NOVA, 0), Ok(TurnOutcome::PlayerTurn));
    assert_eq!(engine.apply_ability(0, NOVA, 1), Ok(TurnOutcome::PlayerTurn));

    engine.take_events();
    let outcome = engine.apply_ability(0, NOVA, 2).unwrap();
    let result = BattleResult::Winner(Side::Player);
    assert_eq!(outcome, TurnOutcome::Concluded(result));
    assert_eq!(engine.phase(), BattlePhase::Concluded(result));
    assert_eq!(engine.log().last(), Some("Victory! All opponents have been defeated."));

    let events = engine.take_events();
    assert!(events.contains(&BattleEvent::Concluded(result)));
    // No turn handed to the opponent
    assert!(!events.contains(&BattleEvent::TurnChanged(Side::Opponent)));

    // Nothing is processed after conclusion
    let log_len = engine.log().len();
    assert_eq!(engine.end_turn(), Err(BattleError::IllegalAction("battle is over")));
    assert_eq!(engine.apply_ability(1, JAB, 0), Err(BattleError::IllegalAction("battle is over")));
    assert_eq!(engine.log().len(), log_len);
}

#[test]
fn test_opponent_victory() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);

    let mut outcome = TurnOutcome::PlayerTurn;
    for _ in 0..20 {
        outcome = engine.end_turn().unwrap();
        if matches!(outcome, TurnOutcome::Concluded(_)) {
            break;
        }
    }

    assert_eq!(outcome, TurnOutcome::Concluded(BattleResult::Winner(Side::Opponent)));
    assert!(engine.player_team().all_defeated());
    assert_eq!(engine.log().last(), Some("Defeat! Your team has been defeated."));
}

#[test]
fn test_reset_rebuilds_player_team() {
    let (catalog, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);
    engine.end_turn().unwrap();
    assert_eq!(engine.player_team()[0].health(), 40);

    engine.reset(&catalog).unwrap();
    assert_eq!(engine.phase(), BattlePhase::NotStarted);
    assert!(engine.opponent_team().is_empty());
    assert!(engine.log().is_empty());
    assert_eq!(engine.player_team()[0].health(), 100);
    assert!(engine.take_events().contains(&BattleEvent::Reset));

    // Rematch at a different difficulty
    engine.setup(&catalog, Some(&team()), Difficulty::Beginner).unwrap();
    assert!(engine.is_player_turn());
    assert_eq!(engine.opponent_team()[0].name, "Piccolo");
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_selection_composes_into_action() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);

    engine.select_character(0).unwrap();
    engine.select_ability(BEAM).unwrap();
    assert_eq!(engine.selection().ready(), Some((0, BEAM)));

    assert_eq!(engine.select_target(1), Ok(TurnOutcome::PlayerTurn));
    assert_eq!(engine.opponent_team()[1].health(), 65);
    // Cleared when the turn changed
    assert!(engine.selection().is_empty());
}

#[test]
fn test_selection_rejections() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);

    assert_eq!(
        engine.select_ability(0),
        Err(BattleError::IllegalAction("no character selected"))
    );
    assert_eq!(
        engine.select_target(0),
        Err(BattleError::IllegalAction("no ability selected"))
    );

    engine.select_character(2).unwrap();
    assert!(matches!(
        engine.select_ability(BEAM),
        Err(BattleError::AbilityUnavailable { .. })
    ));
    assert_eq!(engine.selection().ability, None);

    // Switching character drops the ability
    engine.select_ability(JAB).unwrap();
    engine.select_character(0).unwrap();
    assert_eq!(engine.selection().ability, None);
}

#[test]
fn test_rejected_target_keeps_selection() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Beginner);
    engine.apply_ability(0, NOVA, 0).unwrap();

    engine.select_character(1).unwrap();
    engine.select_ability(JAB).unwrap();
    assert_eq!(engine.select_target(0), Err(BattleError::InvalidTarget("Piccolo".into())));
    assert_eq!(engine.selection().ready(), Some((1, JAB)));

    engine.select_target(1).unwrap();
    assert_eq!(engine.opponent_team()[1].health(), 90);
}

#[test]
fn test_defeated_character_not_selectable() {
    let (_, mut engine) = start(BattleConfig::default(), Difficulty::Intermediate);
    engine.end_turn().unwrap();
    engine.end_turn().unwrap();
    engine.end_turn().unwrap();
    assert!(engine.player_team()[0].is_defeated());

    assert_eq!(engine.select_character(0), Err(BattleError::ActorDefeated("Hero".into())));
    assert_eq!(engine.apply_ability(0, JAB, 0), Err(BattleError::ActorDefeated("Hero".into())));
    assert_eq!(engine.usable_abilities(Side::Player, 0).len(), 0);
}
