use holdem_engine::table::{Action, Phase, SeatStatus};
use holdem_engine::{EngineError, TableConfig};
use holdem_engine::Engine;

fn three_handed() -> TableConfig {
    TableConfig { num_seats: 3, initial_stacks: vec![1000, 1000, 1000], small_blind: 50, big_blind: 100, shuffle_seed: 11 }
}

/// Scenario A: everyone but the big blind folds preflop; the big blind wins the blinds
/// uncontested. Stack deltas must sum to zero and the pot is exactly SB + BB.
#[test]
fn walkover_awards_the_blinds_to_the_last_seat_standing() {
    let mut engine = Engine::new();
    let id = engine.create_game(three_handed()).unwrap();
    let before = engine.start_hand(id).unwrap();
    let starting_total: i64 = before.seats.iter().map(|s| s.balance).sum();

    let first = before.active_seat.unwrap();
    let snap = engine.apply_action(id, first, Action::Fold).unwrap();
    let second = snap.active_seat.unwrap();
    let after = engine.apply_action(id, second, Action::Fold).unwrap();

    assert_eq!(after.phase, Phase::Finished);
    let ending_total: i64 = after.seats.iter().map(|s| s.balance).sum();
    assert_eq!(starting_total, ending_total, "chip conservation must hold across a walkover");
    assert_eq!(after.last_result.len(), 1);
    assert_eq!(after.last_result[0].amount, 150);
}

/// Scenario B: every seat calls to the big blind preflop, then checks through every remaining
/// street. Conservation must hold and exactly one hand result is produced at showdown.
#[test]
fn flat_call_all_the_way_reaches_showdown_with_conservation_intact() {
    let mut engine = Engine::new();
    let id = engine.create_game(three_handed()).unwrap();
    let snapshot = engine.start_hand(id).unwrap();
    let starting_total: i64 = snapshot.seats.iter().map(|s| s.balance).sum();

    // preflop: UTG calls, SB calls, BB checks
    let mut current = snapshot;
    loop {
        if current.phase == Phase::Finished {
            break;
        }
        let seat = current.active_seat.expect("a betting phase always has an active seat");
        let permissible = engine.query_permissible_actions(id, seat).unwrap();
        let action = if permissible.check { Action::Check } else { Action::Call };
        current = engine.apply_action(id, seat, action).unwrap();
    }

    assert_eq!(current.phase, Phase::Finished);
    let ending_total: i64 = current.seats.iter().map(|s| s.balance).sum();
    assert_eq!(starting_total, ending_total);
    assert_eq!(current.last_result.iter().map(|r| r.amount).sum::<i64>(), 300);
}

/// Scenario F: a seat that ends a hand with a zero balance is marked OUT, and the engine refuses
/// to start a new hand once fewer than two seats remain able to play.
#[test]
fn heads_up_all_in_busts_a_seat_and_then_refuses_to_start() {
    let config = TableConfig { num_seats: 2, initial_stacks: vec![200, 200], small_blind: 50, big_blind: 100, shuffle_seed: 5 };
    let mut engine = Engine::new();
    let id = engine.create_game(config).unwrap();
    let snapshot = engine.start_hand(id).unwrap();

    let first = snapshot.active_seat.unwrap();
    let snap = engine.apply_action(id, first, Action::AllIn).unwrap();
    let second = snap.active_seat.expect("the other seat still needs to respond to the shove");
    let after = engine.apply_action(id, second, Action::AllIn).unwrap();

    assert_eq!(after.phase, Phase::Finished);
    let busted = after.seats.iter().any(|s| s.status == SeatStatus::Out);
    assert!(busted, "the loser of a heads-up all-in must be marked OUT");

    let restart = engine.start_hand(id);
    assert!(matches!(restart, Err(EngineError::GameNotStartable(_))));
}

/// Seats may buy in for different amounts; each seat's stack tracks its own configured entry,
/// not a table-wide uniform value.
#[test]
fn seats_can_start_with_uneven_stacks() {
    let config = TableConfig {
        num_seats: 3,
        initial_stacks: vec![500, 1000, 2000],
        small_blind: 50,
        big_blind: 100,
        shuffle_seed: 9,
    };
    let mut engine = Engine::new();
    let id = engine.create_game(config).unwrap();
    let snapshot = engine.start_hand(id).unwrap();
    let balances: Vec<i64> = snapshot.seats.iter().map(|s| s.balance + s.round_contribution).collect();
    assert_eq!(balances, vec![500, 1000, 2000]);
}

/// `initial_stacks` must supply exactly one entry per seat.
#[test]
fn mismatched_initial_stacks_length_is_rejected() {
    let config = TableConfig {
        num_seats: 3,
        initial_stacks: vec![500, 1000],
        small_blind: 50,
        big_blind: 100,
        shuffle_seed: 9,
    };
    let mut engine = Engine::new();
    assert!(matches!(engine.create_game(config), Err(EngineError::InvalidArgument(_))));
}
