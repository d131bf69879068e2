use river_escape::core::action::{Action, Effect, TimerSlot, update};
use river_escape::core::rules::{
    Bank, Difficulty, GameState, HARD_MAX_MOVES, Passenger, Selection, Side, Status,
};
use river_escape::core::solution::{SOLUTION, SOLUTION_LEN, shortest_solution, verify_script};
use river_escape::core::state::{App, SolverState, Theme, Timing};
use std::time::Duration;

// ============================================================================
// Helper Functions
// ============================================================================

/// App whose landings are judged in the same update as the move
fn instant_app(difficulty: Difficulty) -> App {
    App::new(
        GameState::new(difficulty),
        false,
        Theme::Light,
        Timing {
            solver_step: Duration::from_millis(1),
            judge_delay: Duration::ZERO,
        },
    )
}

/// Stages `load` from the boat's bank and commits the crossing
fn cross(app: &mut App, load: Selection) -> Effect {
    let side = app.game.boat.position;
    for _ in 0..load.missionaries {
        update(app, Action::Select { passenger: Passenger::Missionary, side });
    }
    for _ in 0..load.cannibals {
        update(app, Action::Select { passenger: Passenger::Cannibal, side });
    }
    update(app, Action::CommitMove)
}

/// Pulls the timer action out of a scheduling effect
fn scheduled(effect: Effect) -> Action {
    match effect {
        Effect::Schedule { action, .. } | Effect::Restart { action, .. } => action,
        other => panic!("expected a scheduled action, got {:?}", other),
    }
}

// ============================================================================
// Manual Play
// ============================================================================

#[test]
fn test_scripted_loads_win_by_hand() {
    let mut app = instant_app(Difficulty::Easy);
    for step in SOLUTION.iter() {
        assert_eq!(app.game.status, Status::Playing);
        cross(&mut app, step.load);
        assert_eq!(app.game.left_bank, step.left_bank);
        assert_eq!(app.game.boat.position, step.boat_side);
    }
    assert_eq!(app.game.status, Status::Won);
    assert_eq!(app.game.move_count, SOLUTION_LEN as u32);
    assert_eq!(app.outcome.as_ref().map(|o| o.title.as_str()), Some("Victory!"));
}

#[test]
fn test_hard_mode_wins_on_the_last_allowed_move() {
    let mut app = instant_app(Difficulty::Hard);
    let path = shortest_solution().expect("puzzle is solvable");
    for load in path {
        cross(&mut app, load);
    }
    assert_eq!(app.game.move_count, HARD_MAX_MOVES);
    assert_eq!(app.game.status, Status::Won);
}

#[test]
fn test_hard_mode_loses_when_moves_run_out() {
    let mut app = instant_app(Difficulty::Hard);
    // Ferry one cannibal back and forth until the limit is reached
    for _ in 0..HARD_MAX_MOVES {
        cross(&mut app, Selection::new(0, 1));
    }
    assert_eq!(app.game.status, Status::Lost);
    let outcome = app.outcome.clone().expect("outcome is announced");
    assert_eq!(outcome.message, "You exceeded the 11 move limit!");

    // The board is frozen once the game is over
    let frozen = app.game;
    cross(&mut app, Selection::new(0, 1));
    assert_eq!(app.game, frozen);
}

#[test]
fn test_easy_mode_has_no_move_limit() {
    let mut app = instant_app(Difficulty::Easy);
    for _ in 0..20 {
        cross(&mut app, Selection::new(0, 1));
    }
    assert_eq!(app.game.status, Status::Playing);
    assert_eq!(app.game.move_count, 20);
}

#[test]
fn test_unsafe_move_loses_immediately() {
    let mut app = instant_app(Difficulty::Easy);
    cross(&mut app, Selection::new(1, 1));
    assert_eq!(app.game.status, Status::Playing);
    // Bring the missionary back alone: right bank keeps 1 cannibal, left gets 3M 2C
    cross(&mut app, Selection::new(1, 0));
    assert_eq!(app.game.status, Status::Playing);
    cross(&mut app, Selection::new(2, 0));
    assert_eq!(app.game.status, Status::Lost);
    assert_eq!(
        app.outcome.as_ref().map(|o| o.message.as_str()),
        Some("Cannibals outnumbered the missionaries!")
    );
}

// ============================================================================
// Delayed Judgement
// ============================================================================

#[test]
fn test_judgement_arrives_through_a_timer_action() {
    let mut app = App::default();
    cross(&mut app, Selection::new(2, 0));
    assert!(app.judgement_pending);
    assert_eq!(app.game.status, Status::Playing);

    // Nothing can board while the boat is crossing
    update(&mut app, Action::Select { passenger: Passenger::Missionary, side: Side::Right });
    assert!(app.selection.is_empty());

    let epoch = app.epoch;
    update(&mut app, Action::Judge { epoch });
    assert!(!app.judgement_pending);
    assert_eq!(app.game.status, Status::Lost);
}

#[test]
fn test_reset_drops_a_pending_judgement() {
    let mut app = App::default();
    let judge = scheduled(cross(&mut app, Selection::new(2, 0)));

    let effect = update(&mut app, Action::Reset);
    assert_eq!(
        effect,
        Effect::CancelTimers(vec![TimerSlot::Judgement, TimerSlot::Solver])
    );

    update(&mut app, judge);
    assert_eq!(app.game, GameState::default());
    assert!(app.outcome.is_none());
}

// ============================================================================
// Auto-Solve
// ============================================================================

#[test]
fn test_auto_solve_replays_the_script() {
    let mut app = instant_app(Difficulty::Hard);
    cross(&mut app, Selection::new(0, 2));

    let mut next = scheduled(update(&mut app, Action::StartAutoSolve));
    assert_eq!(app.game.move_count, 0);

    let mut ticks = 0;
    loop {
        ticks += 1;
        match update(&mut app, next) {
            Effect::None => break,
            effect => next = scheduled(effect),
        }
    }
    assert_eq!(ticks, SOLUTION_LEN);
    assert_eq!(app.solver, SolverState::Finished);
    assert_eq!(app.game.right_bank, Bank::new(3, 3));
    assert_eq!(app.game.status, Status::Won);
    assert_eq!(app.game.difficulty, Difficulty::Hard);
}

#[test]
fn test_stale_solver_tick_after_stop_is_ignored() {
    let mut app = instant_app(Difficulty::Easy);
    let first = scheduled(update(&mut app, Action::StartAutoSolve));
    let second = scheduled(update(&mut app, first));
    assert_eq!(app.game.move_count, 1);

    update(&mut app, Action::StopAutoSolve);
    update(&mut app, second);
    assert_eq!(app.game.move_count, 1);
    assert_eq!(app.solver, SolverState::Idle);
}

// ============================================================================
// Script Verification
// ============================================================================

#[test]
fn test_script_matches_breadth_first_optimum() {
    assert_eq!(verify_script(), Ok(()));
    let optimum = shortest_solution().expect("puzzle is solvable");
    assert_eq!(optimum.len(), SOLUTION_LEN);
}
