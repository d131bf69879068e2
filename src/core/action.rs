//! # Actions
//!
//! Everything that can happen in River Escape becomes an `Action`.
//! Player presses Enter? That's `Action::CommitMove`.
//! Solver timer fires? That's `Action::SolverTick { epoch }`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` describing any side effect the adapter must
//! carry out (schedule a timer, cancel timers, quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Timer-driven actions carry the `epoch` they were scheduled in. Reset,
//! auto-solve start and stop bump `App::epoch`, so a timer that slips past
//! its cancellation lands here stale and is dropped.

use log::{debug, info};
use std::time::Duration;

use crate::core::rules::{
    BOAT_CAPACITY, GameState, LossReason, Passenger, Selection, Side, Status, Verdict,
    apply_move, judge,
};
use crate::core::solution::{SOLUTION, SOLUTION_LEN};
use crate::core::state::{App, NoticeLevel, Outcome, SolverState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select { passenger: Passenger, side: Side },
    Deselect(Passenger),
    CommitMove,
    /// Deferred consequence check for the last committed move.
    Judge { epoch: u64 },
    Reset,
    ToggleDifficulty,
    ToggleHints,
    ToggleTheme,
    StartAutoSolve,
    StopAutoSolve,
    SolverTick { epoch: u64 },
    DismissOutcome,
    Quit,
}

/// Which pending timer an effect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Judgement,
    Solver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Abort whatever is pending in these slots, then (optionally) schedule.
    Schedule {
        slot: TimerSlot,
        delay: Duration,
        action: Action,
    },
    CancelTimers(Vec<TimerSlot>),
    /// Cancel everything, then schedule the first solver step.
    Restart {
        delay: Duration,
        action: Action,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Select { passenger, side } => {
            select(app, passenger, side);
            Effect::None
        }
        Action::Deselect(passenger) => {
            if app.selection.count(passenger) > 0 && !app.is_auto_solving() {
                app.selection = app.selection.with_removed(passenger);
            }
            Effect::None
        }
        Action::CommitMove => commit_move(app),
        Action::Judge { epoch } => {
            if epoch != app.epoch || !app.judgement_pending {
                debug!("Dropping stale judgement (epoch {} vs {})", epoch, app.epoch);
                return Effect::None;
            }
            app.judgement_pending = false;
            apply_verdict(app);
            Effect::None
        }
        Action::Reset => {
            reset(app);
            app.notify(
                NoticeLevel::Info,
                "Game Reset",
                Some("Good luck on your new journey!".to_string()),
            );
            Effect::CancelTimers(vec![TimerSlot::Judgement, TimerSlot::Solver])
        }
        Action::ToggleDifficulty => {
            let difficulty = app.game.difficulty.toggle();
            app.game = app.game.with_difficulty(difficulty);
            info!("Difficulty set to {:?}", difficulty);
            app.notify(
                NoticeLevel::Info,
                format!("Difficulty set to {}", difficulty.label()),
                Some(format!(
                    "You now have {} moves to complete the puzzle.",
                    app.game.max_moves
                )),
            );
            Effect::None
        }
        Action::ToggleHints => {
            app.show_hints = !app.show_hints;
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            Effect::None
        }
        Action::StartAutoSolve => {
            reset(app);
            app.solver = SolverState::Running { next_step: 0 };
            info!("Auto-solve started");
            app.notify(NoticeLevel::Info, "Auto-solving puzzle...", None);
            Effect::Restart {
                delay: app.timing.solver_step,
                action: Action::SolverTick { epoch: app.epoch },
            }
        }
        Action::StopAutoSolve => {
            if !app.is_auto_solving() {
                return Effect::None;
            }
            app.solver = SolverState::Idle;
            app.epoch += 1;
            info!("Auto-solve stopped at move {}", app.game.move_count);
            app.notify(
                NoticeLevel::Info,
                "Auto-solve stopped",
                Some(format!("Continue from move {}.", app.game.move_count)),
            );
            Effect::CancelTimers(vec![TimerSlot::Solver])
        }
        Action::SolverTick { epoch } => solver_tick(app, epoch),
        Action::DismissOutcome => {
            app.outcome = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn select(app: &mut App, passenger: Passenger, side: Side) {
    if !app.accepts_input() || side != app.game.boat.position {
        return;
    }
    if app.selection.total() >= BOAT_CAPACITY {
        app.notify(
            NoticeLevel::Info,
            "Boat is full!",
            Some("The boat can only carry up to 2 people.".to_string()),
        );
        return;
    }
    // Staged passengers are still standing on the bank.
    let available = app.game.bank(side).count(passenger);
    if available <= app.selection.count(passenger) {
        return;
    }
    app.selection = app.selection.with_added(passenger);
}

fn commit_move(app: &mut App) -> Effect {
    if !app.accepts_input() {
        return Effect::None;
    }
    if app.selection.is_empty() {
        app.notify(
            NoticeLevel::Info,
            "Boat is empty!",
            Some("At least one person must pilot the boat.".to_string()),
        );
        return Effect::None;
    }

    let load = app.selection;
    app.game = apply_move(&app.game, load);
    app.selection = Selection::default();
    info!(
        "Move {}: ferried {} to the {} bank",
        app.game.move_count,
        load,
        app.game.boat.position.label()
    );

    if app.timing.judge_delay.is_zero() {
        apply_verdict(app);
        return Effect::None;
    }
    app.judgement_pending = true;
    Effect::Schedule {
        slot: TimerSlot::Judgement,
        delay: app.timing.judge_delay,
        action: Action::Judge { epoch: app.epoch },
    }
}

fn apply_verdict(app: &mut App) {
    let verdict = judge(&app.game);
    app.game = app.game.with_status(verdict.status());
    match verdict {
        Verdict::Continue => {}
        Verdict::Won => finish(
            app,
            NoticeLevel::Success,
            "Victory!",
            "You safely transported everyone across the river!".to_string(),
        ),
        Verdict::Lost(LossReason::Outnumbered) => finish(
            app,
            NoticeLevel::Error,
            "Mission Failed!",
            "Cannibals outnumbered the missionaries!".to_string(),
        ),
        Verdict::Lost(LossReason::MoveLimit) => {
            let message = format!("You exceeded the {} move limit!", app.game.max_moves);
            finish(app, NoticeLevel::Error, "Mission Failed!", message)
        }
    }
}

fn solver_tick(app: &mut App, epoch: u64) -> Effect {
    let SolverState::Running { next_step } = app.solver else {
        debug!("Dropping solver tick: solver not running");
        return Effect::None;
    };
    if epoch != app.epoch {
        debug!("Dropping stale solver tick (epoch {} vs {})", epoch, app.epoch);
        return Effect::None;
    }

    let step = &SOLUTION[next_step];
    app.game = step.snapshot(next_step, &app.game);
    debug!("Solver step {}: {}", next_step + 1, step.description);

    if next_step + 1 == SOLUTION_LEN {
        app.solver = SolverState::Finished;
        app.game = app.game.with_status(Status::Won);
        finish(
            app,
            NoticeLevel::Success,
            "Puzzle solved!",
            format!("The optimal solution takes {} moves.", SOLUTION_LEN),
        );
        return Effect::None;
    }

    app.solver = SolverState::Running {
        next_step: next_step + 1,
    };
    Effect::Schedule {
        slot: TimerSlot::Solver,
        delay: app.timing.solver_step,
        action: Action::SolverTick { epoch: app.epoch },
    }
}

/// Canonical board, keeping the player's difficulty.
fn reset(app: &mut App) {
    app.game = GameState::new(app.game.difficulty);
    app.selection = Selection::default();
    app.solver = SolverState::Idle;
    app.judgement_pending = false;
    app.outcome = None;
    app.epoch += 1;
}

fn finish(app: &mut App, level: NoticeLevel, title: &str, message: String) {
    info!("Game over after {} moves: {}", app.game.move_count, title);
    app.notify(level, title, Some(message.clone()));
    app.outcome = Some(Outcome {
        status: app.game.status,
        title: title.to_string(),
        message,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{Bank, Difficulty};
    use crate::test_support::{board, instant_app, test_app};

    fn stage(app: &mut App, load: Selection) {
        let side = app.game.boat.position;
        for _ in 0..load.missionaries {
            update(app, Action::Select { passenger: Passenger::Missionary, side });
        }
        for _ in 0..load.cannibals {
            update(app, Action::Select { passenger: Passenger::Cannibal, side });
        }
    }

    fn play(app: &mut App, load: Selection) -> Effect {
        stage(app, load);
        update(app, Action::CommitMove)
    }

    #[test]
    fn test_select_from_boat_side_only() {
        let mut app = test_app();
        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Right });
        assert!(app.selection.is_empty());

        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Left });
        assert_eq!(app.selection, Selection::new(0, 1));
    }

    #[test]
    fn test_select_caps_at_boat_capacity() {
        let mut app = test_app();
        stage(&mut app, Selection::new(2, 0));
        let notices = app.notices.len();
        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Left });
        assert_eq!(app.selection, Selection::new(2, 0));
        assert_eq!(app.notices.len(), notices + 1);
        assert_eq!(app.latest_notice().unwrap().title, "Boat is full!");
    }

    #[test]
    fn test_select_needs_someone_on_the_bank() {
        let mut app = test_app();
        app.game = board((0, 2), Side::Left);
        update(&mut app, Action::Select { passenger: Passenger::Missionary, side: Side::Left });
        assert!(app.selection.is_empty());

        app.game = board((1, 2), Side::Left);
        stage(&mut app, Selection::new(2, 0));
        assert_eq!(app.selection, Selection::new(1, 0));
    }

    #[test]
    fn test_select_rejected_when_game_over() {
        let mut app = test_app();
        app.game = app.game.with_status(Status::Lost);
        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Left });
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_deselect() {
        let mut app = test_app();
        stage(&mut app, Selection::new(1, 1));
        update(&mut app, Action::Deselect(Passenger::Missionary));
        assert_eq!(app.selection, Selection::new(0, 1));
        update(&mut app, Action::Deselect(Passenger::Missionary));
        assert_eq!(app.selection, Selection::new(0, 1));
    }

    #[test]
    fn test_commit_empty_boat_is_a_notice_only() {
        let mut app = test_app();
        let before = app.game;
        let effect = update(&mut app, Action::CommitMove);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.game, before);
        assert_eq!(app.latest_notice().unwrap().title, "Boat is empty!");
    }

    #[test]
    fn test_commit_schedules_judgement_then_judges() {
        let mut app = test_app();
        let effect = play(&mut app, Selection::new(2, 0));
        assert_eq!(
            effect,
            Effect::Schedule {
                slot: TimerSlot::Judgement,
                delay: app.timing.judge_delay,
                action: Action::Judge { epoch: app.epoch },
            }
        );
        // Committed but not yet judged: the unsafe board is visible.
        assert_eq!(app.game.left_bank, Bank::new(1, 3));
        assert_eq!(app.game.status, Status::Playing);
        assert!(app.selection.is_empty());
        assert!(app.judgement_pending);

        // Boat is in transit; no new staging.
        update(&mut app, Action::Select { passenger: Passenger::Missionary, side: Side::Right });
        assert!(app.selection.is_empty());

        let epoch = app.epoch;
        update(&mut app, Action::Judge { epoch });
        assert_eq!(app.game.status, Status::Lost);
        let outcome = app.outcome.as_ref().unwrap();
        assert_eq!(outcome.message, "Cannibals outnumbered the missionaries!");
    }

    #[test]
    fn test_stale_judgement_is_ignored() {
        let mut app = test_app();
        play(&mut app, Selection::new(2, 0));
        let stale = app.epoch;
        update(&mut app, Action::Reset);
        update(&mut app, Action::Judge { epoch: stale });
        assert_eq!(app.game, GameState::default());
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_hard_mode_move_limit() {
        let mut app = instant_app();
        app.game = GameState::new(Difficulty::Hard);
        // Shuttle one cannibal back and forth.
        for _ in 0..10 {
            play(&mut app, Selection::new(0, 1));
            assert_eq!(app.game.status, Status::Playing);
        }
        play(&mut app, Selection::new(0, 1));
        assert_eq!(app.game.move_count, 11);
        assert_eq!(app.game.status, Status::Lost);
        assert_eq!(
            app.outcome.as_ref().unwrap().message,
            "You exceeded the 11 move limit!"
        );
    }

    #[test]
    fn test_easy_mode_has_no_limit_at_eleven() {
        let mut app = instant_app();
        for _ in 0..11 {
            play(&mut app, Selection::new(0, 1));
        }
        assert_eq!(app.game.move_count, 11);
        assert_eq!(app.game.status, Status::Playing);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_manual_win() {
        let mut app = instant_app();
        for step in SOLUTION.iter() {
            play(&mut app, step.load);
        }
        assert_eq!(app.game.status, Status::Won);
        assert_eq!(app.outcome.as_ref().unwrap().title, "Victory!");
    }

    #[test]
    fn test_reset_restores_canonical_state() {
        let mut app = instant_app();
        app.game = GameState::new(Difficulty::Hard);
        play(&mut app, Selection::new(2, 0));
        stage(&mut app, Selection::new(0, 1));
        let epoch = app.epoch;

        let effect = update(&mut app, Action::Reset);
        assert_eq!(
            effect,
            Effect::CancelTimers(vec![TimerSlot::Judgement, TimerSlot::Solver])
        );
        assert_eq!(app.game, GameState::new(Difficulty::Hard));
        assert!(app.selection.is_empty());
        assert!(app.outcome.is_none());
        assert!(app.epoch > epoch);
        assert_eq!(app.latest_notice().unwrap().title, "Game Reset");
    }

    #[test]
    fn test_toggle_difficulty_notice() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDifficulty);
        assert_eq!(app.game.difficulty, Difficulty::Hard);
        assert_eq!(app.game.max_moves, 11);
        let notice = app.latest_notice().unwrap();
        assert_eq!(notice.title, "Difficulty set to HARD");
        assert_eq!(
            notice.description.as_deref(),
            Some("You now have 11 moves to complete the puzzle.")
        );
    }

    #[test]
    fn test_toggles() {
        let mut app = test_app();
        update(&mut app, Action::ToggleHints);
        assert!(app.show_hints);
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, crate::core::state::Theme::Dark);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_auto_solve_runs_to_victory() {
        let mut app = test_app();
        stage(&mut app, Selection::new(1, 0));
        let effect = update(&mut app, Action::StartAutoSolve);
        let Effect::Restart { action, .. } = effect else {
            panic!("expected restart, got {effect:?}");
        };
        assert!(app.selection.is_empty());
        assert!(app.is_auto_solving());

        let mut next = Some(action);
        let mut ticks = 0;
        while let Some(action) = next.take() {
            ticks += 1;
            next = match update(&mut app, action) {
                Effect::Schedule { slot: TimerSlot::Solver, action, .. } => Some(action),
                Effect::None => None,
                other => panic!("unexpected effect {other:?}"),
            };
            if ticks == 1 {
                assert_eq!(app.game.left_bank, Bank::new(3, 1));
                assert_eq!(app.game.right_bank, Bank::new(0, 2));
                assert_eq!(app.game.boat.position, Side::Right);
            }
        }

        assert_eq!(ticks, SOLUTION_LEN);
        assert_eq!(app.solver, SolverState::Finished);
        assert_eq!(app.game.left_bank, Bank::new(0, 0));
        assert_eq!(app.game.right_bank, Bank::new(3, 3));
        assert_eq!(app.game.move_count, 11);
        assert_eq!(app.game.status, Status::Won);
        assert_eq!(app.outcome.as_ref().unwrap().title, "Puzzle solved!");
    }

    #[test]
    fn test_stop_keeps_board_and_drops_stale_tick() {
        let mut app = test_app();
        update(&mut app, Action::StartAutoSolve);
        let epoch = app.epoch;
        for _ in 0..3 {
            update(&mut app, Action::SolverTick { epoch });
        }
        let reached = app.game;
        assert_eq!(reached.move_count, 3);

        let effect = update(&mut app, Action::StopAutoSolve);
        assert_eq!(effect, Effect::CancelTimers(vec![TimerSlot::Solver]));
        assert_eq!(app.solver, SolverState::Idle);
        assert_eq!(app.game, reached);

        update(&mut app, Action::SolverTick { epoch });
        assert_eq!(app.game, reached);

        // Play continues from the reached board: boat on the right with 0/3 there.
        assert_eq!(app.game.boat.position, Side::Right);
        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Right });
        assert_eq!(app.selection, Selection::new(0, 1));
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::StopAutoSolve), Effect::None);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_input_ignored_during_auto_solve() {
        let mut app = test_app();
        update(&mut app, Action::StartAutoSolve);
        update(&mut app, Action::Select { passenger: Passenger::Cannibal, side: Side::Left });
        assert!(app.selection.is_empty());
        assert_eq!(update(&mut app, Action::CommitMove), Effect::None);
        assert_eq!(app.game.move_count, 0);
    }

    #[test]
    fn test_dismiss_outcome() {
        let mut app = instant_app();
        play(&mut app, Selection::new(2, 0));
        assert!(app.outcome.is_some());
        update(&mut app, Action::DismissOutcome);
        assert!(app.outcome.is_none());
        assert_eq!(app.game.status, Status::Lost);
    }
}
