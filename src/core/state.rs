//! # Application State
//!
//! Core game state for River Escape. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── game: GameState               // board, move counter, status, difficulty
//! ├── selection: Selection          // passengers staged for the next crossing
//! ├── solver: SolverState           // scripted playback state machine
//! ├── judgement_pending: bool       // move committed, consequences not yet judged
//! ├── epoch: u64                    // stamped on timers; bumped on reset/stop
//! ├── show_hints: bool
//! ├── theme: Theme
//! ├── notices: VecDeque<Notice>     // transient notifications, newest last
//! ├── outcome: Option<Outcome>      // end-of-game announcement
//! └── timing: Timing                // delays handed to the scheduler
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::rules::{GameState, Selection, Status};

/// Oldest notices are dropped beyond this many.
pub const MAX_NOTICES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Scripted playback: `Idle → Running → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverState {
    #[default]
    Idle,
    /// `next_step` is the zero-based index of the step the next tick applies.
    Running { next_step: usize },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id so adapters can tell which notices they already showed.
    pub seq: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

/// End-of-game announcement shown as a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub solver_step: Duration,
    /// Zero means consequences are judged in the same update as the move.
    pub judge_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            solver_step: Duration::from_millis(crate::core::config::DEFAULT_SOLVER_STEP_MS),
            judge_delay: Duration::from_millis(crate::core::config::DEFAULT_JUDGE_DELAY_MS),
        }
    }
}

pub struct App {
    pub game: GameState,
    pub selection: Selection,
    pub solver: SolverState,
    pub judgement_pending: bool,
    pub epoch: u64,
    pub show_hints: bool,
    pub theme: Theme,
    pub notices: VecDeque<Notice>,
    pub outcome: Option<Outcome>,
    pub timing: Timing,
    next_notice_seq: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::default(), false, Theme::default(), Timing::default())
    }
}

impl App {
    pub fn new(game: GameState, show_hints: bool, theme: Theme, timing: Timing) -> Self {
        Self {
            game,
            selection: Selection::default(),
            solver: SolverState::Idle,
            judgement_pending: false,
            epoch: 0,
            show_hints,
            theme,
            notices: VecDeque::new(),
            outcome: None,
            timing,
            next_notice_seq: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            GameState::new(config.difficulty),
            config.show_hints,
            config.theme,
            Timing {
                solver_step: Duration::from_millis(config.solver_step_ms),
                judge_delay: Duration::from_millis(config.judge_delay_ms),
            },
        )
    }

    pub fn is_auto_solving(&self) -> bool {
        matches!(self.solver, SolverState::Running { .. })
    }

    /// Interactive input is accepted: game on, no playback, no boat in transit.
    pub fn accepts_input(&self) -> bool {
        self.game.status == Status::Playing && !self.is_auto_solving() && !self.judgement_pending
    }

    pub fn notify(
        &mut self,
        level: NoticeLevel,
        title: impl Into<String>,
        description: Option<String>,
    ) {
        self.next_notice_seq += 1;
        self.notices.push_back(Notice {
            seq: self.next_notice_seq,
            level,
            title: title.into(),
            description,
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Notices newer than `seq`, oldest first.
    pub fn notices_after(&self, seq: u64) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| n.seq > seq)
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }
}
