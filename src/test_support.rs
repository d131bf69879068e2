//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::rules::{Bank, Boat, GameState, POPULATION, Side};
use crate::core::state::{App, Theme, Timing};

/// Creates a test App on the canonical board with default delays.
pub fn test_app() -> App {
    App::default()
}

/// Creates a test App whose moves are judged immediately.
pub fn instant_app() -> App {
    App::new(
        GameState::default(),
        false,
        Theme::Light,
        Timing {
            solver_step: Duration::from_millis(1),
            judge_delay: Duration::ZERO,
        },
    )
}

/// A board with `left` on the left bank, the rest on the right.
pub fn board(left: (u8, u8), boat: Side) -> GameState {
    GameState {
        left_bank: Bank::new(left.0, left.1),
        right_bank: Bank::new(POPULATION - left.0, POPULATION - left.1),
        boat: Boat::empty_at(boat),
        ..GameState::default()
    }
}
