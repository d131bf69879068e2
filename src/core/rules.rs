//! # Puzzle Rules
//!
//! The board model and the pure functions that act on it.
//!
//! ```text
//!   GameState ──apply_move(selection)──▶ GameState'   (commit)
//!   GameState' ──judge()──────────────▶ Verdict       (consequences)
//! ```
//!
//! `apply_move` never refuses a load because of the safety rule. An unsafe
//! board is a legal thing to reach; it is `judge` that turns it into a loss.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of missionaries and of cannibals in play.
pub const POPULATION: u8 = 3;
/// Boat capacity.
pub const BOAT_CAPACITY: u8 = 2;
pub const EASY_MAX_MOVES: u32 = 15;
/// Hard mode allows exactly the optimal solution length.
pub const HARD_MAX_MOVES: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Passenger {
    Missionary,
    Cannibal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn toggle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn max_moves(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_MAX_MOVES,
            Difficulty::Hard => HARD_MAX_MOVES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Playing => "In Progress",
            Status::Won => "Victory!",
            Status::Lost => "Mission Failed",
        }
    }
}

/// Population of one shore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bank {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Bank {
    pub const fn new(missionaries: u8, cannibals: u8) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    pub fn count(&self, passenger: Passenger) -> u8 {
        match passenger {
            Passenger::Missionary => self.missionaries,
            Passenger::Cannibal => self.cannibals,
        }
    }

    /// Missionaries on this bank are not outnumbered (or there are none).
    pub fn is_safe(&self) -> bool {
        !(self.missionaries > 0 && self.missionaries < self.cannibals)
    }
}

/// Who rode the boat on its last crossing, and where it is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boat {
    pub missionaries: u8,
    pub cannibals: u8,
    pub position: Side,
}

impl Boat {
    pub const fn empty_at(position: Side) -> Self {
        Self {
            missionaries: 0,
            cannibals: 0,
            position,
        }
    }
}

/// Passengers staged for the next crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Selection {
    pub const fn new(missionaries: u8, cannibals: u8) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    pub fn total(&self) -> u8 {
        self.missionaries + self.cannibals
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, passenger: Passenger) -> u8 {
        match passenger {
            Passenger::Missionary => self.missionaries,
            Passenger::Cannibal => self.cannibals,
        }
    }

    /// Returns a copy with one more of `passenger`.
    pub fn with_added(self, passenger: Passenger) -> Self {
        match passenger {
            Passenger::Missionary => Self::new(self.missionaries + 1, self.cannibals),
            Passenger::Cannibal => Self::new(self.missionaries, self.cannibals + 1),
        }
    }

    /// Returns a copy with one fewer of `passenger` (saturating).
    pub fn with_removed(self, passenger: Passenger) -> Self {
        match passenger {
            Passenger::Missionary => {
                Self::new(self.missionaries.saturating_sub(1), self.cannibals)
            }
            Passenger::Cannibal => Self::new(self.missionaries, self.cannibals.saturating_sub(1)),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M {}C", self.missionaries, self.cannibals)
    }
}

/// The complete board. Small and `Copy`; every transition builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub left_bank: Bank,
    pub right_bank: Bank,
    pub boat: Boat,
    pub move_count: u32,
    pub status: Status,
    pub difficulty: Difficulty,
    pub max_moves: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl GameState {
    /// Canonical starting position for the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            left_bank: Bank::new(POPULATION, POPULATION),
            right_bank: Bank::new(0, 0),
            boat: Boat::empty_at(Side::Left),
            move_count: 0,
            status: Status::Playing,
            difficulty,
            max_moves: difficulty.max_moves(),
        }
    }

    pub fn bank(&self, side: Side) -> Bank {
        match side {
            Side::Left => self.left_bank,
            Side::Right => self.right_bank,
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            max_moves: difficulty.max_moves(),
            ..self
        }
    }
}

/// Safety invariant on both banks.
pub fn is_valid(state: &GameState) -> bool {
    state.left_bank.is_safe() && state.right_bank.is_safe()
}

/// Everyone has reached the right bank.
pub fn is_won(state: &GameState) -> bool {
    state.right_bank.missionaries == POPULATION && state.right_bank.cannibals == POPULATION
}

/// Ferries `selection` from the boat's side to the other side.
///
/// Does not check the safety invariant. The caller must not pass an empty
/// load or one larger than the boat.
pub fn apply_move(state: &GameState, selection: Selection) -> GameState {
    debug_assert!(
        (1..=BOAT_CAPACITY).contains(&selection.total()),
        "boat load must be 1 or 2, got {selection}"
    );

    let from = state.boat.position;
    let (left_bank, right_bank) = match from {
        Side::Left => (
            Bank::new(
                state.left_bank.missionaries - selection.missionaries,
                state.left_bank.cannibals - selection.cannibals,
            ),
            Bank::new(
                state.right_bank.missionaries + selection.missionaries,
                state.right_bank.cannibals + selection.cannibals,
            ),
        ),
        Side::Right => (
            Bank::new(
                state.left_bank.missionaries + selection.missionaries,
                state.left_bank.cannibals + selection.cannibals,
            ),
            Bank::new(
                state.right_bank.missionaries - selection.missionaries,
                state.right_bank.cannibals - selection.cannibals,
            ),
        ),
    };

    GameState {
        left_bank,
        right_bank,
        boat: Boat {
            missionaries: selection.missionaries,
            cannibals: selection.cannibals,
            position: from.opposite(),
        },
        move_count: state.move_count + 1,
        ..*state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    Outnumbered,
    MoveLimit,
}

/// Result of the post-move consequence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Won,
    Lost(LossReason),
}

impl Verdict {
    pub fn status(self) -> Status {
        match self {
            Verdict::Continue => Status::Playing,
            Verdict::Won => Status::Won,
            Verdict::Lost(_) => Status::Lost,
        }
    }
}

/// Evaluates a committed board: unsafe banks first, then the win, then the
/// hard-mode move limit.
pub fn judge(state: &GameState) -> Verdict {
    if !is_valid(state) {
        Verdict::Lost(LossReason::Outnumbered)
    } else if is_won(state) {
        Verdict::Won
    } else if state.difficulty == Difficulty::Hard && state.move_count >= state.max_moves {
        Verdict::Lost(LossReason::MoveLimit)
    } else {
        Verdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(left: (u8, u8), boat: Side, difficulty: Difficulty, moves: u32) -> GameState {
        GameState {
            left_bank: Bank::new(left.0, left.1),
            right_bank: Bank::new(POPULATION - left.0, POPULATION - left.1),
            boat: Boat::empty_at(boat),
            move_count: moves,
            ..GameState::new(difficulty)
        }
    }

    #[test]
    fn test_initial_state_is_canonical() {
        let state = GameState::default();
        assert_eq!(state.left_bank, Bank::new(3, 3));
        assert_eq!(state.right_bank, Bank::new(0, 0));
        assert_eq!(state.boat, Boat::empty_at(Side::Left));
        assert_eq!(state.move_count, 0);
        assert_eq!(state.status, Status::Playing);
        assert_eq!(state.max_moves, EASY_MAX_MOVES);
        assert_eq!(GameState::new(Difficulty::Hard).max_moves, HARD_MAX_MOVES);
    }

    #[test]
    fn test_bank_safety_for_every_population() {
        for m in 0..=POPULATION {
            for c in 0..=POPULATION {
                let expected = !(m > 0 && m < c);
                assert_eq!(Bank::new(m, c).is_safe(), expected, "bank {m}/{c}");
            }
        }
    }

    #[test]
    fn test_is_valid_checks_both_banks() {
        for lm in 0..=POPULATION {
            for lc in 0..=POPULATION {
                let state = state_with((lm, lc), Side::Left, Difficulty::Easy, 0);
                let (rm, rc) = (POPULATION - lm, POPULATION - lc);
                let left_bad = lm > 0 && lm < lc;
                let right_bad = rm > 0 && rm < rc;
                assert_eq!(is_valid(&state), !(left_bad || right_bad), "left {lm}/{lc}");
            }
        }
    }

    #[test]
    fn test_is_won_only_when_right_bank_full() {
        assert!(!is_won(&GameState::default()));
        assert!(is_won(&state_with((0, 0), Side::Right, Difficulty::Easy, 11)));
        assert!(!is_won(&state_with((0, 1), Side::Right, Difficulty::Easy, 11)));
    }

    #[test]
    fn test_predicates_are_idempotent() {
        let state = state_with((1, 3), Side::Right, Difficulty::Easy, 1);
        let first = (is_valid(&state), is_won(&state));
        for _ in 0..5 {
            assert_eq!((is_valid(&state), is_won(&state)), first);
        }
    }

    #[test]
    fn test_apply_move_two_missionaries_from_start() {
        let next = apply_move(&GameState::default(), Selection::new(2, 0));
        assert_eq!(next.left_bank, Bank::new(1, 3));
        assert_eq!(next.right_bank, Bank::new(2, 0));
        assert_eq!(next.boat.position, Side::Right);
        assert_eq!((next.boat.missionaries, next.boat.cannibals), (2, 0));
        assert_eq!(next.move_count, 1);
        // Unsafe but still committed; judging is a separate step.
        assert!(!is_valid(&next));
        assert_eq!(next.status, Status::Playing);
    }

    #[test]
    fn test_apply_move_from_right_bank() {
        let state = state_with((3, 1), Side::Right, Difficulty::Easy, 1);
        let next = apply_move(&state, Selection::new(0, 1));
        assert_eq!(next.left_bank, Bank::new(3, 2));
        assert_eq!(next.right_bank, Bank::new(0, 1));
        assert_eq!(next.boat.position, Side::Left);
        assert_eq!(next.move_count, 2);
    }

    #[test]
    fn test_population_is_closed_over_every_reachable_board() {
        use std::collections::{HashSet, VecDeque};

        // Walks every boardable load, unsafe boards included.
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([GameState::default()]);
        while let Some(state) = queue.pop_front() {
            if !seen.insert((state.left_bank, state.boat.position)) {
                continue;
            }
            assert_eq!(
                state.left_bank.missionaries + state.right_bank.missionaries,
                POPULATION
            );
            assert_eq!(state.left_bank.cannibals + state.right_bank.cannibals, POPULATION);

            let bank = state.bank(state.boat.position);
            for m in 0..=BOAT_CAPACITY.min(bank.missionaries) {
                for c in 0..=(BOAT_CAPACITY - m).min(bank.cannibals) {
                    let load = Selection::new(m, c);
                    if !load.is_empty() {
                        queue.push_back(apply_move(&state, load));
                    }
                }
            }
        }
        // Every split with the boat on either side, except an empty bank
        // where the boat just landed
        assert_eq!(seen.len(), 30);
        assert!(!seen.contains(&(Bank::new(3, 3), Side::Right)));
        assert!(!seen.contains(&(Bank::new(0, 0), Side::Left)));
    }

    #[test]
    fn test_judge_outnumbered_beats_everything() {
        let state = state_with((1, 3), Side::Right, Difficulty::Hard, 11);
        assert_eq!(judge(&state), Verdict::Lost(LossReason::Outnumbered));
    }

    #[test]
    fn test_judge_win_beats_move_limit() {
        let state = state_with((0, 0), Side::Right, Difficulty::Hard, 11);
        assert_eq!(judge(&state), Verdict::Won);
    }

    #[test]
    fn test_judge_move_limit_only_in_hard_mode() {
        let hard = state_with((3, 1), Side::Right, Difficulty::Hard, 11);
        assert_eq!(judge(&hard), Verdict::Lost(LossReason::MoveLimit));

        let easy = state_with((3, 1), Side::Right, Difficulty::Easy, 11);
        assert_eq!(judge(&easy), Verdict::Continue);

        let hard_under = state_with((3, 1), Side::Right, Difficulty::Hard, 10);
        assert_eq!(judge(&hard_under), Verdict::Continue);
    }

    #[test]
    fn test_selection_add_remove() {
        let sel = Selection::default()
            .with_added(Passenger::Missionary)
            .with_added(Passenger::Cannibal);
        assert_eq!(sel, Selection::new(1, 1));
        assert_eq!(sel.total(), 2);
        let sel = sel.with_removed(Passenger::Cannibal).with_removed(Passenger::Cannibal);
        assert_eq!(sel, Selection::new(1, 0));
        assert_eq!(sel.to_string(), "1M 0C");
    }

    #[test]
    fn test_difficulty_toggle_updates_limit() {
        let state = GameState::default().with_difficulty(Difficulty::Easy.toggle());
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.max_moves, HARD_MAX_MOVES);
    }
}
