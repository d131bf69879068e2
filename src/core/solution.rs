//! # Scripted Solution
//!
//! The optimal crossing sequence, written out by hand. Auto-solve replays it
//! one step per timer tick and the hint panel reads its descriptions.
//!
//! `shortest_solution` is a breadth-first search over the 3/3 puzzle graph.
//! Nothing at runtime depends on it; it exists to check the table.

use serde::Serialize;
use std::collections::{HashMap, VecDeque};

use crate::OutputFormat;
use crate::core::rules::{
    BOAT_CAPACITY, Bank, Boat, GameState, POPULATION, Selection, Side, apply_move, is_valid,
};

/// One crossing of the optimal solution and the board it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolutionStep {
    pub description: &'static str,
    pub load: Selection,
    pub left_bank: Bank,
    pub right_bank: Bank,
    pub boat_side: Side,
}

impl SolutionStep {
    const fn new(
        description: &'static str,
        load: (u8, u8),
        left: (u8, u8),
        boat_side: Side,
    ) -> Self {
        Self {
            description,
            load: Selection::new(load.0, load.1),
            left_bank: Bank::new(left.0, left.1),
            right_bank: Bank::new(POPULATION - left.0, POPULATION - left.1),
            boat_side,
        }
    }

    /// Board after this step, keeping the difficulty settings of `base`.
    /// `index` is zero-based; the move counter becomes `index + 1`.
    pub fn snapshot(&self, index: usize, base: &GameState) -> GameState {
        GameState {
            left_bank: self.left_bank,
            right_bank: self.right_bank,
            boat: Boat {
                missionaries: self.load.missionaries,
                cannibals: self.load.cannibals,
                position: self.boat_side,
            },
            move_count: index as u32 + 1,
            ..*base
        }
    }
}

pub const SOLUTION_LEN: usize = 11;

pub static SOLUTION: [SolutionStep; SOLUTION_LEN] = [
    SolutionStep::new("Start by sending 2 cannibals across", (0, 2), (3, 1), Side::Right),
    SolutionStep::new("Return 1 cannibal back", (0, 1), (3, 2), Side::Left),
    SolutionStep::new("Send 2 cannibals across", (0, 2), (3, 0), Side::Right),
    SolutionStep::new("Return 1 cannibal back", (0, 1), (3, 1), Side::Left),
    SolutionStep::new("Send 2 missionaries across", (2, 0), (1, 1), Side::Right),
    SolutionStep::new("Return 1 missionary and 1 cannibal back", (1, 1), (2, 2), Side::Left),
    SolutionStep::new("Send 2 missionaries across", (2, 0), (0, 2), Side::Right),
    SolutionStep::new("Return 1 cannibal back", (0, 1), (0, 3), Side::Left),
    SolutionStep::new("Send 2 cannibals across", (0, 2), (0, 1), Side::Right),
    SolutionStep::new("Return 1 cannibal back", (0, 1), (0, 2), Side::Left),
    SolutionStep::new("Send 2 cannibals across", (0, 2), (0, 0), Side::Right),
];

/// Hint for the next move given how many moves have been made.
pub fn hint_for(move_count: u32) -> &'static str {
    let index = (move_count as usize).min(SOLUTION_LEN - 1);
    SOLUTION[index].description
}

/// Every boat load that fits: 1 or 2 people.
pub fn all_loads() -> impl Iterator<Item = Selection> {
    (0..=BOAT_CAPACITY).flat_map(|m| {
        (0..=BOAT_CAPACITY - m)
            .map(move |c| Selection::new(m, c))
            .filter(|load| !load.is_empty())
    })
}

/// Loads that can actually board from the boat's side and leave both banks safe.
pub fn legal_moves(state: &GameState) -> Vec<(Selection, GameState)> {
    let bank = state.bank(state.boat.position);
    all_loads()
        .filter(|load| load.missionaries <= bank.missionaries && load.cannibals <= bank.cannibals)
        .map(|load| (load, apply_move(state, load)))
        .filter(|(_, next)| is_valid(next))
        .collect()
}

/// Graph node: who is on the left bank and where the boat is.
type Node = (u8, u8, Side);

fn node_of(state: &GameState) -> Node {
    (state.left_bank.missionaries, state.left_bank.cannibals, state.boat.position)
}

/// Breadth-first search from the canonical start to everyone on the right.
/// Returns the loads of one shortest crossing sequence.
pub fn shortest_solution() -> Option<Vec<Selection>> {
    let start = GameState::default();
    let goal: Node = (0, 0, Side::Right);

    let mut parents: HashMap<Node, (Node, Selection)> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let start_node = node_of(&start);

    while let Some(state) = queue.pop_front() {
        let node = node_of(&state);
        if node == goal {
            let mut path = Vec::new();
            let mut cursor = node;
            while cursor != start_node {
                let (prev, load) = parents[&cursor];
                path.push(load);
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }
        for (load, next) in legal_moves(&state) {
            let next_node = node_of(&next);
            if next_node != start_node && !parents.contains_key(&next_node) {
                parents.insert(next_node, (node, load));
                queue.push_back(next);
            }
        }
    }
    None
}

/// Checks that each scripted step is a legal crossing from the previous board.
pub fn verify_script() -> Result<(), String> {
    let mut state = GameState::default();
    for (index, step) in SOLUTION.iter().enumerate() {
        let Some((_, next)) = legal_moves(&state)
            .into_iter()
            .find(|(load, _)| *load == step.load)
        else {
            return Err(format!("step {}: load {} is not legal", index + 1, step.load));
        };
        if next != step.snapshot(index, &state) {
            return Err(format!("step {}: board does not match the table", index + 1));
        }
        state = next;
    }
    Ok(())
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    #[serde(flatten)]
    detail: &'a SolutionStep,
}

/// The scripted solution formatted for the headless `--solution` mode.
pub fn solution_report(format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let records: Vec<StepRecord> = SOLUTION
                .iter()
                .enumerate()
                .map(|(index, detail)| StepRecord {
                    step: index + 1,
                    detail,
                })
                .collect();
            serde_json::to_string_pretty(&records)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (index, step) in SOLUTION.iter().enumerate() {
                out.push_str(&format!(
                    "{:>2}. {:<42} [{}]  left {}/{} | right {}/{}  boat: {}\n",
                    index + 1,
                    step.description,
                    step.load,
                    step.left_bank.missionaries,
                    step.left_bank.cannibals,
                    step.right_bank.missionaries,
                    step.right_bank.cannibals,
                    step.boat_side.label(),
                ));
            }
            Ok(out)
        }
    }
}
