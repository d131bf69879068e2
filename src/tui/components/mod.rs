//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that borrow everything they need as props:
//! - `TitleBar`: title, difficulty badge, move counter, status banner
//! - `River`: banks, water and boat
//! - `HintPanel`: next move of the optimal solution
//! - `MoveButton`, `RulesCard`: controls and rules
//! - `OutcomeModal`: end-of-game announcement (also handles its keys)
//!
//! ### Stateful Components
//!
//! - `ToastStack`: notifications with expiry; `ToastStackState` lives in `TuiState`
//!
//! ### Event Handlers
//!
//! `KeyMap` and `OutcomeModal` implement `EventHandler<Event = Action>`,
//! so key handling sits next to the component it belongs to and produces
//! core actions directly.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Header and status)
//! ├── river.rs       (Playing field + click hit testing)
//! ├── hint_panel.rs  (Hints)
//! ├── controls.rs    (Move button, rules, key map)
//! ├── toast.rs       (Notifications)
//! └── outcome.rs     (Outcome modal)
//! ```

pub mod controls;
pub mod hint_panel;
pub mod outcome;
pub mod river;
pub mod title_bar;
pub mod toast;

pub use controls::{KeyMap, MoveButton, RulesCard};
pub use hint_panel::HintPanel;
pub use outcome::OutcomeModal;
pub use river::{River, RiverLayout};
pub use title_bar::TitleBar;
pub use toast::{ToastStack, ToastStackState};
