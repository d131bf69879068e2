//! # Core Game Logic
//!
//! This module contains River Escape's puzzle logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Rules (pure fns)     │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Headless  │
//!     │  Adapter   │                          │ --solution │
//!     │ (ratatui)  │                          │   (main)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rules`]: Board types, `is_valid`, `is_won`, `apply_move`, `judge`
//! - [`solution`]: The scripted 11-step solution and its BFS cross-check
//! - [`state`]: The `App` struct; all game state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered settings (defaults, file, env, CLI)

pub mod action;
pub mod config;
pub mod rules;
pub mod solution;
pub mod state;
