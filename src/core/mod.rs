//! # Core
//!
//! Domain state and logic, independent of any rendering concern.
//! Nothing in here imports ratatui or crossterm; the `tui` module owns
//! the terminal and drives this layer through `action::update`.
//!
//! - `timetable`: notation parsing and the now/next evaluator
//! - `calendar`: the plan-year day table and its selection cursor
//! - `checklist`: clamped per-subject tick counters
//! - `board`: the parallel task/notes lists
//! - `snapshot`: the single-file JSON persistence of all of the above
//! - `config`: TOML configuration and resolution
//! - `state` / `action`: the `App` aggregate and its pure update function

pub mod action;
pub mod board;
pub mod calendar;
pub mod checklist;
pub mod config;
pub mod snapshot;
pub mod state;
pub mod timetable;
