//! # TUI Components
//!
//! One transient render wrapper per screen, built each frame from a
//! borrowed `&App`. Geometry comes from the `ui` region functions so
//! these stay in lockstep with hit testing.

mod board_view;
mod calendar_view;
mod menu;

pub use board_view::BoardView;
pub use calendar_view::{DayWindow, MonthGrid};
pub use menu::MenuView;
