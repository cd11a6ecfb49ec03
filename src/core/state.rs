//! # Application State
//!
//! Core business state for Taskdeck. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── screen: Screen            // which view is active
//! ├── focus: Option<EditTarget> // where keyboard input goes
//! ├── timetables: Timetables    // parsed per-day-type timetables
//! ├── rules: DayTypeRules       // weekday/weekend/intervention split
//! ├── now_next: SlotView        // last timetable evaluation
//! ├── today: NaiveDate          // clock date at startup / last refresh
//! ├── calendar: CalendarState   // plan-year day table + cursor
//! ├── checklist: Checklist      // subject ticks
//! ├── board: Board              // task/notes lists
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::core::board::{Board, BoardColumn};
use crate::core::calendar::CalendarState;
use crate::core::checklist::Checklist;
use crate::core::config::ResolvedConfig;
use crate::core::snapshot::Snapshot;
use crate::core::timetable::{DayTypeRules, SlotView, Timetables};

/// The finite screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Tasks,
    Calendar,
    /// Detail view for one calendar day (the "day window").
    CalendarDay,
    Today,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Tasks => "Tasks",
            Screen::Calendar => "Calendar",
            Screen::CalendarDay => "Day",
            Screen::Today => "Today",
        }
    }
}

/// Where typed characters land while editing is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A cell on the task/notes board.
    BoardCell { column: BoardColumn, row: usize },
    /// The selected slot of the selected calendar day.
    CalendarSlot,
}

pub struct App {
    pub screen: Screen,
    pub focus: Option<EditTarget>,
    pub timetables: Timetables,
    pub rules: DayTypeRules,
    pub now_next: SlotView,
    pub today: NaiveDate,
    pub calendar: CalendarState,
    pub checklist: Checklist,
    pub board: Board,
    pub status_message: String,
}

impl App {
    /// Build the app from resolved config plus the loaded snapshot.
    /// The snapshot is conformed to the config's dimensions first.
    pub fn from_config(
        config: &ResolvedConfig,
        mut snapshot: Snapshot,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Self {
        snapshot.conform(config.plan_year, config.subjects.len(), config.board_rows);

        let start_month = if today.year() == config.plan_year {
            today.month()
        } else {
            1
        };
        let day_type = config.rules.classify(today.weekday());
        let now_next = config.timetables.get(day_type).evaluate(now);

        Self {
            screen: Screen::Menu,
            focus: None,
            timetables: config.timetables.clone(),
            rules: config.rules.clone(),
            now_next,
            today,
            calendar: CalendarState::new(config.plan_year, snapshot.calendar, start_month),
            checklist: Checklist::with_ticks(config.subjects.clone(), snapshot.ticks),
            board: Board::from_parts(config.board_rows, snapshot.tasks, snapshot.notes),
            status_message: String::from("Welcome to Taskdeck!"),
        }
    }

    /// Re-evaluate the timetable against the clock (clicking the NOW
    /// panel does this).
    pub fn refresh_now(&mut self, today: NaiveDate, now: NaiveTime) {
        self.today = today;
        let day_type = self.rules.classify(today.weekday());
        self.now_next = self.timetables.get(day_type).evaluate(now);
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    /// Today's (month, day) as 0-based indices into the calendar data,
    /// or None if today falls outside the plan year.
    pub fn today_indices(&self) -> Option<(usize, usize)> {
        if self.today.year() == self.calendar.year {
            Some((
                self.today.month0() as usize,
                self.today.day0() as usize,
            ))
        } else {
            None
        }
    }

    /// Assemble the persistable snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ticks: self.checklist.ticks().to_vec(),
            calendar: self.calendar.data.clone(),
            tasks: self.board.tasks().to_vec(),
            notes: self.board.notes().to_vec(),
        }
    }
}
