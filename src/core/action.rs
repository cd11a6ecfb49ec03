//! # Actions
//!
//! Everything that can happen in Taskdeck becomes an `Action`.
//! User clicks a day cell? That's `Action::SelectDay(index)`.
//! Types a character into a slot? That's `Action::InputChar(c)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: feed actions, assert on the state.

use chrono::{NaiveDate, NaiveTime};

use crate::core::board::BoardColumn;
use crate::core::state::{App, EditTarget, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Screen transitions (menu buttons and back regions)
    OpenTasks,
    OpenCalendar,
    OpenToday,
    Back,

    // Menu screen
    RefreshNow { date: NaiveDate, time: NaiveTime },
    TickIncrement(usize),
    TickDecrement(usize),

    // Calendar screen
    PrevMonth,
    NextMonth,
    SelectDay(usize),
    SelectSlot(usize),

    // Tasks screen
    SelectCell { column: BoardColumn, row: usize },
    ClearCell { column: BoardColumn, row: usize },

    // Text editing (routed by the active focus)
    InputChar(char),
    Backspace,
    StopEditing,

    Quit,
}

/// What the TUI loop must do after an `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,

        Action::OpenTasks if app.screen == Screen::Menu => {
            app.screen = Screen::Tasks;
            app.status_message = String::from("Left click edits, right click clears");
        }
        Action::OpenCalendar if app.screen == Screen::Menu => {
            app.screen = Screen::Calendar;
            app.status_message = String::from("Click a day; arrow keys change month");
        }
        Action::OpenToday if app.screen == Screen::Menu => {
            app.screen = Screen::Today;
            app.status_message = String::new();
        }
        Action::OpenTasks | Action::OpenCalendar | Action::OpenToday => {}

        // Back is gated on not editing, like the original's back buttons.
        Action::Back => {
            if app.focus.is_none() {
                match app.screen {
                    Screen::CalendarDay => {
                        app.calendar.deselect_day();
                        app.screen = Screen::Calendar;
                    }
                    Screen::Tasks | Screen::Calendar | Screen::Today => {
                        app.screen = Screen::Menu;
                        app.status_message = String::new();
                    }
                    Screen::Menu => {}
                }
            }
        }

        Action::RefreshNow { date, time } => app.refresh_now(date, time),
        Action::TickIncrement(i) if app.screen == Screen::Menu => app.checklist.increment(i),
        Action::TickDecrement(i) if app.screen == Screen::Menu => app.checklist.decrement(i),
        Action::TickIncrement(_) | Action::TickDecrement(_) => {}

        Action::PrevMonth if app.screen == Screen::Calendar && app.focus.is_none() => {
            app.calendar.prev_month();
        }
        Action::NextMonth if app.screen == Screen::Calendar && app.focus.is_none() => {
            app.calendar.next_month();
        }
        Action::PrevMonth | Action::NextMonth => {}

        Action::SelectDay(day) if app.screen == Screen::Calendar => {
            if app.calendar.select_day(day) {
                app.screen = Screen::CalendarDay;
            }
        }
        Action::SelectDay(_) => {}

        Action::SelectSlot(slot) if app.screen == Screen::CalendarDay => {
            if app.calendar.select_slot(slot) {
                app.focus = Some(EditTarget::CalendarSlot);
            }
        }
        Action::SelectSlot(_) => {}

        Action::SelectCell { column, row } if app.screen == Screen::Tasks => {
            if row < app.board.rows() {
                app.focus = Some(EditTarget::BoardCell { column, row });
            }
        }
        Action::SelectCell { .. } => {}

        Action::ClearCell { column, row } if app.screen == Screen::Tasks => {
            app.board.clear(column, row);
        }
        Action::ClearCell { .. } => {}

        Action::InputChar(c) => match app.focus {
            Some(EditTarget::CalendarSlot) => app.calendar.push_char(c),
            Some(EditTarget::BoardCell { column, row }) => app.board.push_char(column, row, c),
            None => {}
        },
        Action::Backspace => match app.focus {
            Some(EditTarget::CalendarSlot) => app.calendar.pop_char(),
            Some(EditTarget::BoardCell { column, row }) => app.board.pop_char(column, row),
            None => {}
        },
        Action::StopEditing => {
            app.focus = None;
            app.calendar.deselect_slot();
        }
    }
    Effect::None
}
