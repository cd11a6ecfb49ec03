//! # Calendar
//!
//! A fixed plan year where every day carries six editable task slots.
//! Days exist for the whole year up front and are only ever mutated,
//! never created or destroyed.
//!
//! The selection cursor is two-level: a day must be selected before a
//! slot within it can be, and text editing only reaches the selected
//! (day, slot) pair. Month navigation clamps at January and December
//! rather than wrapping into another year.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Task slots per calendar day (fixed arity).
pub const SLOTS_PER_DAY: usize = 6;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The six task-slot strings for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTasks {
    pub slots: [String; SLOTS_PER_DAY],
}

impl Default for DayTasks {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| String::new()),
        }
    }
}

/// Every day of the plan year, grouped by month (index 0 = January).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearData {
    pub months: Vec<Vec<DayTasks>>,
}

impl YearData {
    pub fn empty(year: i32) -> Self {
        let months = (1..=12)
            .map(|m| vec![DayTasks::default(); days_in_month(year, m)])
            .collect();
        Self { months }
    }

    /// Resize to the exact shape of `year`, filling gaps with blank days.
    /// Keeps a snapshot saved under a different year (or leap shape) from
    /// indexing out of range.
    pub fn conform(&mut self, year: i32) {
        self.months.resize(12, Vec::new());
        for (i, month) in self.months.iter_mut().enumerate() {
            month.resize(days_in_month(year, i as u32 + 1), DayTasks::default());
        }
    }
}

/// Number of days in a month of the given year.
pub fn days_in_month(year: i32, month: u32) -> usize {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(ny, nm, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as usize,
        _ => 0,
    }
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub year: i32,
    /// Visible month, 1..=12.
    pub month: u32,
    pub data: YearData,
    /// 0-based day index within the visible month.
    pub selected_day: Option<usize>,
    /// 0-based slot index within the selected day.
    pub selected_slot: Option<usize>,
}

impl CalendarState {
    pub fn new(year: i32, data: YearData, start_month: u32) -> Self {
        Self {
            year,
            month: start_month.clamp(1, 12),
            data,
            selected_day: None,
            selected_slot: None,
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Days in the visible month.
    pub fn days_in_view(&self) -> usize {
        days_in_month(self.year, self.month)
    }

    /// Weekday of a 0-based day index in the visible month.
    pub fn weekday_of(&self, day: usize) -> Option<Weekday> {
        NaiveDate::from_ymd_opt(self.year, self.month, day as u32 + 1).map(|d| d.weekday())
    }

    pub fn prev_month(&mut self) {
        if self.month > 1 {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month < 12 {
            self.month += 1;
        }
    }

    /// Select a day in the visible month. Returns false (and leaves the
    /// cursor unchanged) if the index is out of range.
    pub fn select_day(&mut self, day: usize) -> bool {
        if day < self.days_in_view() {
            self.selected_day = Some(day);
            self.selected_slot = None;
            true
        } else {
            false
        }
    }

    /// Select a slot of the selected day. A slot can only be selected
    /// while a day is.
    pub fn select_slot(&mut self, slot: usize) -> bool {
        if self.selected_day.is_some() && slot < SLOTS_PER_DAY {
            self.selected_slot = Some(slot);
            true
        } else {
            false
        }
    }

    pub fn deselect_slot(&mut self) {
        self.selected_slot = None;
    }

    pub fn deselect_day(&mut self) {
        self.selected_day = None;
        self.selected_slot = None;
    }

    /// Slots of a 0-based day in the visible month.
    pub fn day_slots(&self, day: usize) -> Option<&[String; SLOTS_PER_DAY]> {
        self.data
            .months
            .get(self.month as usize - 1)
            .and_then(|m| m.get(day))
            .map(|d| &d.slots)
    }

    /// Slots of an arbitrary (month, day) pair, both 0-based. Used by the
    /// Today screen, which may be looking at a month other than the
    /// visible one.
    pub fn slots_at(&self, month0: usize, day0: usize) -> Option<&[String; SLOTS_PER_DAY]> {
        self.data
            .months
            .get(month0)
            .and_then(|m| m.get(day0))
            .map(|d| &d.slots)
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(cell) = self.selected_cell_mut() {
            cell.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(cell) = self.selected_cell_mut() {
            cell.pop();
        }
    }

    fn selected_cell_mut(&mut self) -> Option<&mut String> {
        let (day, slot) = (self.selected_day?, self.selected_slot?);
        self.data
            .months
            .get_mut(self.month as usize - 1)
            .and_then(|m| m.get_mut(day))
            .and_then(|d| d.slots.get_mut(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> CalendarState {
        CalendarState::new(2024, YearData::empty(2024), 6)
    }

    #[test]
    fn test_year_shape() {
        let data = YearData::empty(2024);
        assert_eq!(data.months.len(), 12);
        assert_eq!(data.months[0].len(), 31);
        assert_eq!(data.months[1].len(), 29); // 2024 is a leap year
        assert_eq!(data.months[3].len(), 30);
    }

    #[test]
    fn test_non_leap_february() {
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn test_month_navigation_clamps_at_year_boundaries() {
        let mut cal = calendar();
        cal.month = 1;
        cal.prev_month();
        assert_eq!(cal.month, 1);
        cal.month = 12;
        cal.next_month();
        assert_eq!(cal.month, 12);
    }

    #[test]
    fn test_slot_requires_selected_day() {
        let mut cal = calendar();
        assert!(!cal.select_slot(0));
        assert!(cal.select_day(9));
        assert!(cal.select_slot(2));
        assert_eq!(cal.selected_slot, Some(2));
    }

    #[test]
    fn test_select_day_out_of_range() {
        let mut cal = calendar();
        assert!(!cal.select_day(30)); // June has 30 days, max index 29
        assert!(cal.select_day(29));
    }

    #[test]
    fn test_edit_mutates_only_the_selected_pair() {
        let mut cal = calendar();
        cal.select_day(9);
        cal.select_slot(1);
        cal.push_char('a');
        cal.push_char('b');

        for (mi, month) in cal.data.months.iter().enumerate() {
            for (di, day) in month.iter().enumerate() {
                for (si, slot) in day.slots.iter().enumerate() {
                    if (mi, di, si) == (5, 9, 1) {
                        assert_eq!(slot, "ab");
                    } else {
                        assert!(slot.is_empty(), "unexpected edit at {mi}/{di}/{si}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_edit_without_selection_is_noop() {
        let mut cal = calendar();
        cal.push_char('x');
        cal.select_day(0);
        cal.push_char('x'); // day selected but no slot
        assert!(cal.data.months.iter().flatten().all(|d| d
            .slots
            .iter()
            .all(String::is_empty)));
    }

    #[test]
    fn test_pop_char() {
        let mut cal = calendar();
        cal.select_day(0);
        cal.select_slot(0);
        cal.push_char('h');
        cal.push_char('i');
        cal.pop_char();
        assert_eq!(cal.day_slots(0).unwrap()[0], "h");
        cal.pop_char();
        cal.pop_char(); // popping an empty slot is fine
        assert_eq!(cal.day_slots(0).unwrap()[0], "");
    }

    #[test]
    fn test_deselect_day_clears_slot() {
        let mut cal = calendar();
        cal.select_day(3);
        cal.select_slot(4);
        cal.deselect_day();
        assert_eq!(cal.selected_day, None);
        assert_eq!(cal.selected_slot, None);
    }

    #[test]
    fn test_weekday_of() {
        let cal = calendar();
        // 2024-06-10 is a Monday.
        assert_eq!(cal.weekday_of(9), Some(Weekday::Mon));
    }

    #[test]
    fn test_conform_resizes_stale_data() {
        let mut data = YearData::empty(2024);
        data.months[1].truncate(10);
        data.months.pop();
        data.conform(2024);
        assert_eq!(data.months.len(), 12);
        assert_eq!(data.months[1].len(), 29);
        assert_eq!(data.months[11].len(), 31);
    }
}
