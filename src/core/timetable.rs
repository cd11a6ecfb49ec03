//! # Timetable
//!
//! Parses the `t-HHMM-Label--t-HHMM-Label--...` notation into an ordered
//! list of entries and answers "what am I doing now, and what is next?"
//! for a given clock time.
//!
//! Times are parsed with chrono and compared as `NaiveTime` values. The
//! hand-rolled 12/24-hour string slicing this replaces broke down around
//! noon and midnight; 12-hour rendering now only exists at the display
//! layer via chrono formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};

/// Which timetable applies to a given day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
    Intervention,
}

impl DayType {
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
            DayType::Intervention => "Intervention",
        }
    }
}

/// Day-of-week classification rules. Any day not listed as weekend or
/// intervention is a plain weekday.
#[derive(Debug, Clone)]
pub struct DayTypeRules {
    pub weekend: Vec<Weekday>,
    pub intervention: Vec<Weekday>,
}

impl DayTypeRules {
    pub fn classify(&self, day: Weekday) -> DayType {
        if self.intervention.contains(&day) {
            DayType::Intervention
        } else if self.weekend.contains(&day) {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }

    /// Parse day names ("Wednesday", "sat", ...) into rules.
    pub fn from_names(weekend: &[String], intervention: &[String]) -> Result<Self, TimetableError> {
        let parse = |names: &[String]| -> Result<Vec<Weekday>, TimetableError> {
            names
                .iter()
                .map(|n| Weekday::from_str(n).map_err(|_| TimetableError::Day(n.clone())))
                .collect()
        };
        Ok(Self {
            weekend: parse(weekend)?,
            intervention: parse(intervention)?,
        })
    }
}

/// A single timetabled activity: a start time and a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableEntry {
    pub at: NaiveTime,
    pub label: String,
}

/// Ordered activity list for one day-type.
///
/// Invariant: entries are strictly ascending by time. `parse` rejects
/// notation that violates this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
}

/// Result of evaluating a timetable against a clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView {
    /// Between two entries: `current` started already, `next` starts at `next_at`.
    Between {
        current: String,
        next: String,
        next_at: NaiveTime,
    },
    /// Before the first entry or at/after the last one.
    Sleeping,
}

#[derive(Debug)]
pub enum TimetableError {
    /// An entry did not match the `t-HHMM-Label` shape.
    Entry(String),
    /// The HHMM field did not parse as a time of day.
    Time(String),
    /// Entries were not strictly ascending by time.
    OutOfOrder { prev: NaiveTime, next: NaiveTime },
    /// A day name in the classification lists was not a weekday name.
    Day(String),
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::Entry(raw) => write!(f, "malformed timetable entry: {raw:?}"),
            TimetableError::Time(raw) => write!(f, "invalid time of day: {raw:?}"),
            TimetableError::OutOfOrder { prev, next } => {
                write!(f, "timetable entries out of order: {prev} then {next}")
            }
            TimetableError::Day(name) => write!(f, "unknown day name: {name:?}"),
        }
    }
}

impl std::error::Error for TimetableError {}

impl Timetable {
    /// Parse `t-HHMM-Label--t-HHMM-Label--...` notation.
    pub fn parse(notation: &str) -> Result<Self, TimetableError> {
        let mut entries = Vec::new();
        for raw in notation.split("--").filter(|s| !s.is_empty()) {
            entries.push(parse_entry(raw)?);
        }
        for pair in entries.windows(2) {
            if pair[1].at <= pair[0].at {
                return Err(TimetableError::OutOfOrder {
                    prev: pair[0].at,
                    next: pair[1].at,
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Find the current and next activity for a clock time.
    ///
    /// Returns `Sleeping` before the first entry and at or after the
    /// last one; otherwise the entry in progress plus the upcoming one.
    pub fn evaluate(&self, now: NaiveTime) -> SlotView {
        let Some(first) = self.entries.first() else {
            return SlotView::Sleeping;
        };
        if now < first.at {
            return SlotView::Sleeping;
        }
        for pair in self.entries.windows(2) {
            if now < pair[1].at {
                return SlotView::Between {
                    current: pair[0].label.clone(),
                    next: pair[1].label.clone(),
                    next_at: pair[1].at,
                };
            }
        }
        SlotView::Sleeping
    }
}

fn parse_entry(raw: &str) -> Result<TimetableEntry, TimetableError> {
    let rest = raw
        .strip_prefix("t-")
        .ok_or_else(|| TimetableError::Entry(raw.to_string()))?;
    let (digits, tail) = rest
        .split_at_checked(4)
        .ok_or_else(|| TimetableError::Entry(raw.to_string()))?;
    let label = tail
        .strip_prefix('-')
        .ok_or_else(|| TimetableError::Entry(raw.to_string()))?;
    if label.is_empty() {
        return Err(TimetableError::Entry(raw.to_string()));
    }
    let at = NaiveTime::parse_from_str(digits, "%H%M")
        .map_err(|_| TimetableError::Time(digits.to_string()))?;
    Ok(TimetableEntry {
        at,
        label: label.to_string(),
    })
}

/// One parsed timetable per day-type.
#[derive(Debug, Clone)]
pub struct Timetables {
    pub weekday: Timetable,
    pub weekend: Timetable,
    pub intervention: Timetable,
}

impl Timetables {
    pub fn get(&self, day_type: DayType) -> &Timetable {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
            DayType::Intervention => &self.intervention,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAY: &str = "t-0630-Wake up for school.--t-1500-lunch/games.--t-1600-Start to code/HW.--t-1800-Start study.--t-2100-Have dinner.--t-2300-Sleep.";

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_full_notation() {
        let tt = Timetable::parse(WEEKDAY).unwrap();
        assert_eq!(tt.entries().len(), 6);
        assert_eq!(tt.entries()[0].at, t(6, 30));
        assert_eq!(tt.entries()[0].label, "Wake up for school.");
        assert_eq!(tt.entries()[5].at, t(23, 0));
    }

    #[test]
    fn test_label_may_contain_dashes_and_slashes() {
        let tt = Timetable::parse("t-0900-Warm-up / stretch.--t-1000-Done.").unwrap();
        assert_eq!(tt.entries()[0].label, "Warm-up / stretch.");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            Timetable::parse("0900-No prefix."),
            Err(TimetableError::Entry(_))
        ));
        assert!(matches!(
            Timetable::parse("t-9am-Breakfast."),
            Err(TimetableError::Time(_)) | Err(TimetableError::Entry(_))
        ));
        assert!(matches!(
            Timetable::parse("t-2500-Impossible."),
            Err(TimetableError::Time(_))
        ));
        assert!(matches!(
            Timetable::parse("t-0900-"),
            Err(TimetableError::Entry(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_order_entries() {
        assert!(matches!(
            Timetable::parse("t-1500-Later.--t-0900-Earlier."),
            Err(TimetableError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn test_before_first_entry_is_sleeping() {
        let tt = Timetable::parse(WEEKDAY).unwrap();
        assert_eq!(tt.evaluate(t(0, 0)), SlotView::Sleeping);
        assert_eq!(tt.evaluate(t(6, 29)), SlotView::Sleeping);
    }

    #[test]
    fn test_at_or_after_last_entry_is_sleeping() {
        let tt = Timetable::parse(WEEKDAY).unwrap();
        assert_eq!(tt.evaluate(t(23, 0)), SlotView::Sleeping);
        assert_eq!(tt.evaluate(t(23, 59)), SlotView::Sleeping);
    }

    #[test]
    fn test_now_next_mid_morning() {
        // Worked example: 07:00 on a weekday.
        let tt = Timetable::parse(WEEKDAY).unwrap();
        assert_eq!(
            tt.evaluate(t(7, 0)),
            SlotView::Between {
                current: "Wake up for school.".to_string(),
                next: "lunch/games.".to_string(),
                next_at: t(15, 0),
            }
        );
    }

    #[test]
    fn test_noon_boundary() {
        let tt = Timetable::parse("t-1100-Morning.--t-1200-Midday.--t-1300-Afternoon.").unwrap();
        assert_eq!(
            tt.evaluate(t(12, 0)),
            SlotView::Between {
                current: "Midday.".to_string(),
                next: "Afternoon.".to_string(),
                next_at: t(13, 0),
            }
        );
    }

    #[test]
    fn test_entry_start_time_is_inclusive() {
        let tt = Timetable::parse(WEEKDAY).unwrap();
        assert_eq!(
            tt.evaluate(t(6, 30)),
            SlotView::Between {
                current: "Wake up for school.".to_string(),
                next: "lunch/games.".to_string(),
                next_at: t(15, 0),
            }
        );
    }

    #[test]
    fn test_empty_timetable_is_always_sleeping() {
        let tt = Timetable::parse("").unwrap();
        assert_eq!(tt.evaluate(t(12, 0)), SlotView::Sleeping);
    }

    #[test]
    fn test_classify_days() {
        let rules = DayTypeRules::from_names(
            &["Saturday".into(), "Sunday".into()],
            &["Wednesday".into()],
        )
        .unwrap();
        assert_eq!(rules.classify(Weekday::Mon), DayType::Weekday);
        assert_eq!(rules.classify(Weekday::Wed), DayType::Intervention);
        assert_eq!(rules.classify(Weekday::Sat), DayType::Weekend);
        assert_eq!(rules.classify(Weekday::Sun), DayType::Weekend);
    }

    #[test]
    fn test_classify_rejects_unknown_day_name() {
        let err = DayTypeRules::from_names(&["Caturday".into()], &[]).unwrap_err();
        assert!(matches!(err, TimetableError::Day(_)));
    }
}
