//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, NaiveTime};

use crate::core::config::{TaskdeckConfig, resolve};
use crate::core::snapshot::Snapshot;
use crate::core::state::App;

/// Fixed clock for tests: Monday 2024-06-10 at 07:00.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

pub fn test_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap()
}

/// Creates a test App from the default config with an empty snapshot.
pub fn test_app() -> App {
    let resolved = resolve(&TaskdeckConfig::default(), None).expect("default config resolves");
    App::from_config(&resolved, Snapshot::default(), test_date(), test_time())
}
