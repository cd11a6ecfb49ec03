//! # Snapshot Persistence
//!
//! The whole user-entered state (checklist ticks, calendar day data,
//! and the task/notes board) is one JSON file, read entirely at
//! startup and written entirely at shutdown.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. A missing or empty file yields the default snapshot; a
//! corrupt one is a fatal load error, there is no recovery logic.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::calendar::YearData;
use crate::core::checklist::MAX_TICKS;

/// Everything persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ticks: Vec<u8>,
    pub calendar: YearData,
    pub tasks: Vec<String>,
    pub notes: Vec<String>,
}

impl Snapshot {
    /// Resize every collection to the current configuration so a file
    /// saved under an older config can't index out of range. Tick counts
    /// are clamped back into `0..=MAX_TICKS`.
    pub fn conform(&mut self, plan_year: i32, subject_count: usize, board_rows: usize) {
        self.ticks.resize(subject_count, 0);
        for t in &mut self.ticks {
            *t = (*t).min(MAX_TICKS);
        }
        self.calendar.conform(plan_year);
        self.tasks.resize(board_rows, String::new());
        self.notes.resize(board_rows, String::new());
    }
}

/// Load the snapshot from `path`.
///
/// Missing or empty file → `Snapshot::default()`. Unparseable contents
/// → `InvalidData` error, which callers treat as fatal.
pub fn load(path: &Path) -> io::Result<Snapshot> {
    if !path.exists() {
        log::info!("No snapshot at {}, starting empty", path.display());
        return Ok(Snapshot::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        log::info!("Empty snapshot at {}, starting empty", path.display());
        return Ok(Snapshot::default());
    }
    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the snapshot to `path`, replacing prior contents.
pub fn save(path: &Path, snapshot: &Snapshot) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    log::debug!("Snapshot saved to {}", path.display());
    Ok(())
}
