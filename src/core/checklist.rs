//! Per-subject progress ticks, shown on the menu screen.
//!
//! Plain clamped counters: left click adds a tick, right click removes
//! one, and the count always stays within `0..=MAX_TICKS`.

/// Upper bound on ticks per subject.
pub const MAX_TICKS: u8 = 8;

#[derive(Debug, Clone)]
pub struct Checklist {
    subjects: Vec<String>,
    ticks: Vec<u8>,
}

impl Checklist {
    pub fn new(subjects: Vec<String>) -> Self {
        let ticks = vec![0; subjects.len()];
        Self { subjects, ticks }
    }

    /// Rebuild from persisted tick counts. Counts are resized to the
    /// subject list and clamped so a stale snapshot can't break the
    /// `0..=MAX_TICKS` invariant.
    pub fn with_ticks(subjects: Vec<String>, mut ticks: Vec<u8>) -> Self {
        ticks.resize(subjects.len(), 0);
        for t in &mut ticks {
            *t = (*t).min(MAX_TICKS);
        }
        Self { subjects, ticks }
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn ticks(&self) -> &[u8] {
        &self.ticks
    }

    /// Add one tick. No-op at the cap or for an out-of-range index.
    pub fn increment(&mut self, index: usize) {
        if let Some(t) = self.ticks.get_mut(index)
            && *t < MAX_TICKS
        {
            *t += 1;
        }
    }

    /// Remove one tick. No-op at zero or for an out-of-range index.
    pub fn decrement(&mut self, index: usize) {
        if let Some(t) = self.ticks.get_mut(index)
            && *t > 0
        {
            *t -= 1;
        }
    }
}
