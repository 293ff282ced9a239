/*!
 * Process Types
 * Job records and the lane categories they are scheduled under
 */

use crate::core::types::{JobId, Priority, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lane / priority class of a job
///
/// Ordering follows scheduling importance: `Background < Regular < Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Background,
    Regular,
    Urgent,
}

impl Category {
    /// All categories, highest lane first
    pub const LANES: [Category; 3] = [Category::Urgent, Category::Regular, Category::Background];

    /// Normalize a raw transaction type into a lane
    ///
    /// Canonical names map to themselves, banking aliases map to their lane,
    /// and anything else (including a missing value) falls back to `Regular`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Regular;
        };

        match raw.trim().to_lowercase().as_str() {
            "urgent" | "rtgs" | "fraud" => Self::Urgent,
            "regular" | "upi" | "neft" | "atm" => Self::Regular,
            "background" | "emi" | "cheque" => Self::Background,
            _ => Self::Regular,
        }
    }

    /// Numeric weight, higher wins
    #[inline(always)]
    #[must_use]
    pub const fn priority(&self) -> Priority {
        match self {
            Self::Urgent => 2,
            Self::Regular => 1,
            Self::Background => 0,
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Regular => "regular",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable simulation state for one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub category: Category,
    /// Derived from `category` at construction, never recomputed
    pub priority: Priority,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
    pub finished: bool,
}

impl Job {
    #[must_use]
    pub fn new(id: JobId, arrival: Ticks, burst: Ticks, category: Category) -> Self {
        Self {
            id,
            arrival,
            burst,
            remaining: burst,
            category,
            priority: category.priority(),
            completion: 0,
            turnaround: 0,
            waiting: 0,
            finished: false,
        }
    }

    /// Restore the pre-run state so the job can be simulated again
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.finished = false;
        self.completion = 0;
        self.turnaround = 0;
        self.waiting = 0;
    }

    /// Eligible to run at `clock`
    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self, clock: Ticks) -> bool {
        !self.finished && self.arrival <= clock
    }

    /// Consume up to `ticks` of service, returning the ticks actually used
    pub fn serve(&mut self, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining);
        self.remaining -= used;
        used
    }

    /// Record completion at `clock` and derive turnaround and waiting
    pub fn finish(&mut self, clock: Ticks) {
        debug_assert!(!self.finished, "job {} finished twice", self.id);
        debug_assert!(clock >= self.arrival, "job {} completed before arrival", self.id);

        self.remaining = 0;
        self.completion = clock;
        self.turnaround = clock - self.arrival;
        debug_assert!(self.turnaround >= self.burst, "job {} served too fast", self.id);
        self.waiting = self.turnaround.saturating_sub(self.burst);
        self.finished = true;
    }
}

/// Reset every job in the batch
pub fn reset_all(jobs: &mut [Job]) {
    jobs.iter_mut().for_each(Job::reset);
}
