/*!
 * Scheduler Module
 * Discrete-time simulation of eight CPU scheduling policies over a job batch
 */

pub mod policies;
pub mod selector;
pub mod traits;
pub mod types;

mod operations;
mod stats;

use crate::core::types::Ticks;
use crate::process::Job;

// Re-export public API
pub use policies::{build, FeedbackQueue, MultiLevelQueue, RoundRobin, Selection};
pub use selector::{Rank, ReadySet};
pub use stats::{RunReport, RunStats, ScheduleSummary};
pub use traits::Policy;
pub use types::{Decision, Granularity, Quantum, SchedulingPolicy, Segment, FEEDBACK_QUANTA};

/// Simulation driver
///
/// Owns the job batch and the simulated clock. Every run starts by resetting
/// the batch, so one `Simulation` can replay the same input under any number
/// of policies.
#[derive(Debug, Clone)]
pub struct Simulation {
    jobs: Vec<Job>,
    clock: Ticks,
    /// Unfinished jobs left in the current run
    pending: usize,
    stats: RunStats,
    timeline: Vec<Segment>,
    /// Last dispatched position and whether it was a single-tick dispatch
    last_dispatch: Option<(usize, bool)>,
}

impl Simulation {
    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        let pending = jobs.len();
        Self {
            jobs,
            clock: 0,
            pending,
            stats: RunStats::default(),
            timeline: Vec::new(),
            last_dispatch: None,
        }
    }

    /// Job records in input order
    #[inline]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }

    /// Clock value at the end of the last run
    #[inline]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl From<Vec<Job>> for Simulation {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}
