/*!
 * Selection Policies
 * Rank-driven runners: FCFS, SJF, Priority, SRTF, and Priority-Preemptive
 */

use crate::scheduler::selector::{Rank, ReadySet};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{Decision, Granularity, SchedulingPolicy};

/// Picks the best ready job by a fixed rank and serves it at a fixed granularity
///
/// Run-to-completion gives the non-preemptive family; single-tick dispatch
/// re-selects every tick and therefore preempts.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    kind: SchedulingPolicy,
    rank: Rank,
    granularity: Granularity,
}

impl Selection {
    pub const fn new(kind: SchedulingPolicy, rank: Rank, granularity: Granularity) -> Self {
        Self {
            kind,
            rank,
            granularity,
        }
    }

    /// Earliest arrival runs to completion (equivalent to a stable arrival sort)
    pub const fn fcfs() -> Self {
        Self::new(SchedulingPolicy::Fcfs, Rank::FirstCome, Granularity::ToCompletion)
    }

    pub const fn sjf() -> Self {
        Self::new(SchedulingPolicy::Sjf, Rank::ShortestJob, Granularity::ToCompletion)
    }

    pub const fn priority() -> Self {
        Self::new(
            SchedulingPolicy::Priority,
            Rank::HighestPriority,
            Granularity::ToCompletion,
        )
    }

    /// Shortest remaining time first
    pub const fn srtf() -> Self {
        Self::new(
            SchedulingPolicy::SjfPreemptive,
            Rank::ShortestRemaining,
            Granularity::Tick,
        )
    }

    pub const fn priority_preemptive() -> Self {
        Self::new(
            SchedulingPolicy::PriorityPreemptive,
            Rank::HighestPriorityById,
            Granularity::Tick,
        )
    }

    #[inline]
    pub fn is_preemptive(&self) -> bool {
        self.granularity == Granularity::Tick
    }
}

impl Policy for Selection {
    fn kind(&self) -> SchedulingPolicy {
        self.kind
    }

    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision {
        match ready.select(self.rank) {
            Some(index) => Decision::Dispatch {
                index,
                granularity: self.granularity,
            },
            None => Decision::Idle,
        }
    }
}
