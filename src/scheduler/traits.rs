/*!
 * Scheduler Traits
 * Interface between scheduling policies and the simulation driver
 */

use super::selector::ReadySet;
use super::types::{Decision, SchedulingPolicy};

/// A scheduling policy driven by [`super::Simulation`]
///
/// The driver owns the clock and the job records. A policy only observes them
/// through a [`ReadySet`] and answers with a [`Decision`]; the driver applies it,
/// then reports the outcome back through [`Policy::dispatched`].
pub trait Policy {
    /// Which named policy this is (for logs and reports)
    fn kind(&self) -> SchedulingPolicy;

    /// Drop any state left from a previous run
    fn reset(&mut self) {}

    /// Choose the next dispatch, or idle
    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision;

    /// Called after the job at `index` was served; `ready` reflects the advanced clock
    fn dispatched(&mut self, _ready: &ReadySet<'_>, _index: usize, _finished: bool) {}
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn kind(&self) -> SchedulingPolicy {
        (**self).kind()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision {
        (**self).decide(ready)
    }

    fn dispatched(&mut self, ready: &ReadySet<'_>, index: usize, finished: bool) {
        (**self).dispatched(ready, index, finished)
    }
}
