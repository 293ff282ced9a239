/*!
 * Scheduling Policies
 * One configuration of the simulation driver per named policy
 */

pub mod mlfq;
pub mod mlq;
pub mod selection;
pub mod sweep;

pub use mlfq::FeedbackQueue;
pub use mlq::MultiLevelQueue;
pub use selection::Selection;
pub use sweep::RoundRobin;

use super::traits::Policy;
use super::types::{Quantum, SchedulingPolicy};

/// Build a fresh policy instance for `kind`
pub fn build(kind: SchedulingPolicy) -> Box<dyn Policy> {
    match kind {
        SchedulingPolicy::Fcfs => Box::new(Selection::fcfs()),
        SchedulingPolicy::Sjf => Box::new(Selection::sjf()),
        SchedulingPolicy::SjfPreemptive => Box::new(Selection::srtf()),
        SchedulingPolicy::Priority => Box::new(Selection::priority()),
        SchedulingPolicy::PriorityPreemptive => Box::new(Selection::priority_preemptive()),
        SchedulingPolicy::RoundRobin => Box::new(RoundRobin::new(Quantum::DEFAULT)),
        SchedulingPolicy::MultiLevelQueue => Box::new(MultiLevelQueue::new(Quantum::DEFAULT)),
        SchedulingPolicy::MultiLevelFeedback => Box::new(FeedbackQueue::new()),
    }
}
