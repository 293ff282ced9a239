/*!
 * Multi-Level Feedback Queue
 * Three demotion levels with quanta 3, 6, and run-to-completion
 */

use crate::process::LevelQueues;
use crate::scheduler::selector::ReadySet;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{Decision, Granularity, SchedulingPolicy, FEEDBACK_QUANTA};

/// Feedback queue over [`LevelQueues`]
///
/// Arrivals enter level 0 in batch order. A job that exhausts its slice moves
/// one level down; it stays a member while dispatched, so an arrival scan
/// between dispatch and demotion can never queue it twice.
#[derive(Debug, Clone)]
pub struct FeedbackQueue {
    queues: LevelQueues,
    /// Level and batch position of the job currently dispatched
    in_flight: Option<(usize, usize)>,
}

impl FeedbackQueue {
    pub fn new() -> Self {
        Self {
            queues: LevelQueues::new(FEEDBACK_QUANTA.len()),
            in_flight: None,
        }
    }

    fn admit_arrivals(&mut self, ready: &ReadySet<'_>) {
        for (index, _) in ready.ready() {
            self.queues.admit(index);
        }
    }
}

impl Default for FeedbackQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for FeedbackQueue {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::MultiLevelFeedback
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision {
        self.admit_arrivals(ready);

        match self.queues.pop_highest() {
            Some((level, index)) => {
                self.in_flight = Some((level, index));
                Decision::Dispatch {
                    index,
                    granularity: Granularity::from(FEEDBACK_QUANTA[level]),
                }
            }
            None => Decision::Idle,
        }
    }

    fn dispatched(&mut self, _ready: &ReadySet<'_>, index: usize, finished: bool) {
        let level = match self.in_flight.take() {
            Some((level, dispatched)) if dispatched == index => level,
            _ => return,
        };

        if finished {
            self.queues.release(index);
        } else {
            self.queues.requeue(level + 1, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Category, Job};
    use crate::scheduler::types::Quantum;

    #[test]
    fn test_admits_in_batch_order() {
        let jobs = vec![
            Job::new(1, 0, 2, Category::Regular),
            Job::new(2, 0, 2, Category::Urgent),
        ];
        let mut mlfq = FeedbackQueue::new();
        let ready = ReadySet::new(&jobs, 0);

        assert_eq!(
            mlfq.decide(&ready),
            Decision::Dispatch {
                index: 0,
                granularity: Granularity::Slice(Quantum::DEFAULT)
            }
        );
    }

    #[test]
    fn test_demotion_through_levels() {
        let mut jobs = vec![Job::new(1, 0, 10, Category::Regular)];
        let mut mlfq = FeedbackQueue::new();
        let mut expected = Vec::new();

        for _ in 0..3 {
            let ready = ReadySet::new(&jobs, 0);
            let decision = mlfq.decide(&ready);
            expected.push(decision);
            if let Decision::Dispatch { index, granularity } = decision {
                let remaining = jobs[index].remaining;
                jobs[index].serve(granularity.ticks(remaining, 0));
                let finished = jobs[index].remaining == 0;
                mlfq.dispatched(&ReadySet::new(&jobs, 0), index, finished);
            }
        }

        let granularities: Vec<Granularity> = expected
            .into_iter()
            .filter_map(|d| match d {
                Decision::Dispatch { granularity, .. } => Some(granularity),
                Decision::Idle => None,
            })
            .collect();
        assert_eq!(
            granularities,
            vec![
                Granularity::Slice(Quantum::DEFAULT),
                Granularity::Slice(FEEDBACK_QUANTA[1].unwrap()),
                Granularity::ToCompletion,
            ]
        );
        assert_eq!(jobs[0].remaining, 0);
    }

    #[test]
    fn test_in_flight_job_not_readmitted() {
        let jobs = vec![Job::new(1, 0, 10, Category::Regular)];
        let mut mlfq = FeedbackQueue::new();
        let ready = ReadySet::new(&jobs, 0);

        mlfq.decide(&ready);
        // Arrival scan while the job is dispatched must not queue it again
        mlfq.admit_arrivals(&ready);
        assert!(mlfq.queues.is_empty());
    }

    #[test]
    fn test_idle_when_queues_empty() {
        let jobs = vec![Job::new(1, 2, 1, Category::Regular)];
        let mut mlfq = FeedbackQueue::new();
        assert_eq!(mlfq.decide(&ReadySet::new(&jobs, 0)), Decision::Idle);
    }
}
