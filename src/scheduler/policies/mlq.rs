/*!
 * Multi-Level Queue
 * Three fixed lanes by category, strictly prioritized
 */

use crate::core::types::Ticks;
use crate::process::Category;
use crate::scheduler::selector::{Rank, ReadySet};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{Decision, Granularity, Quantum, SchedulingPolicy};

/// Urgent jobs get quantum-sliced sweeps; regular and background jobs run
/// first-come to completion. Lanes are re-checked from the top after every
/// dispatch, and a lower-lane run yields at the next urgent arrival, so an
/// urgent job never waits behind a lower lane.
#[derive(Debug, Clone)]
pub struct MultiLevelQueue {
    quantum: Quantum,
    cursor: usize,
    progressed: bool,
}

impl MultiLevelQueue {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            cursor: 0,
            progressed: false,
        }
    }

    fn urgent_slice(&mut self, ready: &ReadySet<'_>) -> Option<usize> {
        loop {
            let next = ready.next_ready(self.cursor, |job| job.category == Category::Urgent);
            if let Some(index) = next {
                self.cursor = index + 1;
                self.progressed = true;
                return Some(index);
            }

            self.cursor = 0;
            if !std::mem::take(&mut self.progressed) {
                return None;
            }
        }
    }

    /// Earliest future arrival of an unfinished urgent job
    fn next_urgent_arrival(ready: &ReadySet<'_>) -> Option<Ticks> {
        (0..ready.len())
            .map(|index| ready.job(index))
            .filter(|job| {
                job.category == Category::Urgent && !job.finished && job.arrival > ready.clock()
            })
            .map(|job| job.arrival)
            .min()
    }
}

impl Default for MultiLevelQueue {
    fn default() -> Self {
        Self::new(Quantum::DEFAULT)
    }
}

impl Policy for MultiLevelQueue {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::MultiLevelQueue
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.progressed = false;
    }

    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision {
        if let Some(index) = self.urgent_slice(ready) {
            return Decision::Dispatch {
                index,
                granularity: Granularity::Slice(self.quantum),
            };
        }

        let granularity = Self::next_urgent_arrival(ready)
            .map_or(Granularity::ToCompletion, Granularity::Until);

        for lane in [Category::Regular, Category::Background] {
            if let Some(index) = ready.select_in(Rank::FirstCome, lane) {
                return Decision::Dispatch { index, granularity };
            }
        }

        Decision::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Job;

    #[test]
    fn test_lane_order() {
        let jobs = vec![
            Job::new(1, 0, 4, Category::Background),
            Job::new(2, 0, 4, Category::Regular),
            Job::new(3, 0, 4, Category::Urgent),
        ];
        let mut mlq = MultiLevelQueue::default();
        let ready = ReadySet::new(&jobs, 0);

        assert_eq!(
            mlq.decide(&ready),
            Decision::Dispatch {
                index: 2,
                granularity: Granularity::Slice(Quantum::DEFAULT)
            }
        );
    }

    #[test]
    fn test_regular_before_background() {
        let jobs = vec![
            Job::new(1, 0, 4, Category::Background),
            Job::new(2, 1, 4, Category::Regular),
        ];
        let mut mlq = MultiLevelQueue::default();

        assert_eq!(
            mlq.decide(&ReadySet::new(&jobs, 0)),
            Decision::Dispatch {
                index: 0,
                granularity: Granularity::ToCompletion
            }
        );
        assert_eq!(
            mlq.decide(&ReadySet::new(&jobs, 1)),
            Decision::Dispatch {
                index: 1,
                granularity: Granularity::ToCompletion
            }
        );
    }

    #[test]
    fn test_lower_lane_yields_to_urgent_arrival() {
        let jobs = vec![
            Job::new(1, 0, 10, Category::Background),
            Job::new(2, 5, 2, Category::Urgent),
        ];
        let mut mlq = MultiLevelQueue::default();

        assert_eq!(
            mlq.decide(&ReadySet::new(&jobs, 0)),
            Decision::Dispatch {
                index: 0,
                granularity: Granularity::Until(5)
            }
        );
    }

    #[test]
    fn test_idle_when_no_lane_ready() {
        let jobs = vec![Job::new(1, 3, 4, Category::Urgent)];
        let mut mlq = MultiLevelQueue::default();
        assert_eq!(mlq.decide(&ReadySet::new(&jobs, 0)), Decision::Idle);
    }
}
