/*!
 * Sweep Round Robin
 * One bounded slice per ready job per ascending pass over the batch
 */

use crate::scheduler::selector::ReadySet;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{Decision, Granularity, Quantum, SchedulingPolicy};

/// Round robin driven by batch position rather than a ready queue
///
/// Readiness is checked against the clock as it stands at each point of the
/// sweep. A job that arrives mid-sweep is served in the same sweep only if its
/// position lies ahead of the cursor; there is no tail re-insertion.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Quantum,
    cursor: usize,
    serviced: bool,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            cursor: 0,
            serviced: false,
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(Quantum::DEFAULT)
    }
}

impl Policy for RoundRobin {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.serviced = false;
    }

    fn decide(&mut self, ready: &ReadySet<'_>) -> Decision {
        loop {
            if let Some(index) = ready.next_ready(self.cursor, |_| true) {
                self.cursor = index + 1;
                self.serviced = true;
                return Decision::Dispatch {
                    index,
                    granularity: Granularity::Slice(self.quantum),
                };
            }

            // End of sweep: start another right away unless this one was idle
            self.cursor = 0;
            if !std::mem::take(&mut self.serviced) {
                return Decision::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Category, Job};

    fn slice(index: usize) -> Decision {
        Decision::Dispatch {
            index,
            granularity: Granularity::Slice(Quantum::DEFAULT),
        }
    }

    #[test]
    fn test_sweep_visits_in_position_order() {
        let jobs = vec![
            Job::new(1, 0, 9, Category::Regular),
            Job::new(2, 0, 9, Category::Regular),
        ];
        let mut rr = RoundRobin::default();
        let ready = ReadySet::new(&jobs, 0);

        assert_eq!(rr.decide(&ready), slice(0));
        assert_eq!(rr.decide(&ready), slice(1));
        // Next sweep starts over at position 0
        assert_eq!(rr.decide(&ready), slice(0));
    }

    #[test]
    fn test_idle_sweep() {
        let jobs = vec![Job::new(1, 5, 1, Category::Regular)];
        let mut rr = RoundRobin::default();
        assert_eq!(rr.decide(&ReadySet::new(&jobs, 0)), Decision::Idle);
        assert_eq!(rr.decide(&ReadySet::new(&jobs, 5)), slice(0));
    }

    #[test]
    fn test_reset_rewinds_cursor() {
        let jobs = vec![
            Job::new(1, 0, 9, Category::Regular),
            Job::new(2, 0, 9, Category::Regular),
        ];
        let mut rr = RoundRobin::default();
        rr.decide(&ReadySet::new(&jobs, 0));
        rr.reset();
        assert_eq!(rr.decide(&ReadySet::new(&jobs, 0)), slice(0));
    }
}
