/*!
 * Simulation Statistics
 * Per-run counters, average metrics, and the run report
 */

use super::types::{SchedulingPolicy, Segment};
use super::Simulation;
use crate::core::types::Ticks;
use crate::process::Job;
use serde::Serialize;

/// Counters collected while a run executes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub dispatches: u64,
    pub idle_ticks: Ticks,
    /// Dispatches that took the processor from an unfinished job
    pub preemptions: u64,
    /// Latest completion in the batch
    pub makespan: Ticks,
}

/// Average waiting and turnaround over finished jobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub count: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl ScheduleSummary {
    pub fn from_jobs<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Self {
        let (count, waiting, turnaround) = jobs
            .into_iter()
            .filter(|job| job.finished)
            .fold((0usize, 0u64, 0u64), |(n, w, t), job| {
                (n + 1, w + job.waiting, t + job.turnaround)
            });

        if count == 0 {
            return Self::default();
        }

        Self {
            count,
            avg_waiting: waiting as f64 / count as f64,
            avg_turnaround: turnaround as f64 / count as f64,
        }
    }

    /// Ranking score used by compare mode (lower is better)
    #[inline]
    pub fn score(&self) -> f64 {
        self.avg_waiting + self.avg_turnaround
    }
}

/// Outcome of one simulated run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub policy: SchedulingPolicy,
    pub summary: ScheduleSummary,
    pub stats: RunStats,
    pub timeline: Vec<Segment>,
}

impl Simulation {
    /// Counters from the last run
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Executed segments from the last run
    pub fn timeline(&self) -> &[Segment] {
        &self.timeline
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_jobs(&self.jobs)
    }

    pub(super) fn report(&self, policy: SchedulingPolicy) -> RunReport {
        RunReport {
            policy,
            summary: self.summary(),
            stats: self.stats,
            timeline: self.timeline.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Category;

    #[test]
    fn test_summary_over_finished_only() {
        let mut jobs = vec![
            Job::new(1, 0, 2, Category::Regular),
            Job::new(2, 0, 4, Category::Regular),
            Job::new(3, 0, 4, Category::Regular),
        ];
        jobs[0].finish(2);
        jobs[1].finish(6);

        let summary = ScheduleSummary::from_jobs(&jobs);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_waiting, 1.0);
        assert_eq!(summary.avg_turnaround, 4.0);
        assert_eq!(summary.score(), 5.0);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ScheduleSummary::from_jobs(&Vec::<Job>::new()), ScheduleSummary::default());
    }

    #[test]
    fn test_report_serializes() {
        let mut sim = Simulation::new(vec![Job::new(7, 0, 1, Category::Urgent)]);
        let report = sim.run(SchedulingPolicy::Fcfs).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["policy"], "FCFS");
        assert_eq!(json["stats"]["makespan"], 1);
        assert_eq!(json["timeline"][0]["id"], 7);
    }
}
