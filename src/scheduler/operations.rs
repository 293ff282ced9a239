/*!
 * Simulation Operations
 * Reset, dispatch, and idle steps of the simulation loop
 */

use super::policies;
use super::selector::ReadySet;
use super::stats::RunReport;
use super::traits::Policy;
use super::types::{Decision, Granularity, SchedulingPolicy, Segment};
use super::Simulation;
use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Ticks};
use tracing::{debug, info, info_span, trace, warn};

impl Simulation {
    /// Simulate the batch under a freshly built `kind` policy
    pub fn run(&mut self, kind: SchedulingPolicy) -> SimResult<RunReport> {
        let mut policy = policies::build(kind);
        self.run_with(&mut policy)
    }

    /// Simulate the batch under a caller-supplied policy
    ///
    /// The batch and the policy are both reset first; results land in the job
    /// records in place.
    pub fn run_with<P: Policy + ?Sized>(&mut self, policy: &mut P) -> SimResult<RunReport> {
        if self.jobs.is_empty() {
            return Err(SchedulerError::EmptyBatch.into());
        }

        let kind = policy.kind();
        let span = info_span!("simulate", policy = kind.as_str(), jobs = self.jobs.len());
        let _guard = span.enter();

        self.prepare(policy);
        info!(pending = self.pending, "Simulation started");

        while self.pending > 0 {
            let decision = policy.decide(&ReadySet::new(&self.jobs, self.clock));
            match decision {
                Decision::Dispatch { index, granularity } if self.is_dispatchable(index) => {
                    let finished = self.dispatch(index, granularity);
                    policy.dispatched(&ReadySet::new(&self.jobs, self.clock), index, finished);
                }
                Decision::Dispatch { index, .. } => {
                    warn!(index, clock = self.clock, "Policy dispatched a job that is not ready");
                    self.idle();
                }
                Decision::Idle => self.idle(),
            }
        }

        self.stats.makespan = self.jobs.iter().map(|job| job.completion).max().unwrap_or(0);
        let report = self.report(kind);
        info!(
            makespan = report.stats.makespan,
            dispatches = report.stats.dispatches,
            preemptions = report.stats.preemptions,
            avg_waiting = report.summary.avg_waiting,
            avg_turnaround = report.summary.avg_turnaround,
            "Simulation finished"
        );
        Ok(report)
    }

    /// Reset the batch, the clock, and the policy, then settle zero-burst jobs
    fn prepare<P: Policy + ?Sized>(&mut self, policy: &mut P) {
        crate::process::reset_all(&mut self.jobs);
        policy.reset();

        self.clock = 0;
        self.stats = Default::default();
        self.timeline.clear();
        self.last_dispatch = None;
        self.pending = self.jobs.len();

        for job in self.jobs.iter_mut().filter(|job| job.burst == 0) {
            warn!(id = job.id, arrival = job.arrival, "Zero-burst job finishes at arrival");
            job.finish(job.arrival);
            self.pending -= 1;
        }
    }

    #[inline]
    fn is_dispatchable(&self, index: usize) -> bool {
        index < self.jobs.len() && self.jobs[index].is_ready(self.clock)
    }

    /// Serve the job at `index`; returns whether it finished
    fn dispatch(&mut self, index: usize, granularity: Granularity) -> bool {
        let start = self.clock;
        let single_tick = granularity == Granularity::Tick;

        if let Some((previous, _)) = self.last_dispatch {
            if previous != index && !self.jobs[previous].finished {
                self.stats.preemptions += 1;
            }
        }

        let job = &mut self.jobs[index];
        let used = job.serve(granularity.ticks(job.remaining, start));
        self.clock += used;

        let finished = job.remaining == 0;
        if finished {
            job.finish(self.clock);
            self.pending -= 1;
        }

        debug!(
            id = job.id,
            start,
            end = self.clock,
            remaining = job.remaining,
            finished,
            "Dispatched"
        );

        self.record_segment(index, start, single_tick);
        self.stats.dispatches += 1;
        finished
    }

    /// Append to the timeline, extending the previous segment only across
    /// consecutive single-tick dispatches of the same job
    fn record_segment(&mut self, index: usize, start: Ticks, single_tick: bool) {
        let id = self.jobs[index].id;
        let extends = matches!(self.last_dispatch, Some((last, true)) if last == index)
            && single_tick;

        match self.timeline.last_mut() {
            Some(segment) if extends && segment.end == start => segment.end = self.clock,
            _ => self.timeline.push(Segment {
                id,
                start,
                end: self.clock,
            }),
        }
        self.last_dispatch = Some((index, single_tick));
    }

    fn idle(&mut self) {
        trace!(clock = self.clock, "Idle tick");
        self.clock += 1;
        self.stats.idle_ticks += 1;
    }
}
