/*!
 * Run Modes
 * Single-policy, compare, and type-assigned simulations over one batch
 */

use crate::core::errors::{SchedulerError, SimError};
use crate::core::types::SimResult;
use crate::io::{to_jobs, TransactionRecord};
use crate::process::Job;
use crate::scheduler::{RunReport, ScheduleSummary, SchedulingPolicy, Simulation};
use tracing::{debug, info};

/// Result of running one named policy
#[derive(Debug, Clone)]
pub struct SingleRun {
    pub report: RunReport,
    /// Jobs in input order
    pub jobs: Vec<Job>,
}

/// Result of running every compared policy over the same batch
#[derive(Debug, Clone)]
pub struct Comparison {
    /// One report per candidate, in candidate order
    pub reports: Vec<RunReport>,
    pub best: SchedulingPolicy,
    /// Schedule produced by `best`, in input order
    pub jobs: Vec<Job>,
}

/// One policy group of a type-assigned run
#[derive(Debug, Clone)]
pub struct AssignedGroup {
    pub policy: SchedulingPolicy,
    pub report: RunReport,
}

/// Result of simulating each policy group independently
#[derive(Debug, Clone)]
pub struct Assignment {
    /// Groups in order of first appearance in the input
    pub groups: Vec<AssignedGroup>,
    /// All jobs, ordered by completion then id
    pub jobs: Vec<Job>,
    pub summary: ScheduleSummary,
}

/// Simulate `jobs` under `policy`
pub fn run_single(jobs: Vec<Job>, policy: SchedulingPolicy) -> SimResult<SingleRun> {
    let mut sim = Simulation::new(jobs);
    let report = sim.run(policy)?;
    Ok(SingleRun {
        report,
        jobs: sim.into_jobs(),
    })
}

/// Run each candidate over the same batch and keep the lowest
/// `avg_waiting + avg_turnaround`; the earlier candidate wins ties
pub fn run_compare(jobs: Vec<Job>, candidates: &[SchedulingPolicy]) -> SimResult<Comparison> {
    if candidates.is_empty() {
        return Err(SimError::Configuration("no candidate policies to compare".into()));
    }

    let mut sim = Simulation::new(jobs);
    let mut reports = Vec::with_capacity(candidates.len());
    let mut best: Option<(SchedulingPolicy, f64, Vec<Job>)> = None;

    for &policy in candidates {
        let report = sim.run(policy)?;
        let score = report.summary.score();
        debug!(policy = policy.as_str(), score, "Candidate scored");

        if best.as_ref().map_or(true, |(_, best_score, _)| score < *best_score) {
            best = Some((policy, score, sim.jobs().to_vec()));
        }
        reports.push(report);
    }

    let (best, score, jobs) = best.ok_or(SchedulerError::EmptyBatch)?;
    info!(best = best.as_str(), score, "Comparison complete");
    Ok(Comparison { reports, best, jobs })
}

/// Group records by the policy their raw type is assigned, simulate each
/// group on its own, and merge the results
pub fn run_assigned(records: &[TransactionRecord]) -> SimResult<Assignment> {
    if records.is_empty() {
        return Err(SchedulerError::EmptyBatch.into());
    }

    let mut partitions: Vec<(SchedulingPolicy, Vec<TransactionRecord>)> = Vec::new();
    for record in records {
        let policy = SchedulingPolicy::assigned_for(record.raw_type.as_deref());
        match partitions.iter_mut().find(|(p, _)| *p == policy) {
            Some((_, members)) => members.push(record.clone()),
            None => partitions.push((policy, vec![record.clone()])),
        }
    }

    let mut groups = Vec::with_capacity(partitions.len());
    let mut combined = Vec::with_capacity(records.len());

    for (policy, members) in partitions {
        let run = run_single(to_jobs(&members), policy)?;
        info!(
            policy = policy.as_str(),
            count = members.len(),
            avg_waiting = run.report.summary.avg_waiting,
            "Assigned group simulated"
        );
        combined.extend(run.jobs);
        groups.push(AssignedGroup {
            policy,
            report: run.report,
        });
    }

    combined.sort_by_key(|job| (job.completion, job.id));
    let summary = ScheduleSummary::from_jobs(&combined);

    Ok(Assignment {
        groups,
        jobs: combined,
        summary,
    })
}
