/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Loads a transaction batch, simulates it, and reports:
 * - Per-job completion, turnaround, and waiting times
 * - Average metrics per policy
 * - The schedule file for downstream consumers
 */

use miette::IntoDiagnostic;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

use sched_sim::io::render_summary;
use sched_sim::{
    init_tracing, read_transactions, render_table, run_assigned, run_compare, run_single,
    write_schedule, Job, RunMode, SchedulerError, SchedulingPolicy, SimConfig,
};

fn main() -> miette::Result<()> {
    let config = SimConfig::from_env().with_args(std::env::args().skip(1))?;
    init_tracing(config.trace_json);
    config.report_unknown_flags();

    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        mode = ?config.mode,
        "Scheduling simulator starting"
    );

    let records = read_transactions(&config.input_path)?;
    if records.is_empty() {
        return Err(SchedulerError::EmptyBatch.into());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let jobs = match config.mode {
        RunMode::Single => {
            let policy = config.policy();
            writeln!(out, "Running {} ...", policy.describe()).into_diagnostic()?;
            run_single(sched_sim::io::to_jobs(&records), policy)?.jobs
        }
        RunMode::Compare => {
            let comparison =
                run_compare(sched_sim::io::to_jobs(&records), &SchedulingPolicy::COMPARED)?;
            for report in &comparison.reports {
                write!(out, "{:<11} ", report.policy.as_str()).into_diagnostic()?;
                write!(out, "{}", render_summary(&report.summary)).into_diagnostic()?;
            }
            writeln!(out, "Best policy: {}", comparison.best).into_diagnostic()?;
            comparison.jobs
        }
        RunMode::Assigned => {
            let assignment = run_assigned(&records)?;
            for group in &assignment.groups {
                write!(out, "{:<11} ", group.policy.as_str()).into_diagnostic()?;
                write!(out, "{}", render_summary(&group.report.summary)).into_diagnostic()?;
            }
            write!(out, "{:<11} {}", "ALL", render_summary(&assignment.summary)).into_diagnostic()?;
            assignment.jobs
        }
    };

    writeln!(out).into_diagnostic()?;
    write!(out, "{}", render_table(&jobs)).into_diagnostic()?;
    persist(&config.output_path, &jobs);
    Ok(())
}

/// Write the schedule; a failed write is reported, not fatal
fn persist(path: &Path, jobs: &[Job]) {
    match write_schedule(path, jobs) {
        Ok(()) => info!(path = %path.display(), "Schedule file created"),
        Err(e) => error!(path = %path.display(), error = %e, "Could not write schedule file"),
    }
}
