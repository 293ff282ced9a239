/*!
 * Schedule Output
 * JSON schedule file and console table rendering
 */

use crate::core::errors::OutputError;
use crate::core::types::{JobId, Ticks};
use crate::process::{Category, Job};
use crate::scheduler::ScheduleSummary;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// One row of the written schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: JobId,
    #[serde(rename = "type")]
    pub category: Category,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(rename = "CT")]
    pub completion: Ticks,
    #[serde(rename = "TAT")]
    pub turnaround: Ticks,
    #[serde(rename = "WT")]
    pub waiting: Ticks,
}

impl From<&Job> for ScheduleEntry {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            category: job.category,
            arrival: job.arrival,
            burst: job.burst,
            completion: job.completion,
            turnaround: job.turnaround,
            waiting: job.waiting,
        }
    }
}

/// Serialize `jobs` in the given order as a pretty JSON array
pub fn schedule_json(jobs: &[Job]) -> Result<String, OutputError> {
    let entries: Vec<ScheduleEntry> = jobs.iter().map(ScheduleEntry::from).collect();
    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

/// Write the schedule file at `path`
pub fn write_schedule(path: impl AsRef<Path>, jobs: &[Job]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let json = schedule_json(jobs)?;

    std::fs::write(path, json).map_err(|e| OutputError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), count = jobs.len(), "Schedule written");
    Ok(())
}

/// Console table `PID TYPE AT BT CT TAT WT` followed by averages
pub fn render_table(jobs: &[Job]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<11} {:>5} {:>5} {:>6} {:>6} {:>6}",
        "PID", "TYPE", "AT", "BT", "CT", "TAT", "WT"
    );

    for job in jobs {
        let _ = writeln!(
            out,
            "{:<6} {:<11} {:>5} {:>5} {:>6} {:>6} {:>6}",
            format!("P{}", job.id),
            job.category.as_str(),
            job.arrival,
            job.burst,
            job.completion,
            job.turnaround,
            job.waiting
        );
    }

    let _ = write!(out, "{}", render_summary(&ScheduleSummary::from_jobs(jobs)));
    out
}

/// One-line average metrics
pub fn render_summary(summary: &ScheduleSummary) -> String {
    format!(
        "Average WT: {:.2}  Average TAT: {:.2}  ({} jobs)\n",
        summary.avg_waiting, summary.avg_turnaround, summary.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finished_job() -> Job {
        let mut job = Job::new(4, 1, 3, Category::Background);
        job.finish(6);
        job
    }

    #[test]
    fn test_entry_keys() {
        let json = schedule_json(&[finished_job()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "id": 4, "type": "background", "arrival": 1, "burst": 3,
                "CT": 6, "TAT": 5, "WT": 2
            }])
        );
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&[finished_job()]);
        let mut lines = table.lines();

        let header: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["PID", "TYPE", "AT", "BT", "CT", "TAT", "WT"]);

        let row: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(row, vec!["P4", "background", "1", "3", "6", "5", "2"]);

        assert!(lines.next().unwrap().starts_with("Average WT: 2.00"));
    }
}
