/*!
 * I/O Tests
 * Dataset loading and schedule writing against real files
 */

use pretty_assertions::assert_eq;
use sched_sim::io::{
    parse_transactions, read_transactions, schedule_json, to_jobs, write_schedule, ScheduleEntry,
};
use sched_sim::{run_single, Category, InputError, OutputError, SchedulingPolicy};
use std::fs;
use tempfile::TempDir;

const DATASET: &str = r#"[
  { "id": 1, "arrival": 0, "burst": 5, "type": "NEFT" },
  { "id": 2, "arrival": "1", "burst": 3, "type": " Fraud " },
  { "id": 3, "arrival": 2, "burst": 0, "type": "EMI" },
  { "id": 4, "arrival": 3, "burst": 2 }
]"#;

#[test]
fn test_read_normalizes_categories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    fs::write(&path, DATASET).unwrap();

    let records = read_transactions(&path).unwrap();
    let categories: Vec<Category> = records.iter().map(|r| r.category()).collect();

    assert_eq!(
        categories,
        vec![Category::Regular, Category::Urgent, Category::Background, Category::Regular]
    );
    assert_eq!(records[1].arrival, 1);
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let err = read_transactions(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("transactions.json");
    let output = dir.path().join("output.json");
    fs::write(&input, DATASET).unwrap();

    let records = read_transactions(&input).unwrap();
    let run = run_single(to_jobs(&records), SchedulingPolicy::Fcfs).unwrap();
    write_schedule(&output, &run.jobs).unwrap();

    let written: Vec<ScheduleEntry> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows: Vec<(u32, u64, u64, u64)> = written
        .iter()
        .map(|e| (e.id, e.completion, e.turnaround, e.waiting))
        .collect();

    // Input order is kept; the zero-burst record completes at its arrival
    assert_eq!(rows, vec![(1, 5, 5, 0), (2, 8, 7, 4), (3, 2, 0, 0), (4, 10, 7, 5)]);
}

#[test]
fn test_output_uses_dataset_keys() {
    let records = parse_transactions(DATASET).unwrap();
    let run = run_single(to_jobs(&records), SchedulingPolicy::MultiLevelQueue).unwrap();
    let json = schedule_json(&run.jobs).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = parsed[0].clone();
    let mut keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["CT", "TAT", "WT", "arrival", "burst", "id", "type"]);
    assert_eq!(first["type"], "regular");
}

#[test]
fn test_unwritable_output_reports_error() {
    let dir = TempDir::new().unwrap();
    let records = parse_transactions(DATASET).unwrap();
    let run = run_single(to_jobs(&records), SchedulingPolicy::RoundRobin).unwrap();

    // A directory cannot be overwritten as a file
    let err = write_schedule(dir.path(), &run.jobs).unwrap_err();
    assert!(matches!(err, OutputError::Io { .. }));
    // The in-memory schedule is still complete
    assert!(run.jobs.iter().all(|job| job.finished));
}

#[test]
fn test_records_without_ids_schedule_independently() {
    let records = parse_transactions(
        r#"[{"arrival":0,"burst":5,"type":"upi"},{"arrival":0,"burst":1,"type":"upi"}]"#,
    )
    .unwrap();
    let run = run_single(to_jobs(&records), SchedulingPolicy::MultiLevelFeedback).unwrap();

    let ids: Vec<u32> = run.jobs.iter().map(|j| j.id).collect();
    let completions: Vec<u64> = run.jobs.iter().map(|j| j.completion).collect();
    assert_eq!(ids, vec![0, 0]);
    // Both enter level 0 at once; the short one finishes inside its first slice
    assert_eq!(completions, vec![6, 4]);
}
