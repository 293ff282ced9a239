/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Ticks;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("No process records to schedule")]
    #[diagnostic(
        code(scheduler::empty_batch),
        help("The input dataset produced no records. Check the input file contents.")
    )]
    EmptyBatch,

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("A quantum must grant at least one tick per dispatch.")
    )]
    InvalidQuantum(Ticks),

    #[error("Unknown scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Use FCFS, SJF, SJF-P, PRIORITY, PRIORITY-P, RR, MLQ, or MLFQ.")
    )]
    UnknownPolicy(String),
}

/// Errors raised while loading the process dataset
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum InputError {
    #[error("Cannot read {path}: {reason}")]
    #[diagnostic(
        code(input::io_error),
        help("Check that the input file exists and is readable.")
    )]
    Io { path: String, reason: String },

    #[error("Malformed JSON input: {0}")]
    #[diagnostic(
        code(input::malformed),
        help("The input must be a JSON array of transaction objects.")
    )]
    Malformed(String),

    #[error("Expected a JSON array of records, found {0}")]
    #[diagnostic(
        code(input::not_an_array),
        help("Wrap the transaction objects in a top-level array.")
    )]
    NotAnArray(&'static str),
}

/// Errors raised while writing the schedule to its sink
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum OutputError {
    #[error("Cannot write {path}: {reason}")]
    #[diagnostic(
        code(output::io_error),
        help("Check file permissions and disk space. Results remain valid in memory.")
    )]
    Io { path: String, reason: String },

    #[error("Failed to serialize schedule: {0}")]
    #[diagnostic(code(output::serialization_failed))]
    Serialize(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("Invalid configuration. Review command-line arguments and SCHED_* variables.")
    )]
    Configuration(String),
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Malformed(err.to_string())
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::Serialize(err.to_string())
    }
}
