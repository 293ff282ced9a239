/*!
 * Scheduling Simulator Library
 * Discrete-time CPU scheduling simulation over recorded transaction batches
 */

pub mod app;
pub mod config;
pub mod core;
pub mod io;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use app::{run_assigned, run_compare, run_single, Assignment, Comparison, SingleRun};
pub use config::{RunMode, SimConfig};
pub use crate::core::errors::{InputError, OutputError, SchedulerError, SimError};
pub use crate::core::types::{JobId, Priority, SimResult, Ticks};
pub use io::{read_transactions, render_table, write_schedule, TransactionRecord};
pub use monitoring::init_tracing;
pub use process::{reset_all, Category, Job};
pub use scheduler::{Policy, RunReport, ScheduleSummary, SchedulingPolicy, Segment, Simulation};
