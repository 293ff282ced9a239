/*!
 * I/O Module
 * Transaction dataset input and schedule output
 */

pub mod input;
pub mod output;

pub use input::{parse_transactions, read_transactions, to_jobs, TransactionRecord};
pub use output::{render_summary, render_table, schedule_json, write_schedule, ScheduleEntry};
