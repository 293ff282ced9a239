/*!
 * Monitoring Module
 * Structured logging for simulation runs
 */

pub mod tracer;

pub use tracer::{init_tracing, json_requested, TRACE_JSON_ENV};
