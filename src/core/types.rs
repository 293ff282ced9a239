/*!
 * Core Types
 * Common types used across the simulator
 */

/// Job identifier, assigned by the input collaborator
pub type JobId = u32;

/// Simulated clock value and durations, in ticks
pub type Ticks = u64;

/// Priority weight (higher is more important)
pub type Priority = u8;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
