/*!
 * Process Module
 * Job records and the queues used to order them
 */

pub mod queue;
pub mod types;

pub use queue::{JobQueue, LevelQueues};
pub use types::{reset_all, Category, Job};
