/*!
 * Job Queues
 * FIFO index queues with membership tracking keyed by batch position
 */

use ahash::AHashSet;
use std::collections::VecDeque;

/// FIFO of job indices (positions in the batch)
#[derive(Debug, Default, Clone)]
pub struct JobQueue {
    order: VecDeque<usize>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_back(&mut self, index: usize) {
        self.order.push_back(index);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<usize> {
        self.order.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Stack of FIFO levels sharing one membership set
///
/// A job enters through [`LevelQueues::admit`] and keeps its membership until
/// [`LevelQueues::release`], including while it is dispatched between levels.
/// This guarantees a job sits in at most one level at a time. Membership is
/// keyed by batch position, since ids from input are not guaranteed unique.
#[derive(Debug, Clone)]
pub struct LevelQueues {
    levels: Vec<JobQueue>,
    members: AHashSet<usize>,
}

impl LevelQueues {
    /// Create `depth` empty levels (level 0 is the highest)
    pub fn new(depth: usize) -> Self {
        assert!(depth > 0, "at least one queue level is required");
        Self {
            levels: vec![JobQueue::new(); depth],
            members: AHashSet::default(),
        }
    }

    /// Admit a job into the top level unless it is already a member
    pub fn admit(&mut self, index: usize) -> bool {
        if !self.members.insert(index) {
            return false;
        }
        self.levels[0].push_back(index);
        true
    }

    /// Put a member back at the tail of `level` (clamped to the lowest level)
    pub fn requeue(&mut self, level: usize, index: usize) {
        let level = level.min(self.levels.len() - 1);
        self.levels[level].push_back(index);
    }

    /// Dequeue from the highest non-empty level
    pub fn pop_highest(&mut self) -> Option<(usize, usize)> {
        self.levels
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|index| (level, index)))
    }

    /// Drop a finished job's membership
    pub fn release(&mut self, index: usize) -> bool {
        self.members.remove(&index)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Queued entries at `level`
    pub fn level(&self, level: usize) -> &JobQueue {
        &self.levels[level]
    }

    /// True when no level holds a queued index
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(JobQueue::is_empty)
    }
}
