/*!
 * Ready-Set Selector
 * Read-only view of arrived, unfinished jobs and the ranking rules over it
 */

use crate::core::types::Ticks;
use crate::process::{Category, Job};
use std::cmp::{Ordering, Reverse};

/// Ordering rule used to pick among ready jobs
///
/// Every rank falls back to batch position as the final tie-break, so
/// selection is always deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Earliest arrival, then input order
    FirstCome,
    /// Smallest burst, then arrival, then id
    ShortestJob,
    /// Largest priority, then arrival, then id
    HighestPriority,
    /// Smallest remaining service, then id
    ShortestRemaining,
    /// Largest priority, then id
    HighestPriorityById,
}

impl Rank {
    /// Compare two jobs; `Less` means `a` should run first
    pub fn compare(self, a: &Job, b: &Job) -> Ordering {
        match self {
            Self::FirstCome => a.arrival.cmp(&b.arrival),
            Self::ShortestJob => (a.burst, a.arrival, a.id).cmp(&(b.burst, b.arrival, b.id)),
            Self::HighestPriority => (Reverse(a.priority), a.arrival, a.id)
                .cmp(&(Reverse(b.priority), b.arrival, b.id)),
            Self::ShortestRemaining => (a.remaining, a.id).cmp(&(b.remaining, b.id)),
            Self::HighestPriorityById => {
                (Reverse(a.priority), a.id).cmp(&(Reverse(b.priority), b.id))
            }
        }
    }
}

/// Snapshot of the batch at one clock value
#[derive(Debug, Clone, Copy)]
pub struct ReadySet<'a> {
    jobs: &'a [Job],
    clock: Ticks,
}

impl<'a> ReadySet<'a> {
    pub fn new(jobs: &'a [Job], clock: Ticks) -> Self {
        Self { jobs, clock }
    }

    #[inline(always)]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[inline(always)]
    pub fn job(&self, index: usize) -> &'a Job {
        &self.jobs[index]
    }

    #[inline]
    pub fn is_ready(&self, index: usize) -> bool {
        self.jobs[index].is_ready(self.clock)
    }

    /// Ready jobs with their batch positions, in batch order
    pub fn ready(&self) -> impl Iterator<Item = (usize, &'a Job)> + '_ {
        let clock = self.clock;
        self.jobs
            .iter()
            .enumerate()
            .filter(move |(_, job)| job.is_ready(clock))
    }

    /// Best ready job under `rank`
    pub fn select(&self, rank: Rank) -> Option<usize> {
        Self::best(self.ready(), rank)
    }

    /// Best ready job of one category under `rank`
    pub fn select_in(&self, rank: Rank, category: Category) -> Option<usize> {
        Self::best(self.ready().filter(|(_, job)| job.category == category), rank)
    }

    /// First ready job at or after position `from` that satisfies `filter`
    pub fn next_ready<F>(&self, from: usize, filter: F) -> Option<usize>
    where
        F: Fn(&Job) -> bool,
    {
        (from..self.jobs.len()).find(|&index| self.is_ready(index) && filter(&self.jobs[index]))
    }

    fn best<'j>(candidates: impl Iterator<Item = (usize, &'j Job)>, rank: Rank) -> Option<usize> {
        candidates
            .min_by(|(ia, a), (ib, b)| rank.compare(a, b).then_with(|| ia.cmp(ib)))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Job> {
        vec![
            Job::new(1, 0, 6, Category::Background),
            Job::new(2, 2, 2, Category::Urgent),
            Job::new(3, 1, 2, Category::Regular),
            Job::new(4, 9, 1, Category::Urgent),
        ]
    }

    #[test]
    fn test_ready_filter() {
        let jobs = batch();
        let ready = ReadySet::new(&jobs, 1);
        let indices: Vec<usize> = ready.ready().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(!ready.is_ready(1));
    }

    #[test]
    fn test_rank_selection() {
        let jobs = batch();
        let ready = ReadySet::new(&jobs, 2);

        assert_eq!(ready.select(Rank::FirstCome), Some(0));
        // Burst tie between ids 2 and 3 resolved by arrival
        assert_eq!(ready.select(Rank::ShortestJob), Some(2));
        assert_eq!(ready.select(Rank::HighestPriority), Some(1));
        // Remaining tie resolved by id
        assert_eq!(ready.select(Rank::ShortestRemaining), Some(1));
        assert_eq!(ready.select(Rank::HighestPriorityById), Some(1));
    }

    #[test]
    fn test_priority_ties_by_arrival_then_id() {
        let jobs = vec![
            Job::new(5, 1, 3, Category::Urgent),
            Job::new(7, 0, 3, Category::Urgent),
            Job::new(3, 0, 3, Category::Urgent),
        ];
        let ready = ReadySet::new(&jobs, 1);
        // Earlier arrival beats position; equal arrival falls to the smaller id
        assert_eq!(ready.select(Rank::HighestPriority), Some(2));
        assert_eq!(ReadySet::new(&jobs[..2], 1).select(Rank::HighestPriority), Some(1));
    }

    #[test]
    fn test_shortest_job_ties_by_id() {
        let jobs = vec![
            Job::new(8, 0, 2, Category::Regular),
            Job::new(4, 0, 2, Category::Regular),
            Job::new(1, 0, 5, Category::Regular),
        ];
        let ready = ReadySet::new(&jobs, 0);
        assert_eq!(ready.select(Rank::ShortestJob), Some(1));
    }

    #[test]
    fn test_first_come_ties_by_position() {
        let jobs = vec![
            Job::new(9, 0, 1, Category::Regular),
            Job::new(3, 0, 1, Category::Regular),
        ];
        let ready = ReadySet::new(&jobs, 0);
        assert_eq!(ready.select(Rank::FirstCome), Some(0));
    }

    #[test]
    fn test_select_in_category() {
        let jobs = batch();
        let ready = ReadySet::new(&jobs, 10);
        assert_eq!(ready.select_in(Rank::FirstCome, Category::Urgent), Some(1));
        assert_eq!(ready.select_in(Rank::FirstCome, Category::Background), Some(0));
    }

    #[test]
    fn test_next_ready_scan() {
        let jobs = batch();
        let ready = ReadySet::new(&jobs, 2);
        assert_eq!(ready.next_ready(0, |_| true), Some(0));
        assert_eq!(ready.next_ready(1, |job| job.category == Category::Urgent), Some(1));
        assert_eq!(ready.next_ready(3, |_| true), None);
    }

    #[test]
    fn test_empty_selection() {
        let jobs = batch();
        let ready = ReadySet::new(&jobs, 0);
        assert_eq!(ready.select_in(Rank::FirstCome, Category::Urgent), None);
    }
}
