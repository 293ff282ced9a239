/*!
 * Scheduler Types
 * Policy names, quanta, and the decisions policies hand to the driver
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{JobId, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The eight supported scheduling policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time first
    SjfPreemptive,
    /// Highest priority first (non-preemptive)
    Priority,
    /// Highest priority first, re-evaluated every tick
    PriorityPreemptive,
    /// Sweep-based round robin
    RoundRobin,
    /// Multi-level queue with fixed category lanes
    MultiLevelQueue,
    /// Multi-level feedback queue with demotion
    MultiLevelFeedback,
}

impl SchedulingPolicy {
    /// Every policy, in invocation-surface order
    pub const ALL: [SchedulingPolicy; 8] = [
        Self::Fcfs,
        Self::Sjf,
        Self::SjfPreemptive,
        Self::Priority,
        Self::PriorityPreemptive,
        Self::RoundRobin,
        Self::MultiLevelQueue,
        Self::MultiLevelFeedback,
    ];

    /// Policies evaluated by compare mode
    pub const COMPARED: [SchedulingPolicy; 6] = [
        Self::Fcfs,
        Self::SjfPreemptive,
        Self::PriorityPreemptive,
        Self::RoundRobin,
        Self::MultiLevelQueue,
        Self::MultiLevelFeedback,
    ];

    /// Policy used when a name is absent or unrecognized
    pub const FALLBACK: SchedulingPolicy = Self::MultiLevelQueue;

    /// Resolve an optional policy name, falling back to MLQ
    ///
    /// Returns the policy and whether the fallback was taken.
    pub fn resolve(name: Option<&str>) -> (Self, bool) {
        match name.map(str::parse::<Self>) {
            Some(Ok(policy)) => (policy, false),
            _ => (Self::FALLBACK, true),
        }
    }

    /// Policy assigned to a raw transaction type in assigned mode
    pub fn assigned_for(raw_type: Option<&str>) -> Self {
        let raw = raw_type.map(|s| s.trim().to_uppercase()).unwrap_or_default();
        match raw.as_str() {
            "UPI" => Self::SjfPreemptive,
            "ATM" => Self::RoundRobin,
            "NEFT" | "CHEQUE" => Self::Fcfs,
            "RTGS" => Self::PriorityPreemptive,
            "EMI" => Self::MultiLevelQueue,
            _ => Self::Fcfs,
        }
    }

    /// Canonical invocation name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::SjfPreemptive => "SJF-P",
            Self::Priority => "PRIORITY",
            Self::PriorityPreemptive => "PRIORITY-P",
            Self::RoundRobin => "RR",
            Self::MultiLevelQueue => "MLQ",
            Self::MultiLevelFeedback => "MLFQ",
        }
    }

    /// Human-readable description
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::Sjf => "SJF (Non-Preemptive)",
            Self::SjfPreemptive => "SJF (Preemptive)",
            Self::Priority => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::RoundRobin => "Round Robin (q=3)",
            Self::MultiLevelQueue => "Multi-Level Queue",
            Self::MultiLevelFeedback => "Multi-Level Feedback Queue",
        }
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "SJF-P" | "SJFP" => Ok(Self::SjfPreemptive),
            "PRIORITY" => Ok(Self::Priority),
            "PRIORITY-P" | "PRIORITYP" => Ok(Self::PriorityPreemptive),
            "RR" => Ok(Self::RoundRobin),
            "MLQ" => Ok(Self::MultiLevelQueue),
            "MLFQ" => Ok(Self::MultiLevelFeedback),
            _ => Err(SchedulerError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Maximum contiguous service granted per bounded dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Quantum(Ticks);

impl Quantum {
    /// Round robin and the MLQ urgent lane
    pub const DEFAULT: Quantum = Quantum(3);

    pub fn new(ticks: Ticks) -> Result<Self, SchedulerError> {
        if ticks == 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn get(&self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// MLFQ level quanta; `None` runs to completion
pub const FEEDBACK_QUANTA: [Option<Quantum>; 3] = [Some(Quantum(3)), Some(Quantum(6)), None];

/// How much service one dispatch grants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Run until the job has no remaining service
    ToCompletion,
    /// Run at most one quantum
    Slice(Quantum),
    /// Run exactly one tick, then re-select
    Tick,
    /// Run to completion, but yield when the clock reaches `until`
    Until(Ticks),
}

impl Granularity {
    /// Ticks granted at `clock` to a job with `remaining` service left
    ///
    /// A dispatch of unfinished work always grants at least one tick.
    #[inline]
    pub fn ticks(&self, remaining: Ticks, clock: Ticks) -> Ticks {
        let bound = match self {
            Self::ToCompletion => remaining,
            Self::Slice(quantum) => quantum.get(),
            Self::Tick => 1,
            Self::Until(until) => until.saturating_sub(clock).max(1),
        };
        remaining.min(bound)
    }
}

impl From<Option<Quantum>> for Granularity {
    fn from(quantum: Option<Quantum>) -> Self {
        quantum.map_or(Self::ToCompletion, Self::Slice)
    }
}

/// What the driver should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Serve the job at `index` for the given granularity
    Dispatch {
        index: usize,
        granularity: Granularity,
    },
    /// Nothing is ready; advance the clock one tick
    Idle,
}

/// Contiguous interval during which one job held the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Segment {
    pub id: JobId,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    #[inline(always)]
    pub const fn duration(&self) -> Ticks {
        self.end - self.start
    }
}
