/*!
 * Simulator Configuration
 * Defaults, SCHED_* environment overrides, and command-line arguments
 */

use crate::core::errors::SimError;
use crate::monitoring::{json_requested, TRACE_JSON_ENV};
use crate::scheduler::SchedulingPolicy;
use std::path::PathBuf;
use tracing::warn;

pub const INPUT_ENV: &str = "SCHED_INPUT";
pub const OUTPUT_ENV: &str = "SCHED_OUTPUT";
pub const POLICY_ENV: &str = "SCHED_POLICY";

pub const DEFAULT_INPUT: &str = "transactions.json";
pub const DEFAULT_OUTPUT: &str = "output.json";

/// What the binary does with the loaded batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run one named policy
    #[default]
    Single,
    /// Run the compared policy set and keep the best schedule
    Compare,
    /// Pick a policy per job from its raw transaction type
    Assigned,
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Raw policy name as given; resolved by [`SimConfig::policy`]
    pub policy_name: Option<String>,
    pub mode: RunMode,
    pub trace_json: bool,
    /// Flags that were not recognized; reported once logging is up
    pub unknown_flags: Vec<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            policy_name: None,
            mode: RunMode::Single,
            trace_json: false,
            unknown_flags: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup` (an environment accessor)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(INPUT_ENV) {
            config.input_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(OUTPUT_ENV) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(name) = lookup(POLICY_ENV) {
            config.policy_name = Some(name);
        }
        if let Some(flag) = lookup(TRACE_JSON_ENV) {
            config.trace_json = json_requested(&flag);
        }
        config
    }

    /// Apply command-line arguments (program name already stripped)
    ///
    /// `sched-sim [POLICY] [--input PATH] [--output PATH] [--compare] [--assigned]`
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" | "-i" => {
                    self.input_path = PathBuf::from(Self::value_for(&arg, args.next())?);
                }
                "--output" | "-o" => {
                    self.output_path = PathBuf::from(Self::value_for(&arg, args.next())?);
                }
                "--compare" | "--auto" => self.mode = RunMode::Compare,
                "--assigned" => self.mode = RunMode::Assigned,
                "--json-log" => self.trace_json = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    self.unknown_flags.push(arg);
                }
                _ => self.policy_name = Some(arg),
            }
        }

        Ok(self)
    }

    /// Log every unrecognized flag
    pub fn report_unknown_flags(&self) {
        for flag in &self.unknown_flags {
            warn!(flag = flag.as_str(), "Ignoring unknown flag");
        }
    }

    fn value_for(flag: &str, value: Option<String>) -> Result<String, SimError> {
        value.ok_or_else(|| SimError::Configuration(format!("{flag} requires a path argument")))
    }

    /// Resolve the policy name, falling back to MLQ with a warning
    pub fn policy(&self) -> SchedulingPolicy {
        let (policy, fell_back) = SchedulingPolicy::resolve(self.policy_name.as_deref());
        if fell_back {
            warn!(
                requested = self.policy_name.as_deref().unwrap_or("<none>"),
                fallback = policy.as_str(),
                "Unknown or missing policy, using fallback"
            );
        }
        policy
    }
}
