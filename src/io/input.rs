/*!
 * Transaction Input
 * Lenient JSON loading of transaction records into jobs
 */

use crate::core::errors::InputError;
use crate::core::types::{JobId, Ticks};
use crate::process::{Category, Job};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{info, warn};

/// One transaction as read from the dataset, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: JobId,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Raw `type` value, kept for type-based policy assignment
    pub raw_type: Option<String>,
}

impl TransactionRecord {
    #[inline]
    pub fn category(&self) -> Category {
        Category::normalize(self.raw_type.as_deref())
    }
}

impl From<&TransactionRecord> for Job {
    fn from(record: &TransactionRecord) -> Self {
        Job::new(record.id, record.arrival, record.burst, record.category())
    }
}

/// Build jobs in record order
pub fn to_jobs(records: &[TransactionRecord]) -> Vec<Job> {
    records.iter().map(Job::from).collect()
}

/// Read and parse the dataset at `path`
pub fn read_transactions(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, InputError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let records = parse_transactions(&text)?;
    info!(path = %path.display(), count = records.len(), "Parsed transactions");
    Ok(records)
}

/// Parse a JSON array of transaction objects
///
/// Non-object entries are skipped. Numeric fields accept numbers or numeric
/// strings; anything else becomes 0.
pub fn parse_transactions(text: &str) -> Result<Vec<TransactionRecord>, InputError> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(InputError::NotAnArray(kind_of(&other))),
    };

    let records = entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry {
            Value::Object(fields) => Some(parse_record(position, fields)),
            other => {
                warn!(position, kind = kind_of(other), "Skipping non-object entry");
                None
            }
        })
        .collect();

    Ok(records)
}

fn parse_record(position: usize, fields: &Map<String, Value>) -> TransactionRecord {
    let id = numeric_field(position, fields, "id");
    let id = JobId::try_from(id).unwrap_or_else(|_| {
        warn!(position, id, "Job id out of range, using 0");
        0
    });

    let raw_type = fields
        .get("type")
        .or_else(|| fields.get("category"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    TransactionRecord {
        id,
        arrival: numeric_field(position, fields, "arrival"),
        burst: numeric_field(position, fields, "burst"),
        raw_type,
    }
}

fn numeric_field(position: usize, fields: &Map<String, Value>, key: &'static str) -> u64 {
    let Some(value) = fields.get(key) else {
        warn!(position, field = key, "Missing field, using 0");
        return 0;
    };

    match lenient_u64(value) {
        Some(n) => n,
        None => {
            warn!(position, field = key, value = %value, "Malformed field, using 0");
            0
        }
    }
}

/// Non-negative integer from a number or numeric string; fractions truncate
fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
