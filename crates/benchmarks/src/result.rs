//! Benchmark result types.
//!
//! A run produces one [`MeasurementRecord`] per registered adapter, collected
//! into a [`BenchmarkReport`]. Records are plain data and serialize to JSON
//! for the report files.

use crate::adapter::ValidationOutcome;
use crate::comparator::{self, ComparisonResult};
use crate::timer::TimedResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a single encode or decode step ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationOutcome {
    /// The operation ran and succeeded.
    Succeeded {
        /// Time spent in the operation.
        elapsed: Duration,
    },
    /// The operation ran and failed.
    Failed {
        /// Time spent before the failure.
        elapsed: Duration,
        /// Captured failure cause.
        cause: String,
    },
    /// The operation was never attempted.
    Skipped {
        /// Why it was not attempted.
        reason: String,
    },
}

impl OperationOutcome {
    /// Convert a timed result, dropping its payload.
    pub fn from_timed<T>(timed: &TimedResult<T>) -> Self {
        match &timed.result {
            Ok(_) => OperationOutcome::Succeeded {
                elapsed: timed.elapsed,
            },
            Err(cause) => OperationOutcome::Failed {
                elapsed: timed.elapsed,
                cause: cause.clone(),
            },
        }
    }

    /// Create a skipped outcome.
    pub fn skipped(reason: impl Into<String>) -> Self {
        OperationOutcome::Skipped {
            reason: reason.into(),
        }
    }

    /// Elapsed time, if the operation ran.
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            OperationOutcome::Succeeded { elapsed } | OperationOutcome::Failed { elapsed, .. } => {
                Some(*elapsed)
            }
            OperationOutcome::Skipped { .. } => None,
        }
    }

    /// Elapsed time in fractional milliseconds, if the operation ran.
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.elapsed().map(|d| d.as_secs_f64() * 1000.0)
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Succeeded { .. })
    }

    /// Whether the operation was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, OperationOutcome::Skipped { .. })
    }

    /// Failure cause, if the operation failed.
    pub fn failure_cause(&self) -> Option<&str> {
        match self {
            OperationOutcome::Failed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Timing, size and correctness outcome for one adapter in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Adapter name.
    pub adapter: String,
    /// Artifact name the encoding was persisted under.
    pub artifact: String,
    /// Result of the adapter's validation step.
    pub validation: ValidationOutcome,
    /// Encode step.
    pub encode: OperationOutcome,
    /// Decode step.
    pub decode: OperationOutcome,
    /// Byte size of the persisted artifact; absent when nothing was persisted.
    pub persisted_size: Option<u64>,
    /// Storage failure, if persisting or sizing the artifact failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_error: Option<String>,
    /// Whether the re-read artifact matched the encoded bytes; absent when not checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_intact: Option<bool>,
    /// Whether `decode(encode(dataset)) == dataset`.
    pub round_trip_equal: bool,
    /// When the adapter finished processing.
    pub timestamp: DateTime<Utc>,
}

impl MeasurementRecord {
    /// Whether validation passed and both operations succeeded with an equal round-trip.
    pub fn is_success(&self) -> bool {
        self.validation.is_valid
            && self.encode.is_success()
            && self.decode.is_success()
            && self.round_trip_equal
    }

    /// Whether the adapter was skipped because validation failed.
    pub fn failed_validation(&self) -> bool {
        !self.validation.is_valid
    }
}

/// Full outcome of one benchmark run.
///
/// Only the [`Orchestrator`](crate::orchestrator::Orchestrator) builds this, so
/// comparisons are always derived from a complete record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Records in adapter registration order.
    pub records: Vec<MeasurementRecord>,
    /// Pairwise size comparisons over `records`.
    pub comparisons: Vec<ComparisonResult>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl BenchmarkReport {
    pub(crate) fn from_records(records: Vec<MeasurementRecord>, started_at: DateTime<Utc>) -> Self {
        let comparisons = comparator::compare(&records);
        Self {
            records,
            comparisons,
            started_at,
        }
    }

    /// Look up a record by adapter name.
    pub fn record(&self, adapter: &str) -> Option<&MeasurementRecord> {
        self.records.iter().find(|r| r.adapter == adapter)
    }

    /// Look up the comparison of `candidate` against `baseline`.
    pub fn comparison(&self, baseline: &str, candidate: &str) -> Option<&ComparisonResult> {
        self.comparisons
            .iter()
            .find(|c| c.baseline == baseline && c.candidate == candidate)
    }

    /// Number of adapters whose record is fully successful.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}
