//! Benchmark orchestrator.
//!
//! Drives every registered adapter over one dataset, strictly one after the
//! other in registration order, and assembles a [`MeasurementRecord`] for
//! each. Per-adapter failures never abort the run.

use crate::adapter::FormatAdapter;
use crate::error::{BenchmarkError, Result};
use crate::result::{BenchmarkReport, MeasurementRecord, OperationOutcome};
use crate::storage::Storage;
use crate::timer::run_timed;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Default artifact stem; artifacts are named `<stem>.<extension>`.
pub const DEFAULT_ARTIFACT_STEM: &str = "data";

/// Options that shape a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Artifact file stem.
    pub artifact_stem: String,
    /// Re-read each artifact after writing and compare it with the encoded bytes.
    pub verify_persisted: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            artifact_stem: DEFAULT_ARTIFACT_STEM.to_string(),
            verify_persisted: true,
        }
    }
}

struct Registered<D> {
    adapter: Box<dyn FormatAdapter<D>>,
    artifact: String,
}

/// Runs a set of format adapters against a dataset of type `D`.
pub struct Orchestrator<D> {
    options: RunOptions,
    adapters: Vec<Registered<D>>,
}

impl<D: PartialEq> Default for Orchestrator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PartialEq> Orchestrator<D> {
    /// Create an orchestrator with default options.
    pub fn new() -> Self {
        Self::with_options(RunOptions::default())
    }

    /// Create an orchestrator with custom options.
    pub fn with_options(options: RunOptions) -> Self {
        Self {
            options,
            adapters: Vec::new(),
        }
    }

    /// Run options.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Register an adapter. Adapters run in registration order.
    ///
    /// # Errors
    ///
    /// Rejects empty names, names already registered, and adapters whose
    /// artifact name collides with an earlier one.
    pub fn register(&mut self, adapter: impl FormatAdapter<D> + 'static) -> Result<&mut Self> {
        let name = adapter.name();
        if name.is_empty() {
            return Err(BenchmarkError::EmptyAdapterName);
        }
        if self.adapters.iter().any(|r| r.adapter.name() == name) {
            return Err(BenchmarkError::DuplicateAdapter(name.to_string()));
        }

        let artifact = format!("{}.{}", self.options.artifact_stem, adapter.extension());
        if self.adapters.iter().any(|r| r.artifact == artifact) {
            return Err(BenchmarkError::DuplicateArtifact {
                adapter: name.to_string(),
                artifact,
            });
        }

        debug!(adapter = %name, artifact = %artifact, "Adapter registered");
        self.adapters.push(Registered {
            adapter: Box::new(adapter),
            artifact,
        });
        Ok(self)
    }

    /// Names of registered adapters, in run order.
    pub fn adapter_names(&self) -> Vec<&str> {
        self.adapters.iter().map(|r| r.adapter.name()).collect()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapter is registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Run every adapter against `dataset`, persisting through `storage`.
    ///
    /// Always returns one record per registered adapter.
    pub fn run<S: Storage + ?Sized>(&self, dataset: &D, storage: &mut S) -> BenchmarkReport {
        let started_at = Utc::now();
        info!(adapters = self.adapters.len(), "Benchmark run started");

        let mut records = Vec::with_capacity(self.adapters.len());
        for registered in &self.adapters {
            records.push(self.run_adapter(registered, dataset, &mut *storage));
        }

        let report = BenchmarkReport::from_records(records, started_at);
        info!(
            adapters = report.records.len(),
            succeeded = report.success_count(),
            comparisons = report.comparisons.len(),
            "Benchmark run finished"
        );
        report
    }

    fn run_adapter<S: Storage + ?Sized>(
        &self,
        registered: &Registered<D>,
        dataset: &D,
        storage: &mut S,
    ) -> MeasurementRecord {
        let adapter = registered.adapter.as_ref();
        let name = adapter.name();
        let artifact = registered.artifact.clone();

        let validation = adapter.validate(dataset);
        if !validation.is_valid {
            warn!(
                adapter = %name,
                errors = %validation.summary(),
                "Validation failed, skipping encode and decode"
            );
            return MeasurementRecord {
                adapter: name.to_string(),
                artifact,
                validation,
                encode: OperationOutcome::skipped("validation failed"),
                decode: OperationOutcome::skipped("validation failed"),
                persisted_size: None,
                persistence_error: None,
                persisted_intact: None,
                round_trip_equal: false,
                timestamp: Utc::now(),
            };
        }

        let encoded = run_timed(|| adapter.encode(dataset));
        let encode = OperationOutcome::from_timed(&encoded);
        let bytes = match encoded.result {
            Ok(bytes) => {
                debug!(adapter = %name, bytes = bytes.len(), elapsed_ms = ?encode.elapsed_ms(), "Encoded");
                bytes
            }
            Err(cause) => {
                warn!(adapter = %name, cause = %cause, "Encode failed");
                return MeasurementRecord {
                    adapter: name.to_string(),
                    artifact,
                    validation,
                    encode,
                    decode: OperationOutcome::skipped("encode failed"),
                    persisted_size: None,
                    persistence_error: None,
                    persisted_intact: None,
                    round_trip_equal: false,
                    timestamp: Utc::now(),
                };
            }
        };

        let persisted = self.persist(storage, &artifact, &bytes);
        if let Some(err) = &persisted.error {
            warn!(adapter = %name, artifact = %artifact, error = %err, "Persistence failed");
        }

        let decoded = run_timed(|| adapter.decode(&bytes));
        let decode = OperationOutcome::from_timed(&decoded);
        let round_trip_equal = match &decoded.result {
            Ok(value) => value == dataset,
            Err(cause) => {
                warn!(adapter = %name, cause = %cause, "Decode failed");
                false
            }
        };
        if decoded.is_ok() && !round_trip_equal {
            warn!(adapter = %name, "Decoded value differs from the original dataset");
        }

        info!(
            adapter = %name,
            size = ?persisted.size,
            encode_ms = ?encode.elapsed_ms(),
            decode_ms = ?decode.elapsed_ms(),
            round_trip_equal,
            "Adapter measured"
        );

        MeasurementRecord {
            adapter: name.to_string(),
            artifact,
            validation,
            encode,
            decode,
            persisted_size: persisted.size,
            persistence_error: persisted.error,
            persisted_intact: persisted.intact,
            round_trip_equal,
            timestamp: Utc::now(),
        }
    }

    fn persist<S: Storage + ?Sized>(&self, storage: &mut S, artifact: &str, bytes: &[u8]) -> Persisted {
        if let Err(e) = storage.write(artifact, bytes) {
            return Persisted::failed(e.to_string());
        }
        let size = match storage.size(artifact) {
            Ok(size) => size,
            Err(e) => return Persisted::failed(e.to_string()),
        };
        if !self.options.verify_persisted {
            return Persisted {
                size: Some(size),
                intact: None,
                error: None,
            };
        }
        match storage.read(artifact) {
            Ok(read_back) => Persisted {
                size: Some(size),
                intact: Some(read_back == bytes),
                error: None,
            },
            Err(e) => Persisted {
                size: Some(size),
                intact: None,
                error: Some(e.to_string()),
            },
        }
    }
}

struct Persisted {
    size: Option<u64>,
    intact: Option<bool>,
    error: Option<String>,
}

impl Persisted {
    fn failed(error: String) -> Self {
        Self {
            size: None,
            intact: None,
            error: Some(error),
        }
    }
}
