//! Error types for the benchmark harness.
//!
//! Every per-adapter failure ends up as data on a
//! [`MeasurementRecord`](crate::result::MeasurementRecord). Only
//! [`BenchmarkError`] is ever returned to the embedding application, and only
//! for registration mistakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single structural problem found by an adapter's `validate` step.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Path to the invalid field, e.g. `employee[2].id`
    pub field_path: Option<String>,
    /// Machine-readable error code
    pub code: String,
}

impl ValidationError {
    /// Create a validation error for a specific field.
    pub fn field(
        code: impl Into<String>,
        field_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            field_path: Some(field_path.into()),
            code: code.into(),
        }
    }
}

/// The adapter could not produce bytes from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("encoding failed: {cause}")]
pub struct EncodingError {
    /// Human-readable cause.
    pub cause: String,
}

impl EncodingError {
    /// Create a new encoding error.
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// The adapter could not reconstruct a value from bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decoding failed: {cause}")]
pub struct DecodingError {
    /// Human-readable cause.
    pub cause: String,
}

impl DecodingError {
    /// Create a new decoding error.
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Errors raised by a [`Storage`](crate::storage::Storage) implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No artifact exists under the given name
    #[error("artifact not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure
    #[error("I/O error on {name}: {source}")]
    Io {
        /// Artifact name the operation was addressing.
        name: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error, mapping `NotFound` onto [`StorageError::NotFound`].
    pub fn from_io(name: impl Into<String>, source: std::io::Error) -> Self {
        let name = name.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(name)
        } else {
            StorageError::Io { name, source }
        }
    }
}

/// Contract violations detected while assembling a benchmark suite.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchmarkError {
    /// Two adapters were registered under the same name
    #[error("adapter already registered: {0}")]
    DuplicateAdapter(String),

    /// Two adapters would persist to the same artifact
    #[error("artifact name {artifact} of adapter {adapter} is already in use")]
    DuplicateArtifact {
        /// Adapter being registered.
        adapter: String,
        /// Conflicting artifact name.
        artifact: String,
    },

    /// Adapter name is empty
    #[error("adapter name must not be empty")]
    EmptyAdapterName,
}

/// Result type for suite assembly.
pub type Result<T> = std::result::Result<T, BenchmarkError>;
