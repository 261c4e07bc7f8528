//! The format adapter contract.
//!
//! Implement [`FormatAdapter`] for any serialization technology that should be
//! measured by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//! Adapters are stateless from the harness's point of view: every method takes
//! `&self`, and any schema or option the format needs is handed to the adapter
//! when it is constructed.

use crate::error::{DecodingError, EncodingError, ValidationError};
use serde::{Deserialize, Serialize};

/// Outcome of an adapter's pre-encode validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the dataset satisfies the adapter's constraints
    pub is_valid: bool,
    /// Validation errors (if any)
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build an outcome from the collected errors; empty means valid.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Join all error messages into one line for reporting.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| match &e.field_path {
                Some(path) => format!("{} ({})", e.message, path),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}

/// Uniform wrapper around one serialization technology for datasets of type `D`.
pub trait FormatAdapter<D> {
    /// Unique name of this adapter within a run, e.g. `"JSON"`.
    fn name(&self) -> &str;

    /// File extension used for the persisted artifact, without the dot.
    fn extension(&self) -> &str;

    /// Check the dataset against the format's structural constraints.
    ///
    /// Formats without a schema return [`ValidationOutcome::valid`].
    fn validate(&self, dataset: &D) -> ValidationOutcome;

    /// Encode the dataset.
    fn encode(&self, dataset: &D) -> Result<Vec<u8>, EncodingError>;

    /// Reconstruct a dataset from bytes produced by [`FormatAdapter::encode`].
    fn decode(&self, bytes: &[u8]) -> Result<D, DecodingError>;
}

impl<D, A: FormatAdapter<D> + ?Sized> FormatAdapter<D> for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn validate(&self, dataset: &D) -> ValidationOutcome {
        (**self).validate(dataset)
    }

    fn encode(&self, dataset: &D) -> Result<Vec<u8>, EncodingError> {
        (**self).encode(dataset)
    }

    fn decode(&self, bytes: &[u8]) -> Result<D, DecodingError> {
        (**self).decode(bytes)
    }
}
