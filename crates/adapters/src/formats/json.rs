// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! JSON adapter backed by `serde_json`.

use serbench_benchmarks::{DecodingError, EncodingError, FormatAdapter, ValidationOutcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Self-describing text format. Has no schema, so validation always passes.
#[derive(Debug, Clone)]
pub struct JsonAdapter<T> {
    pretty: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonAdapter<T> {
    /// Pretty-printed output with two-space indentation.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            _marker: PhantomData,
        }
    }

    /// Compact output without whitespace.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            _marker: PhantomData,
        }
    }

    /// Whether output is pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl<T> Default for JsonAdapter<T> {
    fn default() -> Self {
        Self::pretty()
    }
}

impl<T: Serialize + DeserializeOwned> FormatAdapter<T> for JsonAdapter<T> {
    fn name(&self) -> &str {
        "JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn validate(&self, _dataset: &T) -> ValidationOutcome {
        ValidationOutcome::valid()
    }

    fn encode(&self, dataset: &T) -> Result<Vec<u8>, EncodingError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(dataset)
        } else {
            serde_json::to_vec(dataset)
        };
        encoded.map_err(|e| EncodingError::new(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, DecodingError> {
        serde_json::from_slice(bytes).map_err(|e| DecodingError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{sample_employees, Employee, EmployeeList};

    #[test]
    fn test_json_round_trip() {
        let adapter = JsonAdapter::<EmployeeList>::pretty();
        let data = sample_employees();
        assert!(adapter.validate(&data).is_valid);

        let bytes = adapter.encode(&data).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.starts_with("{\n  \"employee\": ["));
        assert_eq!(adapter.decode(&bytes).unwrap(), data);
    }

    #[test]
    fn test_json_compact_is_smaller() {
        let data = sample_employees();
        let pretty = JsonAdapter::<EmployeeList>::pretty().encode(&data).unwrap();
        let compact = JsonAdapter::<EmployeeList>::compact().encode(&data).unwrap();
        assert!(compact.len() < pretty.len());
        assert!(!compact.contains(&b'\n'));
    }

    #[test]
    fn test_json_numeric_boundaries() {
        // whole-number salaries are written as floats and read back equal;
        // ids beyond 2^53 survive because they stay integers
        let data = EmployeeList::new(vec![
            Employee::new(i64::MAX, "Big", 12000.0, "big@entreprise.ma", false),
            Employee::new(-7, "Frac", 12345.75, "frac@entreprise.ma", true),
        ]);
        let adapter = JsonAdapter::<EmployeeList>::compact();
        let bytes = adapter.encode(&data).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\"salary\":12000.0"));
        assert!(text.contains("\"id\":9223372036854775807"));
        assert_eq!(adapter.decode(&bytes).unwrap(), data);
    }

    #[test]
    fn test_json_non_finite_salary_does_not_round_trip() {
        let data = EmployeeList::new(vec![Employee::new(
            1,
            "Nan",
            f64::NAN,
            "nan@entreprise.ma",
            false,
        )]);
        let adapter = JsonAdapter::<EmployeeList>::compact();
        // serde_json writes non-finite floats as null, which cannot be read back as f64
        let bytes = adapter.encode(&data).unwrap();
        assert!(adapter.decode(&bytes).is_err());
    }

    #[test]
    fn test_json_malformed_input() {
        let adapter = JsonAdapter::<EmployeeList>::pretty();
        let err = adapter.decode(b"{\"employee\": [").unwrap_err();
        assert!(err.cause.contains("EOF"));
    }
}
