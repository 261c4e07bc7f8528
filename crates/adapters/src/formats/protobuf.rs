// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Protocol Buffers adapter backed by `prost`.
//!
//! The schema is the pair of derived messages below, equivalent to
//! [`EMPLOYEE_PROTO`]. Because `id` is declared `int32`, datasets carrying
//! wider ids fail validation instead of being silently truncated.

use crate::dataset::{Employee, EmployeeList};
use prost::Message;
use serbench_benchmarks::{
    DecodingError, EncodingError, FormatAdapter, ValidationError, ValidationOutcome,
};
use thiserror::Error;
use tracing::debug;

/// Schema source the derived messages implement.
pub const EMPLOYEE_PROTO: &str = r#"syntax = "proto3";

message Employee {
  int32 id = 1;
  string name = 2;
  double salary = 3;
  string email = 4;
  bool is_manager = 5;
}

message Employees {
  repeated Employee employee = 1;
}
"#;

/// Wire message for one employee.
#[derive(Clone, PartialEq, Message)]
pub struct EmployeeProto {
    /// Employee id
    #[prost(int32, tag = "1")]
    pub id: i32,
    /// Display name
    #[prost(string, tag = "2")]
    pub name: String,
    /// Salary
    #[prost(double, tag = "3")]
    pub salary: f64,
    /// Contact email
    #[prost(string, tag = "4")]
    pub email: String,
    /// Manager flag
    #[prost(bool, tag = "5")]
    pub is_manager: bool,
}

/// Wire message for the employee list.
#[derive(Clone, PartialEq, Message)]
pub struct EmployeesProto {
    /// Employees, in order
    #[prost(message, repeated, tag = "1")]
    pub employee: Vec<EmployeeProto>,
}

/// A dataset value the schema cannot carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `id` does not fit the `int32` field
    #[error("employee[{index}].id: {value} does not fit int32")]
    IdOutOfRange {
        /// Position in the list.
        index: usize,
        /// Offending id.
        value: i64,
    },
}

impl SchemaError {
    fn into_validation_error(self) -> ValidationError {
        match &self {
            SchemaError::IdOutOfRange { index, .. } => ValidationError::field(
                "OUT_OF_RANGE",
                format!("employee[{}].id", index),
                self.to_string(),
            ),
        }
    }
}

fn to_proto(index: usize, employee: &Employee) -> Result<EmployeeProto, SchemaError> {
    let id = i32::try_from(employee.id).map_err(|_| SchemaError::IdOutOfRange {
        index,
        value: employee.id,
    })?;
    Ok(EmployeeProto {
        id,
        name: employee.name.clone(),
        salary: employee.salary,
        email: employee.email.clone(),
        is_manager: employee.is_manager,
    })
}

impl TryFrom<&EmployeeList> for EmployeesProto {
    type Error = SchemaError;

    fn try_from(list: &EmployeeList) -> Result<Self, Self::Error> {
        let employee = list
            .employee
            .iter()
            .enumerate()
            .map(|(i, e)| to_proto(i, e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EmployeesProto { employee })
    }
}

impl From<EmployeesProto> for EmployeeList {
    fn from(proto: EmployeesProto) -> Self {
        EmployeeList::new(
            proto
                .employee
                .into_iter()
                .map(|e| Employee {
                    id: i64::from(e.id),
                    name: e.name,
                    salary: e.salary,
                    email: e.email,
                    is_manager: e.is_manager,
                })
                .collect(),
        )
    }
}

/// Binary schema-based format.
#[derive(Debug, Clone, Default)]
pub struct ProtobufAdapter;

impl ProtobufAdapter {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter<EmployeeList> for ProtobufAdapter {
    fn name(&self) -> &str {
        "Protobuf"
    }

    fn extension(&self) -> &str {
        "proto"
    }

    fn validate(&self, dataset: &EmployeeList) -> ValidationOutcome {
        let errors = dataset
            .employee
            .iter()
            .enumerate()
            .filter_map(|(i, e)| to_proto(i, e).err())
            .map(SchemaError::into_validation_error)
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            debug!(violations = errors.len(), "Dataset does not fit the employee schema");
        }
        ValidationOutcome::from_errors(errors)
    }

    fn encode(&self, dataset: &EmployeeList) -> Result<Vec<u8>, EncodingError> {
        let message =
            EmployeesProto::try_from(dataset).map_err(|e| EncodingError::new(e.to_string()))?;
        Ok(message.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<EmployeeList, DecodingError> {
        EmployeesProto::decode(bytes)
            .map(EmployeeList::from)
            .map_err(|e| DecodingError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_employees;

    #[test]
    fn test_protobuf_round_trip() {
        let adapter = ProtobufAdapter::new();
        let data = sample_employees();
        assert!(adapter.validate(&data).is_valid);

        let bytes = adapter.encode(&data).unwrap();
        assert_eq!(adapter.decode(&bytes).unwrap(), data);
    }

    #[test]
    fn test_protobuf_is_smaller_than_text() {
        let data = sample_employees();
        let proto = ProtobufAdapter::new().encode(&data).unwrap();
        let json = serde_json::to_vec(&data).unwrap();
        assert!(proto.len() < json.len());
    }

    #[test]
    fn test_protobuf_rejects_wide_ids() {
        let mut data = sample_employees();
        data.employee[1].id = i64::from(i32::MAX) + 1;
        data.employee[2].id = i64::from(i32::MIN) - 1;

        let adapter = ProtobufAdapter::new();
        let outcome = adapter.validate(&data);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].code, "OUT_OF_RANGE");
        assert_eq!(outcome.errors[0].field_path.as_deref(), Some("employee[1].id"));

        let err = adapter.encode(&data).unwrap_err();
        assert_eq!(err.cause, "employee[1].id: 2147483648 does not fit int32");
    }

    #[test]
    fn test_protobuf_numeric_boundaries() {
        // int32 edges and proto3 default values (0, "", false) survive the round-trip
        let data = EmployeeList::new(vec![
            Employee::new(i64::from(i32::MAX), "Max", 12000.0, "max@entreprise.ma", true),
            Employee::new(i64::from(i32::MIN), "", 0.0, "", false),
            Employee::new(0, "Frac", 12345.75, "frac@entreprise.ma", false),
        ]);
        let adapter = ProtobufAdapter::new();
        let bytes = adapter.encode(&data).unwrap();
        assert_eq!(adapter.decode(&bytes).unwrap(), data);
    }

    #[test]
    fn test_protobuf_nan_salary_breaks_equality() {
        let data = EmployeeList::new(vec![Employee::new(
            1,
            "Nan",
            f64::NAN,
            "nan@entreprise.ma",
            false,
        )]);
        let adapter = ProtobufAdapter::new();
        let decoded = adapter.decode(&adapter.encode(&data).unwrap()).unwrap();
        assert!(decoded.employee[0].salary.is_nan());
        assert_ne!(decoded, data);
    }

    #[test]
    fn test_protobuf_empty_list_encodes_to_nothing() {
        let adapter = ProtobufAdapter::new();
        let bytes = adapter.encode(&EmployeeList::default()).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(adapter.decode(&bytes).unwrap(), EmployeeList::default());
    }

    #[test]
    fn test_protobuf_malformed_input() {
        // field 1, length-delimited, claims 16 bytes but only 2 follow
        let err = ProtobufAdapter::new().decode(&[0x0a, 0x10, 0x08, 0x01]).unwrap_err();
        assert!(!err.cause.is_empty());
    }
}
