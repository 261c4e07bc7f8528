// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bundled format adapters.

pub mod json;
pub mod protobuf;
pub mod xml;

pub use json::JsonAdapter;
pub use protobuf::{EmployeeProto, EmployeesProto, ProtobufAdapter, SchemaError, EMPLOYEE_PROTO};
pub use xml::XmlAdapter;
