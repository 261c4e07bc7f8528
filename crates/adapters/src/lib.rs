// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Format adapters and dataset for the serbench suite.
//!
//! This crate provides the concrete [`FormatAdapter`] implementations (JSON,
//! XML, Protobuf), the employee dataset they encode, and a registry that
//! builds an [`Orchestrator`] from format names.
//!
//! # Example
//!
//! ```no_run
//! use serbench_adapters::{build_orchestrator, dataset, FormatKind};
//! use serbench_benchmarks::{FsStorage, RunOptions};
//!
//! let orchestrator = build_orchestrator(FormatKind::ALL, RunOptions::default())?;
//! let mut storage = FsStorage::new("benchmarks/output")?;
//! let report = orchestrator.run(&dataset::sample_employees(), &mut storage);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod dataset;
pub mod formats;

pub use dataset::{Employee, EmployeeList};
pub use formats::{JsonAdapter, ProtobufAdapter, XmlAdapter};

use serbench_benchmarks::{BenchmarkError, FormatAdapter, Orchestrator, RunOptions};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while assembling the adapter set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Format name not recognised
    #[error("unknown format: {0} (expected one of json, xml, protobuf)")]
    UnknownFormat(String),

    /// No format was selected
    #[error("no formats selected")]
    NoFormats,

    /// Orchestrator rejected the adapter
    #[error(transparent)]
    Registration(#[from] BenchmarkError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Formats bundled with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Pretty-printed JSON
    Json,
    /// Indented XML
    Xml,
    /// Protocol Buffers
    Protobuf,
}

impl FormatKind {
    /// Every bundled format, in default run order.
    pub const ALL: &'static [FormatKind] = &[FormatKind::Json, FormatKind::Xml, FormatKind::Protobuf];

    /// Lowercase key used in configuration and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Protobuf => "protobuf",
        }
    }

    /// Build the adapter for this format.
    pub fn adapter(&self) -> Box<dyn FormatAdapter<EmployeeList>> {
        match self {
            Self::Json => Box::new(JsonAdapter::<EmployeeList>::pretty()),
            Self::Xml => Box::new(XmlAdapter::<EmployeeList>::default()),
            Self::Protobuf => Box::new(ProtobufAdapter::new()),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormatKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "protobuf" | "proto" | "pb" => Ok(Self::Protobuf),
            other => Err(RegistryError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parse a list of format names, dropping repeats while keeping first-seen order.
pub fn parse_formats<S: AsRef<str>>(names: &[S]) -> Result<Vec<FormatKind>> {
    let mut kinds = Vec::new();
    for name in names {
        let kind: FormatKind = name.as_ref().parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

/// All bundled adapters, in default run order.
pub fn all_adapters() -> Vec<Box<dyn FormatAdapter<EmployeeList>>> {
    FormatKind::ALL.iter().map(FormatKind::adapter).collect()
}

/// Build an orchestrator running `kinds` in the given order.
pub fn build_orchestrator(
    kinds: &[FormatKind],
    options: RunOptions,
) -> Result<Orchestrator<EmployeeList>> {
    if kinds.is_empty() {
        return Err(RegistryError::NoFormats);
    }
    let mut orchestrator = Orchestrator::with_options(options);
    for kind in kinds {
        orchestrator.register(kind.adapter())?;
    }
    Ok(orchestrator)
}
