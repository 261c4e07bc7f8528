// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! XML adapter backed by `quick-xml`'s serde support.
//!
//! Struct fields become child elements and sequences become repeated
//! elements, so `EmployeeList` encodes as
//! `<employees><employee><id>1</id>...</employee>...</employees>`.
//!
//! Decoding trims leading and trailing whitespace from text content, so a
//! value such as `" Ahmed "` comes back as `"Ahmed"` and the round trip is
//! reported as unequal.

use serbench_benchmarks::{DecodingError, EncodingError, FormatAdapter, ValidationOutcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Default root element name.
pub const DEFAULT_ROOT: &str = "employees";

/// Structured text format. Has no schema, so validation always passes.
#[derive(Debug, Clone)]
pub struct XmlAdapter<T> {
    root: String,
    indent: Option<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> XmlAdapter<T> {
    /// Adapter writing under `root`, indented by two spaces.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            indent: Some(2),
            _marker: PhantomData,
        }
    }

    /// Set indentation width; `None` writes everything on one line.
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Root element name.
    pub fn root(&self) -> &str {
        &self.root
    }
}

impl<T> Default for XmlAdapter<T> {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl<T: Serialize + DeserializeOwned> FormatAdapter<T> for XmlAdapter<T> {
    fn name(&self) -> &str {
        "XML"
    }

    fn extension(&self) -> &str {
        "xml"
    }

    fn validate(&self, _dataset: &T) -> ValidationOutcome {
        ValidationOutcome::valid()
    }

    fn encode(&self, dataset: &T) -> Result<Vec<u8>, EncodingError> {
        let mut buffer = String::new();
        let mut serializer =
            quick_xml::se::Serializer::with_root(&mut buffer, Some(self.root.as_str()))
                .map_err(|e| EncodingError::new(e.to_string()))?;
        if let Some(width) = self.indent {
            serializer.indent(' ', width);
        }
        dataset
            .serialize(serializer)
            .map_err(|e| EncodingError::new(e.to_string()))?;
        Ok(buffer.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, DecodingError> {
        let text = std::str::from_utf8(bytes).map_err(|e| DecodingError::new(e.to_string()))?;
        quick_xml::de::from_str(text).map_err(|e| DecodingError::new(e.to_string()))
    }
}
