//! Serialization format benchmark harness.
//!
//! Runs the same dataset through a set of pluggable [`FormatAdapter`]s, timing
//! encode and decode, persisting each encoding through a [`Storage`] and
//! checking that decoding reproduces the original value. The finished
//! [`BenchmarkReport`] carries one [`MeasurementRecord`] per adapter plus
//! pairwise size savings.
//!
//! # Quick Start
//!
//! ```no_run
//! use serbench_benchmarks::{MemoryStorage, Orchestrator};
//! # use serbench_benchmarks::FormatAdapter;
//! # fn adapter() -> Box<dyn FormatAdapter<Vec<u8>>> { unimplemented!() }
//!
//! let mut orchestrator: Orchestrator<Vec<u8>> = Orchestrator::new();
//! orchestrator.register(adapter()).unwrap();
//!
//! let report = orchestrator.run(&vec![1, 2, 3], &mut MemoryStorage::new());
//! for record in &report.records {
//!     println!("{}: {:?} bytes", record.adapter, record.persisted_size);
//! }
//! ```
//!
//! # Modules
//!
//! - [`adapter`] - The `FormatAdapter` contract
//! - [`timer`] - Timed operation runner
//! - [`orchestrator`] - Runs adapters and assembles records
//! - [`comparator`] - Relative size savings
//! - [`result`] - Measurement records and the run report
//! - [`storage`] / [`io`] - Artifact persistence and report files
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod comparator;
pub mod error;
pub mod io;
pub mod markdown;
pub mod orchestrator;
pub mod result;
pub mod storage;
pub mod timer;

pub use adapter::{FormatAdapter, ValidationOutcome};
pub use comparator::{savings_percent, ComparisonResult, Savings};
pub use error::{BenchmarkError, DecodingError, EncodingError, StorageError, ValidationError};
pub use io::FsStorage;
pub use orchestrator::{Orchestrator, RunOptions, DEFAULT_ARTIFACT_STEM};
pub use result::{BenchmarkReport, MeasurementRecord, OperationOutcome};
pub use storage::{MemoryStorage, Storage};
pub use timer::{run_timed, TimedResult};
