//! Layered run configuration.
//!
//! Sources, lowest precedence first: built-in defaults, `serbench.toml` in
//! the working directory (or the file given with `--config`), `SERBENCH_*`
//! environment variables, then command-line flags.

use anyhow::Context;
use serbench_adapters::FormatKind;
use serbench_benchmarks::{io::OUTPUT_DIR, RunOptions, DEFAULT_ARTIFACT_STEM};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file stem looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "serbench";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SERBENCH";

/// Benchmark run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Directory receiving artifacts and reports.
    pub output_dir: PathBuf,
    /// Artifact file stem.
    pub artifact_stem: String,
    /// Formats to run, in order.
    pub formats: Vec<String>,
    /// Number of employee records in the dataset.
    pub records: usize,
    /// Re-read artifacts after writing.
    pub verify_persisted: bool,
    /// Write `results.json` and `summary.md`.
    pub write_report: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            artifact_stem: DEFAULT_ARTIFACT_STEM.to_string(),
            formats: FormatKind::ALL.iter().map(|k| k.key().to_string()).collect(),
            records: 3,
            verify_persisted: true,
            write_report: true,
        }
    }
}

impl BenchConfig {
    /// Load from the config file and the process environment.
    ///
    /// An explicit `path` must exist; the default `serbench.toml` is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("formats")
                    .source(env),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Parsed format list.
    pub fn format_kinds(&self) -> anyhow::Result<Vec<FormatKind>> {
        Ok(serbench_adapters::parse_formats(&self.formats)?)
    }

    /// Orchestrator options derived from this configuration.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            artifact_stem: self.artifact_stem.clone(),
            verify_persisted: self.verify_persisted,
        }
    }
}
