//! CLI for serbench.
//!
//! `serbench run` benchmarks the configured formats against the employee
//! dataset, writes the encoded artifacts and the report files, and prints the
//! markdown summary. `serbench status` shows the effective configuration.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serbench_adapters::{build_orchestrator, dataset, formats::EMPLOYEE_PROTO};
use serbench_benchmarks::{io, markdown, BenchmarkReport, FsStorage};
use std::path::PathBuf;
use tracing::info;

use crate::config::BenchConfig;

/// serbench CLI.
#[derive(Parser, Debug)]
#[command(name = "serbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./serbench.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Benchmark every configured format and write the results.
    ///
    /// Artifacts are written as <output>/data.<ext>, the report as
    /// <output>/results.json and <output>/summary.md.
    Run {
        /// Output directory override.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Comma-separated formats to run, in order (json, xml, protobuf).
        #[arg(short, long, value_delimiter = ',')]
        formats: Option<Vec<String>>,

        /// Number of employee records to generate.
        #[arg(short, long)]
        records: Option<usize>,

        /// Skip re-reading artifacts after writing them.
        #[arg(long)]
        no_verify: bool,

        /// Do not write results.json and summary.md.
        #[arg(long)]
        no_report: bool,
    },

    /// Show the effective configuration.
    Status {
        /// Also print the Protobuf schema.
        #[arg(short, long)]
        detailed: bool,
    },
}

impl Commands {
    fn apply_overrides(&self, config: &mut BenchConfig) {
        if let Commands::Run {
            output,
            formats,
            records,
            no_verify,
            no_report,
        } = self
        {
            if let Some(output) = output {
                config.output_dir = output.clone();
            }
            if let Some(formats) = formats {
                config.formats = formats.clone();
            }
            if let Some(records) = records {
                config.records = *records;
            }
            if *no_verify {
                config.verify_persisted = false;
            }
            if *no_report {
                config.write_report = false;
            }
        }
    }
}

/// Resolve the configuration for `cli`: file and environment, then flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<BenchConfig> {
    let mut config = BenchConfig::load(cli.config.as_deref())?;
    cli.command.apply_overrides(&mut config);
    Ok(config)
}

/// Run the benchmark described by `config`.
pub fn run_benchmark(config: &BenchConfig) -> anyhow::Result<BenchmarkReport> {
    let kinds = config.format_kinds()?;
    let orchestrator = build_orchestrator(&kinds, config.run_options())?;
    let data = dataset::generate_employees(config.records);

    let mut storage = FsStorage::new(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(
        records = data.len(),
        formats = ?orchestrator.adapter_names(),
        output = %config.output_dir.display(),
        "Running benchmark"
    );
    let report = orchestrator.run(&data, &mut storage);

    if config.write_report {
        io::write_all_outputs(&report, &config.output_dir).context("failed to write report")?;
        info!(output = %config.output_dir.display(), "Report written");
    }

    Ok(report)
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` whenever the benchmark completes, even if individual
/// formats failed; errors are reserved for configuration and I/O problems.
pub fn run() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.json_logs);

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Run { .. } => {
            let report = run_benchmark(&config)?;
            print!("{}", markdown::generate_summary(&report));
            Ok(())
        }
        Commands::Status { detailed } => {
            println!("serbench");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("\nConfiguration:");
            println!("{}", serde_json::to_string_pretty(&config)?);

            if detailed {
                println!("\nOutput files:");
                for kind in config.format_kinds()? {
                    println!(
                        "  - {}",
                        config
                            .output_dir
                            .join(format!("{}.{}", config.artifact_stem, kind.adapter().extension()))
                            .display()
                    );
                }
                println!("  - {}", config.output_dir.join(io::RESULTS_FILE).display());
                println!("  - {}", config.output_dir.join(io::SUMMARY_FILE).display());
                println!("\nProtobuf schema:\n{}", EMPLOYEE_PROTO);
            }

            Ok(())
        }
    }
}
