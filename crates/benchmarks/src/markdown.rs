//! Markdown output generation for benchmark reports.

use crate::result::{BenchmarkReport, MeasurementRecord, OperationOutcome};
use std::fmt::Write;

/// Generate a markdown summary: one row per format, then the savings table.
pub fn generate_summary(report: &BenchmarkReport) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(output, "# Serialization Benchmark Summary");
    let _ = writeln!(output);
    let _ = writeln!(output, "Started: {}", report.started_at.to_rfc3339());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Formats");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "| Format | Artifact | Size (bytes) | Encode (ms) | Decode (ms) | Round-trip | Notes |"
    );
    let _ = writeln!(
        output,
        "|--------|----------|--------------|-------------|-------------|------------|-------|"
    );

    for record in &report.records {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} | {} |",
            cell(&record.adapter),
            cell(&record.artifact),
            record
                .persisted_size
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format_outcome(&record.encode),
            format_outcome(&record.decode),
            if record.round_trip_equal { "yes" } else { "no" },
            cell(&notes(record))
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Size Savings");
    let _ = writeln!(output);

    if report.comparisons.is_empty() {
        let _ = writeln!(output, "No comparable formats.");
    } else {
        let _ = writeln!(output, "| Baseline | Candidate | Savings |");
        let _ = writeln!(output, "|----------|-----------|---------|");
        for cmp in &report.comparisons {
            let _ = writeln!(
                output,
                "| {} ({} B) | {} ({} B) | {} |",
                cell(&cmp.baseline),
                cmp.baseline_size,
                cell(&cmp.candidate),
                cmp.candidate_size,
                cmp.savings
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "---");
    let _ = writeln!(
        output,
        "Formats: {}, fully successful: {}",
        report.records.len(),
        report.success_count()
    );

    output
}

fn format_outcome(outcome: &OperationOutcome) -> String {
    match outcome {
        OperationOutcome::Succeeded { elapsed } => format!("{:.3}", elapsed.as_secs_f64() * 1000.0),
        OperationOutcome::Failed { elapsed, .. } => {
            format!("failed after {:.3}", elapsed.as_secs_f64() * 1000.0)
        }
        OperationOutcome::Skipped { .. } => "skipped".to_string(),
    }
}

fn notes(record: &MeasurementRecord) -> String {
    let mut notes = Vec::new();
    if !record.validation.is_valid {
        notes.push(format!("invalid: {}", record.validation.summary()));
    }
    if let Some(cause) = record.encode.failure_cause() {
        notes.push(cause.to_string());
    }
    if let Some(cause) = record.decode.failure_cause() {
        notes.push(cause.to_string());
    }
    if let Some(err) = &record.persistence_error {
        notes.push(format!("storage: {}", err));
    }
    if record.persisted_intact == Some(false) {
        notes.push("persisted bytes differ".to_string());
    }
    notes.join("; ")
}

/// Make `text` safe inside a table cell: pipes escaped, line breaks flattened.
fn cell(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ValidationOutcome;
    use crate::comparator::{ComparisonResult, Savings};
    use crate::error::ValidationError;
    use chrono::Utc;
    use std::time::Duration;

    fn report() -> BenchmarkReport {
        let ok = MeasurementRecord {
            adapter: "JSON".to_string(),
            artifact: "data.json".to_string(),
            validation: ValidationOutcome::valid(),
            encode: OperationOutcome::Succeeded {
                elapsed: Duration::from_micros(1500),
            },
            decode: OperationOutcome::Succeeded {
                elapsed: Duration::from_micros(250),
            },
            persisted_size: Some(100),
            persistence_error: None,
            persisted_intact: Some(true),
            round_trip_equal: true,
            timestamp: Utc::now(),
        };
        let invalid = MeasurementRecord {
            adapter: "Protobuf".to_string(),
            artifact: "data.proto".to_string(),
            validation: ValidationOutcome::from_errors(vec![ValidationError::field(
                "OUT_OF_RANGE",
                "employee[0].id",
                "id does not fit int32",
            )]),
            encode: OperationOutcome::skipped("validation failed"),
            decode: OperationOutcome::skipped("validation failed"),
            persisted_size: None,
            persistence_error: None,
            persisted_intact: None,
            round_trip_equal: false,
            timestamp: Utc::now(),
        };
        BenchmarkReport {
            records: vec![ok, invalid],
            comparisons: vec![ComparisonResult {
                baseline: "JSON".to_string(),
                candidate: "XML".to_string(),
                baseline_size: 100,
                candidate_size: 40,
                savings: Savings::Percent(60.0),
            }],
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_summary_rows() {
        let summary = generate_summary(&report());
        assert!(summary.contains("| JSON | data.json | 100 | 1.500 | 0.250 | yes |  |"));
        assert!(summary.contains(
            "| Protobuf | data.proto | - | skipped | skipped | no | invalid: id does not fit int32 (employee[0].id) |"
        ));
        assert!(summary.contains("| JSON (100 B) | XML (40 B) | 60.0% |"));
        assert!(summary.contains("Formats: 2, fully successful: 1"));
    }

    #[test]
    fn test_generate_summary_escapes_cells() {
        let mut report = report();
        report.records[0].adapter = "JSON|pretty".to_string();
        report.records[0].artifact = "data|1.json".to_string();
        report.records[1].decode = OperationOutcome::Failed {
            elapsed: Duration::from_micros(10),
            cause: "line one\nline | two".to_string(),
        };
        report.comparisons[0].baseline = "JSON|pretty".to_string();

        let summary = generate_summary(&report);
        assert!(summary.contains("| JSON\\|pretty | data\\|1.json | 100 |"));
        assert!(summary.contains("line one line \\| two |"));
        assert!(summary.contains("| JSON\\|pretty (100 B) | XML (40 B) | 60.0% |"));
        for line in summary.lines().filter(|l| l.starts_with("| Protobuf")) {
            assert!(line.ends_with('|'));
        }
    }

    #[test]
    fn test_generate_summary_without_comparisons() {
        let mut report = report();
        report.comparisons.clear();
        assert!(generate_summary(&report).contains("No comparable formats."));
    }
}
