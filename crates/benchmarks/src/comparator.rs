//! Relative size comparison between formats.

use crate::result::MeasurementRecord;
use serde::{Deserialize, Serialize};

/// Size savings of a candidate format relative to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Savings {
    /// Percentage saved, rounded to one decimal. Negative when the candidate is larger.
    Percent(f64),
    /// The baseline is empty, so no ratio exists.
    Undefined,
}

impl Savings {
    /// The percentage, if defined.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Savings::Percent(p) => Some(*p),
            Savings::Undefined => None,
        }
    }
}

impl std::fmt::Display for Savings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Savings::Percent(p) => write!(f, "{:.1}%", p),
            Savings::Undefined => write!(f, "undefined"),
        }
    }
}

/// Savings of `candidate` against `baseline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Baseline adapter name.
    pub baseline: String,
    /// Candidate adapter name.
    pub candidate: String,
    /// Baseline artifact size in bytes.
    pub baseline_size: u64,
    /// Candidate artifact size in bytes.
    pub candidate_size: u64,
    /// `(baseline - candidate) / baseline * 100`.
    pub savings: Savings,
}

/// Compute `(baseline - candidate) / baseline * 100`, rounded half away from
/// zero to one decimal place.
pub fn savings_percent(baseline: u64, candidate: u64) -> Savings {
    if baseline == 0 {
        return Savings::Undefined;
    }
    // integer tenths of a percent, so exact halves round away from zero
    let base = i128::from(baseline);
    let num = (base - i128::from(candidate)) * 1000;
    let (quot, rem) = (num / base, num % base);
    let tenths = if 2 * rem.abs() >= base {
        quot + num.signum()
    } else {
        quot
    };
    Savings::Percent(tenths as f64 / 10.0)
}

/// Compare every ordered pair of distinct records that have a persisted size.
///
/// Output order follows record order: baseline-major, then candidate.
pub(crate) fn compare(records: &[MeasurementRecord]) -> Vec<ComparisonResult> {
    let sized: Vec<(&str, u64)> = records
        .iter()
        .filter_map(|r| r.persisted_size.map(|size| (r.adapter.as_str(), size)))
        .collect();

    let mut comparisons = Vec::with_capacity(sized.len() * sized.len().saturating_sub(1));
    for (i, &(baseline, baseline_size)) in sized.iter().enumerate() {
        for (j, &(candidate, candidate_size)) in sized.iter().enumerate() {
            if i == j {
                continue;
            }
            comparisons.push(ComparisonResult {
                baseline: baseline.to_string(),
                candidate: candidate.to_string(),
                baseline_size,
                candidate_size,
                savings: savings_percent(baseline_size, candidate_size),
            });
        }
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ValidationOutcome;
    use crate::result::OperationOutcome;
    use chrono::Utc;
    use std::time::Duration;

    fn record(adapter: &str, size: Option<u64>) -> MeasurementRecord {
        let encode = match size {
            Some(_) => OperationOutcome::Succeeded {
                elapsed: Duration::from_micros(10),
            },
            None => OperationOutcome::Failed {
                elapsed: Duration::from_micros(10),
                cause: "encoding failed".to_string(),
            },
        };
        MeasurementRecord {
            adapter: adapter.to_string(),
            artifact: format!("data.{}", adapter.to_lowercase()),
            validation: ValidationOutcome::valid(),
            encode,
            decode: OperationOutcome::skipped("not under test"),
            persisted_size: size,
            persistence_error: None,
            persisted_intact: None,
            round_trip_equal: false,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(100, 40), Savings::Percent(60.0));
        assert_eq!(savings_percent(40, 100), Savings::Percent(-150.0));
        assert_eq!(savings_percent(100, 100), Savings::Percent(0.0));
    }

    #[test]
    fn test_savings_zero_baseline_is_undefined() {
        assert_eq!(savings_percent(0, 10), Savings::Undefined);
        assert_eq!(savings_percent(0, 0), Savings::Undefined);
        assert_eq!(Savings::Undefined.percent(), None);
        assert_eq!(Savings::Undefined.to_string(), "undefined");
    }

    #[test]
    fn test_savings_rounds_to_one_decimal() {
        // 1/3 -> 33.333.. -> 33.3
        assert_eq!(savings_percent(3, 2), Savings::Percent(33.3));
        // 2/3 -> 66.666.. -> 66.7
        assert_eq!(savings_percent(3, 1), Savings::Percent(66.7));
        // 0.25% exactly -> 0.3 (half away from zero)
        assert_eq!(savings_percent(400, 399), Savings::Percent(0.3));
        assert_eq!(savings_percent(400, 401), Savings::Percent(-0.3));
    }

    #[test]
    fn test_savings_exact_halves_round_away_from_zero() {
        // 63.75% and -63.75% are exact halves in tenths
        assert_eq!(savings_percent(80, 29), Savings::Percent(63.8));
        assert_eq!(savings_percent(80, 131), Savings::Percent(-63.8));
        // -28.75 -> -28.8, 51.25 -> 51.3
        assert_eq!(savings_percent(80, 103), Savings::Percent(-28.8));
        assert_eq!(savings_percent(160, 78), Savings::Percent(51.3));
        assert_eq!(savings_percent(u64::MAX, 0), Savings::Percent(100.0));
    }

    #[test]
    fn test_compare_all_ordered_pairs() {
        let records = vec![record("JSON", Some(100)), record("Protobuf", Some(40))];
        let comparisons = compare(&records);
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].baseline, "JSON");
        assert_eq!(comparisons[0].candidate, "Protobuf");
        assert_eq!(comparisons[0].savings, Savings::Percent(60.0));
        assert_eq!(comparisons[1].baseline, "Protobuf");
        assert_eq!(comparisons[1].savings, Savings::Percent(-150.0));
    }

    #[test]
    fn test_compare_skips_records_without_size() {
        let records = vec![
            record("JSON", Some(100)),
            record("Broken", None),
            record("XML", Some(200)),
        ];
        let comparisons = compare(&records);
        assert_eq!(comparisons.len(), 2);
        assert!(comparisons
            .iter()
            .all(|c| c.baseline != "Broken" && c.candidate != "Broken"));
    }

    #[test]
    fn test_compare_zero_size_baseline() {
        let records = vec![record("Empty", Some(0)), record("JSON", Some(10))];
        let comparisons = compare(&records);
        assert_eq!(comparisons[0].savings, Savings::Undefined);
        assert_eq!(comparisons[1].savings, Savings::Percent(100.0));
    }
}
