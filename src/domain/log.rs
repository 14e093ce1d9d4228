//! Daily symptom logs and multi-day aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::symptom::{SymptomKey, SYMPTOM_COUNT};
use super::vector::{FeatureVector, VectorError};

/// Errors raised by multi-day aggregation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregationError {
    /// Aggregation was invoked with zero logs.
    ///
    /// Callers must supply at least one day; an empty series never silently
    /// becomes an all-zero vector.
    #[error("At least one daily log is required")]
    EmptyLogSet,
}

/// One day's feature vector tagged with a calendar date.
///
/// The date string is caller-owned: its format and uniqueness are not
/// validated here, and duplicate dates are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Date in YYYY-MM-DD format (by convention; not enforced)
    pub date: String,

    /// Symptoms recorded for that day
    pub symptoms: FeatureVector,
}

impl DailyLog {
    /// Create a daily log from an already-built vector.
    #[must_use]
    pub fn new(date: impl Into<String>, symptoms: FeatureVector) -> Self {
        Self {
            date: date.into(),
            symptoms,
        }
    }

    /// Create a daily log from a raw wire map.
    ///
    /// # Errors
    /// Returns `VectorError::InvalidSymptomValue` on malformed values.
    pub fn from_raw(date: impl Into<String>, raw: &HashMap<String, f64>) -> Result<Self, VectorError> {
        Ok(Self::new(date, FeatureVector::from_raw(raw)?))
    }
}

/// Fold an ordered sequence of daily logs into one aggregated vector.
///
/// For each symptom key the aggregated value is the fraction of days on
/// which the symptom was *present* (raw value nonzero), not the mean of the
/// raw values. A day with `Cramping = 0.5` contributes 1 to the presence
/// count. Order-independent and deterministic.
///
/// # Errors
/// Returns `AggregationError::EmptyLogSet` when `logs` is empty.
pub fn aggregate(logs: &[DailyLog]) -> Result<FeatureVector, AggregationError> {
    if logs.is_empty() {
        return Err(AggregationError::EmptyLogSet);
    }

    let total = logs.len() as f64;
    let mut values = [0.0; SYMPTOM_COUNT];
    for key in SymptomKey::ALL {
        let present = logs.iter().filter(|log| log.symptoms.is_present(key)).count();
        values[key.index()] = present as f64 / total;
    }

    tracing::debug!("Aggregated {} daily logs", logs.len());
    Ok(FeatureVector::from_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn log(date: &str, pairs: &[(&str, f64)]) -> DailyLog {
        DailyLog::from_raw(date, &raw(pairs)).expect("Should build log")
    }

    #[test]
    fn test_empty_log_set_is_rejected() {
        assert_eq!(aggregate(&[]).unwrap_err(), AggregationError::EmptyLogSet);
    }

    #[test]
    fn test_prevalence_fraction() {
        let logs = vec![
            log("2025-03-01", &[("Cramping", 1.0)]),
            log("2025-03-02", &[]),
        ];
        let aggregated = aggregate(&logs).expect("Should aggregate");
        assert_eq!(aggregated.get(SymptomKey::Cramping), 0.5);
        assert_eq!(aggregated.get(SymptomKey::Migraines), 0.0);
        // The fraction still counts as present for downstream scoring.
        assert!(aggregated.is_present(SymptomKey::Cramping));
    }

    #[test]
    fn test_presence_counting_not_averaging() {
        // A fractional raw value contributes 1 to the presence count, not 0.5.
        let logs = vec![
            log("2025-03-01", &[("Cramping", 0.5)]),
            log("2025-03-02", &[("Cramping", 1.0)]),
        ];
        let aggregated = aggregate(&logs).expect("Should aggregate");
        assert_eq!(aggregated.get(SymptomKey::Cramping), 1.0);
    }

    #[test]
    fn test_order_independence() {
        let a = log("2025-03-01", &[("Cramping", 1.0), ("Migraines", 1.0)]);
        let b = log("2025-03-02", &[("Leg_pain", 1.0)]);
        let c = log("2025-03-03", &[("Cramping", 1.0)]);

        let forward = aggregate(&[a.clone(), b.clone(), c.clone()]).expect("Should aggregate");
        let reversed = aggregate(&[c, b, a]).expect("Should aggregate");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_scale_idempotence() {
        // N copies of the same log reproduce its presence pattern exactly.
        let one = log("2025-03-01", &[("Cramping", 1.0), ("Depression", 1.0)]);
        let logs = vec![one.clone(), one.clone(), one.clone()];
        let aggregated = aggregate(&logs).expect("Should aggregate");
        for key in SymptomKey::ALL {
            let expected = if one.symptoms.is_present(key) { 1.0 } else { 0.0 };
            assert_eq!(aggregated.get(key), expected, "{key:?}");
        }
    }

    #[test]
    fn test_duplicate_dates_are_not_deduplicated() {
        let logs = vec![
            log("2025-03-01", &[("Cramping", 1.0)]),
            log("2025-03-01", &[]),
        ];
        let aggregated = aggregate(&logs).expect("Should aggregate");
        assert_eq!(aggregated.get(SymptomKey::Cramping), 0.5);
    }
}
