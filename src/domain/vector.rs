//! Feature vector: complete mapping of every symptom key to a value in [0,1].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::symptom::{SymptomKey, SYMPTOM_COUNT};

/// Errors raised while building a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    /// A provided value is outside [0,1] or not a finite number.
    ///
    /// Raised at construction time, never at scoring time. Out-of-range input
    /// is a caller contract violation; rejecting it here keeps upstream bugs
    /// from being masked by silent clamping.
    #[error("Invalid value {value} for symptom '{key}': expected a number in [0, 1]")]
    InvalidSymptomValue { key: String, value: f64 },
}

/// Dense feature vector over the fixed 27-symptom schema.
///
/// Every key is always present; missing input keys default to 0.0. Values are
/// booleans (0 or 1) for single-day input, or prevalence fractions produced
/// by aggregation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; SYMPTOM_COUNT],
}

impl FeatureVector {
    /// Build a vector from a raw wire map of symptom name to value.
    ///
    /// Unknown keys are ignored (forward-compatible schema); missing keys
    /// default to 0.0.
    ///
    /// # Errors
    /// Returns `VectorError::InvalidSymptomValue` if any recognized key maps
    /// to a value outside [0,1] or to a non-finite number.
    pub fn from_raw(raw: &HashMap<String, f64>) -> Result<Self, VectorError> {
        let mut values = [0.0; SYMPTOM_COUNT];
        for (name, &value) in raw {
            let Some(key) = SymptomKey::from_api_name(name) else {
                tracing::debug!("Ignoring unknown symptom key '{name}'");
                continue;
            };
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VectorError::InvalidSymptomValue {
                    key: name.clone(),
                    value,
                });
            }
            values[key.index()] = value;
        }
        Ok(Self { values })
    }

    /// Build a vector directly from values in canonical key order.
    ///
    /// Callers are responsible for keeping every value in [0,1]; the
    /// aggregator upholds this by construction.
    pub(crate) fn from_values(values: [f64; SYMPTOM_COUNT]) -> Self {
        Self { values }
    }

    /// Value for one symptom key.
    #[must_use]
    pub fn get(&self, key: SymptomKey) -> f64 {
        self.values[key.index()]
    }

    /// Whether a symptom is present (raw value nonzero).
    ///
    /// A prevalence fraction like 0.5 counts as present; presence is a strict
    /// `> 0` test, not a threshold on the fraction.
    #[must_use]
    pub fn is_present(&self, key: SymptomKey) -> bool {
        self.get(key) > 0.0
    }

    /// Number of symptoms present across the whole schema.
    #[must_use]
    pub fn presence_count(&self) -> usize {
        SymptomKey::ALL.iter().filter(|k| self.is_present(**k)).count()
    }

    /// Values in canonical key order, for model inference.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let vector = FeatureVector::from_raw(&raw(&[("Cramping", 1.0)])).expect("Should build");
        assert_eq!(vector.get(SymptomKey::Cramping), 1.0);
        assert_eq!(vector.get(SymptomKey::Migraines), 0.0);
        assert_eq!(vector.presence_count(), 1);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let vector = FeatureVector::from_raw(&raw(&[("Unknown_field", 1.0), ("Leg_pain", 1.0)]))
            .expect("Unknown keys should not be an error");
        assert_eq!(vector.presence_count(), 1);
        assert!(vector.is_present(SymptomKey::LegPain));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let err = FeatureVector::from_raw(&raw(&[("Cramping", 1.5)])).unwrap_err();
        assert_eq!(
            err,
            VectorError::InvalidSymptomValue {
                key: "Cramping".to_string(),
                value: 1.5
            }
        );
        assert!(FeatureVector::from_raw(&raw(&[("Cramping", -0.1)])).is_err());
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        assert!(FeatureVector::from_raw(&raw(&[("Cramping", f64::NAN)])).is_err());
        assert!(FeatureVector::from_raw(&raw(&[("Cramping", f64::INFINITY)])).is_err());
    }

    #[test]
    fn test_out_of_range_unknown_key_is_still_ignored() {
        // Unknown keys are dropped before validation: they are outside the
        // schema entirely, so their values are not our contract to enforce.
        let vector = FeatureVector::from_raw(&raw(&[("Unknown_field", 99.0)]))
            .expect("Unknown key values should not be validated");
        assert_eq!(vector.presence_count(), 0);
    }

    #[test]
    fn test_fractional_value_counts_as_present() {
        let vector =
            FeatureVector::from_raw(&raw(&[("Cramping", 0.5)])).expect("Should build");
        assert!(vector.is_present(SymptomKey::Cramping));
        assert_eq!(vector.presence_count(), 1);
    }

    #[test]
    fn test_to_vec_order_matches_schema() {
        let vector = FeatureVector::from_raw(&raw(&[("Irregular_Missed_periods", 1.0)]))
            .expect("Should build");
        let v = vector.to_vec();
        assert_eq!(v.len(), SYMPTOM_COUNT);
        assert_eq!(v[SymptomKey::IrregularMissedPeriods.index()], 1.0);
    }
}
