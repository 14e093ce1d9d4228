//! Prediction outcome types.
//!
//! Represents the output of the endometriosis risk classification.

use serde::{Deserialize, Serialize};

/// Risk tier classification, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    /// Low risk of endometriosis
    Low,
    /// Moderate risk, follow-up recommended
    Moderate,
    /// High risk, consultation advised
    High,
}

impl RiskTier {
    /// Tier for a calibrated probability, under the fixed 0.3/0.7 thresholds.
    ///
    /// The threshold table is shared by every scoring strategy: callers
    /// observe probability, so the mapping must not drift between backends.
    #[must_use]
    pub fn from_probability(p: f64) -> Self {
        if p < 0.3 {
            Self::Low
        } else if p < 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Consultation advised",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Calibrated probability pair for the two outcome classes.
///
/// Invariant: `absent + present == 1.0` exactly, post-rounding. The present
/// probability is rounded to 4 decimals and the absent probability derived
/// by subtraction, never rounded independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPair {
    /// P(no endometriosis)
    pub absent: f64,

    /// P(endometriosis)
    pub present: f64,
}

impl ProbabilityPair {
    /// Build the pair from the raw condition probability.
    ///
    /// The absent probability is derived by subtraction from the already
    /// rounded present probability; the sum is exactly 1.0 for every
    /// 4-decimal value.
    #[must_use]
    pub fn from_present(p: f64) -> Self {
        let present = round4(p);
        Self {
            absent: round4(1.0 - present),
            present,
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Result of one risk classification (before record metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Binary prediction (0 = no endometriosis, 1 = endometriosis)
    pub label: u8,

    /// Textual form of the binary label
    pub label_text: String,

    /// Probability of the predicted class (0.0 to 1.0)
    pub confidence: f64,

    /// Calibrated class probabilities
    pub probabilities: ProbabilityPair,

    /// Risk classification
    pub risk_tier: RiskTier,
}

impl PredictionOutcome {
    /// Assemble an outcome from an explicit probability, label, and tier.
    ///
    /// Used by the heuristic scorer, whose branch policy assigns the tier
    /// directly. Confidence is read from the rounded pair so that it equals
    /// the published probability of the predicted class exactly.
    #[must_use]
    pub fn new(probability: f64, label: u8, risk_tier: RiskTier) -> Self {
        let probabilities = ProbabilityPair::from_present(probability);
        let confidence = if label == 1 {
            probabilities.present
        } else {
            probabilities.absent
        };

        Self {
            label,
            label_text: if label == 1 {
                "Endometriosis".to_string()
            } else {
                "No Endometriosis".to_string()
            },
            confidence,
            probabilities,
            risk_tier,
        }
    }

    /// Assemble an outcome from a calibrated probability alone.
    ///
    /// Label is the 0.5 decision boundary; the tier comes from the shared
    /// threshold table. Used by model-backed scorers.
    ///
    /// Both are derived from the *rounded* probability: callers observe the
    /// published pair, so near a boundary the tier and label must agree with
    /// it, not with the raw pre-rounding value.
    #[must_use]
    pub fn from_probability(p: f64) -> Self {
        let present = ProbabilityPair::from_present(p).present;
        let label = u8::from(present >= 0.5);
        Self::new(present, label, RiskTier::from_probability(present))
    }
}

/// Complete prediction record including metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Unique identifier
    pub id: String,

    /// The classification outcome
    pub outcome: PredictionOutcome,

    /// Interpretive message for the caller
    pub message: String,

    /// Timestamp of the prediction
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Prediction {
    /// Create a new prediction record from an outcome.
    #[must_use]
    pub fn new(outcome: PredictionOutcome, message: impl Into<String>) -> Self {
        Self {
            id: uuid_v4(),
            outcome,
            message: message.into(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy so record ids are unpredictable
/// on all platforms.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_probability_thresholds() {
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.29), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.3), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.69), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.7), RiskTier::High);
        assert_eq!(RiskTier::from_probability(1.0), RiskTier::High);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
    }

    #[test]
    fn test_probability_pair_sums_to_one_after_rounding() {
        // 0.33335 rounds to 0.3334 (round-half-away); absent is derived by
        // subtraction so the pair always sums to exactly 1.0.
        for p in [0.0, 0.1, 0.33335, 0.5, 0.66667, 0.85, 1.0] {
            let pair = ProbabilityPair::from_present(p);
            assert_eq!(pair.absent + pair.present, 1.0, "p = {p}");
        }
    }

    #[test]
    fn test_confidence_is_probability_of_predicted_class() {
        let positive = PredictionOutcome::from_probability(0.85);
        assert_eq!(positive.label, 1);
        assert_eq!(positive.confidence, positive.probabilities.present);

        let negative = PredictionOutcome::from_probability(0.10);
        assert_eq!(negative.label, 0);
        assert_eq!(negative.confidence, negative.probabilities.absent);
    }

    #[test]
    fn test_tier_follows_published_probability_at_boundaries() {
        // Raw probabilities that round across a tier boundary take the tier
        // of the published (rounded) value, keeping the tier a function of
        // `probabilities.present`.
        let outcome = PredictionOutcome::from_probability(0.69997);
        assert_eq!(outcome.probabilities.present, 0.7);
        assert_eq!(outcome.risk_tier, RiskTier::High);
        assert_eq!(
            outcome.risk_tier,
            RiskTier::from_probability(outcome.probabilities.present)
        );

        let outcome = PredictionOutcome::from_probability(0.29996);
        assert_eq!(outcome.probabilities.present, 0.3);
        assert_eq!(outcome.risk_tier, RiskTier::Moderate);

        // The label boundary behaves the same way.
        let outcome = PredictionOutcome::from_probability(0.49996);
        assert_eq!(outcome.probabilities.present, 0.5);
        assert_eq!(outcome.label, 1);
        assert_eq!(outcome.confidence, outcome.probabilities.present);
    }

    #[test]
    fn test_label_text() {
        assert_eq!(PredictionOutcome::from_probability(0.9).label_text, "Endometriosis");
        assert_eq!(
            PredictionOutcome::from_probability(0.1).label_text,
            "No Endometriosis"
        );
    }

    #[test]
    fn test_prediction_record_ids_are_unique() {
        let a = Prediction::new(PredictionOutcome::from_probability(0.5), "msg");
        let b = Prediction::new(PredictionOutcome::from_probability(0.5), "msg");
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID format with dashes
    }

    #[test]
    fn test_outcome_serialization_shape() {
        let outcome = PredictionOutcome::from_probability(0.85);
        let json = serde_json::to_value(&outcome).expect("Should serialize");
        assert_eq!(json["label"], 1);
        assert_eq!(json["risk_tier"], "High");
        assert_eq!(json["probabilities"]["present"], 0.85);
        assert_eq!(json["probabilities"]["absent"], 0.15);
    }
}
