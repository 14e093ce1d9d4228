//! Weighted-symptom heuristic scorer.
//!
//! The canonical rule-based classification policy. Three scalars are
//! computed from the vector by presence (value > 0, never the fractional
//! value itself):
//!
//! - `symptom_count`: present keys across the whole schema
//! - `high_count`: present keys in the high-risk subset
//! - `moderate_count`: present keys in the moderate-risk subset
//!
//! `weighted_score = 2.0 * high_count + 1.0 * moderate_count + 0.5 * symptom_count`,
//! then the first matching branch wins:
//!
//! 1. `weighted_score >= 8` or `high_count >= 3` => High,
//!    `p = min(0.85, 0.60 + 0.05 * weighted_score)`, label 1
//! 2. `weighted_score >= 4` or `high_count >= 1` => Moderate,
//!    `p = min(0.65, 0.30 + 0.08 * weighted_score)`, label from `p >= 0.5`
//! 3. otherwise => Low, `p = min(0.35, 0.10 + 0.05 * weighted_score)`, label 0
//!
//! Total over valid vectors: every branch is bounded and the trait impl
//! never fails.

use crate::domain::{FeatureVector, PredictionOutcome, RiskTier, SymptomKey};
use crate::ports::{RiskScorer, ScoringError};

const HIGH_WEIGHT: f64 = 2.0;
const MODERATE_WEIGHT: f64 = 1.0;
const PRESENCE_WEIGHT: f64 = 0.5;

/// Rule-based scorer over the weighted symptom subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Create a new heuristic scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn evaluate(vector: &FeatureVector) -> PredictionOutcome {
        let symptom_count = vector.presence_count();
        let high_count = SymptomKey::HIGH_RISK
            .iter()
            .filter(|k| vector.is_present(**k))
            .count();
        let moderate_count = SymptomKey::MODERATE_RISK
            .iter()
            .filter(|k| vector.is_present(**k))
            .count();

        let weighted_score = HIGH_WEIGHT * high_count as f64
            + MODERATE_WEIGHT * moderate_count as f64
            + PRESENCE_WEIGHT * symptom_count as f64;

        tracing::debug!(
            "Heuristic counts: symptoms={symptom_count}, high={high_count}, \
             moderate={moderate_count}, weighted_score={weighted_score}"
        );

        // First match wins. The high_count >= 3 clause is a tie-break: three
        // high-risk symptoms force the High tier even when weighted_score
        // alone would only reach Moderate.
        if weighted_score >= 8.0 || high_count >= 3 {
            let p = (0.60 + 0.05 * weighted_score).min(0.85);
            PredictionOutcome::new(p, 1, RiskTier::High)
        } else if weighted_score >= 4.0 || high_count >= 1 {
            let p = (0.30 + 0.08 * weighted_score).min(0.65);
            let label = u8::from(p >= 0.5);
            PredictionOutcome::new(p, label, RiskTier::Moderate)
        } else {
            let p = (0.10 + 0.05 * weighted_score).min(0.35);
            PredictionOutcome::new(p, 0, RiskTier::Low)
        }
    }
}

impl RiskScorer for HeuristicScorer {
    fn score(&self, vector: &FeatureVector) -> Result<PredictionOutcome, ScoringError> {
        Ok(Self::evaluate(vector))
    }

    fn name(&self) -> &'static str {
        "weighted-heuristic"
    }
}
