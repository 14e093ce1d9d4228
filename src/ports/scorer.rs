//! Risk scorer port: Trait for classification strategies.
//!
//! One interface serves both the rule-based heuristic and any trained-model
//! backend, so the two can never drift into separate undocumented code
//! paths. Both must honor the same output contract: label in {0,1},
//! probability pair summing to 1.0, confidence equal to the probability of
//! the predicted class, and the shared 0.3/0.7 tier thresholds.

use crate::domain::{FeatureVector, PredictionOutcome};

/// Errors raised by scoring backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The backend cannot produce a prediction (model missing, malformed,
    /// or inference failed).
    ///
    /// A failing backend must surface this error instead of silently
    /// substituting another strategy; masking a degraded backend as a
    /// healthy prediction is a correctness hazard in a health-adjacent tool.
    #[error("Scoring backend unavailable: {0}")]
    Unavailable(String),
}

/// Trait for risk classification strategies.
///
/// Implementations must be pure with respect to their input: no shared
/// mutable state, safe to call concurrently. Model-backed implementations
/// load their parameters once at construction, never per call.
pub trait RiskScorer: Send + Sync {
    /// Classify one feature vector.
    ///
    /// # Errors
    /// Returns `ScoringError::Unavailable` if the backend cannot score.
    /// Rule-based backends are total over valid vectors and never fail.
    fn score(&self, vector: &FeatureVector) -> Result<PredictionOutcome, ScoringError>;

    /// Short identifier of the strategy, for logging.
    fn name(&self) -> &'static str;
}
