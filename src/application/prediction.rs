//! Prediction service: Orchestrates the classification pipeline.
//!
//! Single-day: raw symptom map -> feature vector -> scorer.
//! Multi-day: daily logs -> aggregated vector -> scorer.
//!
//! Construction and aggregation errors propagate to the caller unmodified;
//! a malformed request is never masked as a low-risk prediction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{aggregate, DailyLog, FeatureVector, Prediction, PredictionOutcome};
use crate::ports::RiskScorer;
use crate::EndoriskError;

/// Service for running risk predictions with an injected scoring strategy.
///
/// The strategy is chosen once at startup and shared read-only; the service
/// holds no other state and is safe to use from concurrent requests.
pub struct PredictionService<S>
where
    S: RiskScorer + ?Sized,
{
    scorer: Arc<S>,
}

impl<S> PredictionService<S>
where
    S: RiskScorer + ?Sized,
{
    /// Create a new prediction service.
    pub fn new(scorer: Arc<S>) -> Self {
        Self { scorer }
    }

    /// Run a prediction on a single day's symptom map.
    ///
    /// # Errors
    /// Returns `EndoriskError::Vector` on malformed symptom values and
    /// `EndoriskError::Scoring` if the backend is unavailable.
    pub fn predict_single(&self, raw: &HashMap<String, f64>) -> Result<Prediction, EndoriskError> {
        let vector = FeatureVector::from_raw(raw)?;
        tracing::debug!(
            "Built feature vector: {} symptoms present",
            vector.presence_count()
        );

        let outcome = self.score(&vector)?;
        let message = single_day_message(&outcome);
        Ok(Prediction::new(outcome, message))
    }

    /// Run a prediction over multiple daily logs.
    ///
    /// Aggregates the logs by per-symptom prevalence and scores the result.
    ///
    /// # Errors
    /// Returns `EndoriskError::Aggregation` when `logs` is empty, and the
    /// same vector/scoring errors as `predict_single`.
    pub fn predict_multi_day(&self, logs: &[DailyLog]) -> Result<Prediction, EndoriskError> {
        let aggregated = aggregate(logs)?;
        tracing::debug!(
            "Aggregated {} daily logs: {} symptoms present",
            logs.len(),
            aggregated.presence_count()
        );

        let outcome = self.score(&aggregated)?;
        let message = multi_day_message(&outcome, logs.len());
        Ok(Prediction::new(outcome, message))
    }

    fn score(&self, vector: &FeatureVector) -> Result<PredictionOutcome, EndoriskError> {
        let outcome = self.scorer.score(vector)?;
        tracing::info!(
            "Prediction complete ({}): label={}, confidence={:.2}%, risk={}",
            self.scorer.name(),
            outcome.label,
            outcome.confidence * 100.0,
            outcome.risk_tier
        );
        Ok(outcome)
    }
}

fn single_day_message(outcome: &PredictionOutcome) -> String {
    if outcome.label == 1 {
        format!(
            "The model suggests a {} risk of endometriosis. Please consult with a \
             healthcare professional for proper diagnosis.",
            outcome.risk_tier.to_string().to_lowercase()
        )
    } else {
        "The model suggests a low likelihood of endometriosis based on the provided \
         symptoms. However, please consult with a healthcare professional if you have \
         concerns."
            .to_string()
    }
}

fn multi_day_message(outcome: &PredictionOutcome, day_count: usize) -> String {
    if outcome.label == 1 {
        format!(
            "Based on {day_count} days of symptom tracking, the model suggests a {} \
             risk of endometriosis. Please consult with a healthcare professional for \
             proper diagnosis.",
            outcome.risk_tier.to_string().to_lowercase()
        )
    } else {
        format!(
            "Based on {day_count} days of symptom tracking, the model suggests a low \
             likelihood of endometriosis. However, please consult with a healthcare \
             professional if you have concerns."
        )
    }
}
