//! Trained logistic-regression scorer.
//!
//! Alternate strategy behind the same `RiskScorer` interface as the
//! heuristic. The model is a plain logistic regression over the 27 features,
//! exported to JSON at training time and loaded exactly once at process
//! start; inference never mutates the loaded parameters. Load and inference
//! failures surface as `ScoringError::Unavailable` — this adapter never
//! falls back to the heuristic on its own.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureVector, PredictionOutcome, SymptomKey, SYMPTOM_COUNT};
use crate::ports::{RiskScorer, ScoringError};

/// Exported logistic-regression model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Feature names in coefficient order; must match the schema exactly
    pub feature_names: Vec<String>,

    /// One coefficient per feature
    pub coefficients: Vec<f64>,

    /// Model intercept
    pub intercept: f64,
}

/// Scorer backed by a loaded logistic-regression model.
#[derive(Debug, Clone)]
pub struct LogisticScorer {
    weights: [f64; SYMPTOM_COUNT],
    intercept: f64,
}

impl LogisticScorer {
    /// Load and validate a model from a JSON file.
    ///
    /// # Errors
    /// Returns `ScoringError::Unavailable` if the file cannot be read or
    /// parsed, or if the model fails validation.
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScoringError::Unavailable(format!("Failed to read model file {path:?}: {e}"))
        })?;
        let model: LogisticModel = serde_json::from_str(&content).map_err(|e| {
            ScoringError::Unavailable(format!("Failed to parse model file {path:?}: {e}"))
        })?;
        let scorer = Self::from_model(&model)?;

        tracing::info!(
            "Loaded logistic model from {:?} ({} features)",
            path,
            SYMPTOM_COUNT
        );
        Ok(scorer)
    }

    /// Build a scorer from an in-memory model, validating shape and values.
    ///
    /// # Errors
    /// Returns `ScoringError::Unavailable` if parameter lengths do not match
    /// the schema, feature order disagrees, or any parameter is non-finite.
    pub fn from_model(model: &LogisticModel) -> Result<Self, ScoringError> {
        if model.feature_names.len() != SYMPTOM_COUNT {
            return Err(ScoringError::Unavailable(format!(
                "Model has {} features, expected {SYMPTOM_COUNT}",
                model.feature_names.len()
            )));
        }
        if model.coefficients.len() != model.feature_names.len() {
            return Err(ScoringError::Unavailable(
                "Model coefficient count does not match feature_names length".to_string(),
            ));
        }
        for (i, key) in SymptomKey::ALL.iter().enumerate() {
            if model.feature_names[i] != key.api_name() {
                return Err(ScoringError::Unavailable(format!(
                    "Model feature order mismatch at index {i}: got '{}', expected '{}'",
                    model.feature_names[i],
                    key.api_name()
                )));
            }
        }
        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ScoringError::Unavailable(
                "Model contains non-finite parameters".to_string(),
            ));
        }

        let mut weights = [0.0; SYMPTOM_COUNT];
        weights.copy_from_slice(&model.coefficients);
        Ok(Self {
            weights,
            intercept: model.intercept,
        })
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl RiskScorer for LogisticScorer {
    fn score(&self, vector: &FeatureVector) -> Result<PredictionOutcome, ScoringError> {
        let features = vector.to_vec();
        let linear: f64 = self.intercept
            + self
                .weights
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>();

        if !linear.is_finite() {
            return Err(ScoringError::Unavailable(
                "Model produced a non-finite score".to_string(),
            ));
        }

        let probability = Self::sigmoid(linear);
        tracing::debug!("Logistic inference: linear={linear:.4}, p={probability:.4}");

        Ok(PredictionOutcome::from_probability(probability))
    }

    fn name(&self) -> &'static str {
        "logistic-model"
    }
}
