//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod log;
mod prediction;
mod symptom;
mod vector;

pub use log::{aggregate, AggregationError, DailyLog};
pub use prediction::{Prediction, PredictionOutcome, ProbabilityPair, RiskTier};
pub use symptom::{SymptomKey, SYMPTOM_COUNT};
pub use vector::{FeatureVector, VectorError};
