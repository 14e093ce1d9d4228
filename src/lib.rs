//! # Endorisk
//!
//! Symptom-based endometriosis risk classification engine.
//!
//! This crate provides:
//! - A fixed 27-symptom feature schema with strict value validation
//! - Multi-day symptom log aggregation by per-symptom prevalence
//! - Deterministic risk scoring (rule-based or model-backed) producing a
//!   binary label, calibrated probability pair, confidence, and risk tier
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (SymptomKey, FeatureVector, Prediction)
//! - `ports`: Trait definitions for scoring strategies
//! - `adapters`: Concrete scorers (weighted heuristic, logistic model)
//! - `application`: Use cases orchestrating domain and ports
//!
//! All scoring paths are pure and stateless: safe to call concurrently
//! without coordination. The logistic model is loaded once at startup and
//! never mutated by inference.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use domain::{DailyLog, FeatureVector, Prediction, PredictionOutcome, RiskTier, SymptomKey};

/// Result type for endorisk operations.
pub type Result<T> = std::result::Result<T, EndoriskError>;

/// Main error type for endorisk.
#[derive(Debug, thiserror::Error)]
pub enum EndoriskError {
    #[error("Invalid symptom data: {0}")]
    Vector(#[from] domain::VectorError),

    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] domain::AggregationError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ports::ScoringError),
}
