//! Adapters layer: Concrete scoring strategies.
//!
//! - `heuristic`: deterministic weighted-symptom rule scorer
//! - `logistic`: trained logistic-regression scorer loaded from a JSON file

pub mod heuristic;
pub mod logistic;

pub use heuristic::HeuristicScorer;
pub use logistic::{LogisticModel, LogisticScorer};
