//! Ports layer: Trait definitions for scoring strategies.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the interchangeable scoring backends.

mod scorer;

pub use scorer::{RiskScorer, ScoringError};
