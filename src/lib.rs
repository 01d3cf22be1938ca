//! Blindl Match - profile store and compatibility matching for the Blindl dating demo
//!
//! The core of this library is a pure matching engine: a weighted
//! compatibility scorer and a ranker that filters candidates by mutual
//! gender preference, scores them against a query profile and returns the
//! best ones. Everything else is the HTTP service wrapped around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility_score, find_matches, MatchResult, Matcher};
pub use models::{Profile, ProfileId, ScoredProfile, ScoringWeights};
