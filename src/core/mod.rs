// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::is_eligible;
pub use matcher::{find_matches, MatchResult, Matcher, DEFAULT_MATCH_LIMIT};
pub use scoring::{calculate_compatibility_score, calculate_compatibility_score_with, MAX_SCORE};
