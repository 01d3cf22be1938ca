use crate::core::{filters::is_eligible, scoring::calculate_compatibility_score_with};
use crate::models::{Profile, ScoredProfile, ScoringWeights};

/// Number of matches returned when the caller does not ask for a size
pub const DEFAULT_MATCH_LIMIT: usize = 10;

const SCORE_FIELD: &str = "compatibilityScore";

/// Result of the matching process
#[derive(Debug, Default)]
pub struct MatchResult {
    pub matches: Vec<ScoredProfile>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Match ranking orchestrator
///
/// # Pipeline Stages
/// 1. Mutual gender / lookingFor eligibility (self excluded)
/// 2. Compatibility scoring against the query profile
/// 3. Ranking by score, ties keep input order
/// 4. Truncation to the requested limit
///
/// Stateless apart from its configuration; safe to share between workers.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    default_limit: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, default_limit: usize) -> Self {
        Self {
            weights,
            default_limit,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MATCH_LIMIT)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Compatibility score between two profiles under this matcher's weights
    pub fn score(&self, a: &Profile, b: &Profile) -> f64 {
        calculate_compatibility_score_with(a, b, &self.weights)
    }

    /// Find the best matches for `query` among `candidates`
    ///
    /// Missing candidates or a missing query yield an empty result rather
    /// than an error. Candidates are cloned into the result; the inputs are
    /// never modified.
    ///
    /// # Arguments
    /// * `candidates` - Every profile that could be suggested
    /// * `query` - The profile matches are requested for
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches(
        &self,
        candidates: Option<&[Profile]>,
        query: Option<&Profile>,
        limit: usize,
    ) -> MatchResult {
        let (Some(candidates), Some(query)) = (candidates, query) else {
            return MatchResult::default();
        };

        let total_candidates = candidates.len();

        let mut scored: Vec<(f64, &Profile)> = candidates
            .iter()
            .filter(|candidate| is_eligible(candidate, query))
            .map(|candidate| (self.score(query, candidate), candidate))
            .collect();

        let eligible_candidates = scored.len();
        tracing::debug!(
            "Scored {} eligible of {} candidates for profile {}",
            eligible_candidates,
            total_candidates,
            query.id
        );

        // Stable sort keeps input order among equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        let matches = scored
            .into_iter()
            .map(|(compatibility_score, candidate)| {
                let mut profile = candidate.clone();
                profile.extra.remove(SCORE_FIELD);
                ScoredProfile {
                    profile,
                    compatibility_score,
                }
            })
            .collect();

        MatchResult {
            matches,
            total_candidates,
            eligible_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank `candidates` for `query` with the default weights
pub fn find_matches(
    candidates: Option<&[Profile]>,
    query: Option<&Profile>,
    limit: usize,
) -> Vec<ScoredProfile> {
    Matcher::default().find_matches(candidates, query, limit).matches
}
