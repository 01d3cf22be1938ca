use crate::models::{Profile, ScoringWeights};
use std::collections::HashSet;

/// Upper bound of any compatibility score
pub const MAX_SCORE: f64 = 100.0;

/// Calculate the compatibility score (0-100) between two profiles using the
/// default weights
///
/// Scoring formula (each term is 0 when either side lacks the field):
/// score = (
///     age                 # 10 within 2 years, 5 within 5 years
///   + location            # 10 on exact match
///   + relationship_goals  # 15 on exact match
///   + interests           # 20 x shared / longer list
///   + hobbies             # 15 x shared / longer list
///   + languages           # 10 x shared / longer list
///   + smoking             # 10 on exact match
///   + drinking            # 10 on exact match
/// )
pub fn calculate_compatibility_score(a: &Profile, b: &Profile) -> f64 {
    calculate_compatibility_score_with(a, b, &ScoringWeights::default())
}

/// Calculate the compatibility score with explicit per-criterion maxima
pub fn calculate_compatibility_score_with(
    a: &Profile,
    b: &Profile,
    weights: &ScoringWeights,
) -> f64 {
    let total = age_score(a.age, b.age) * weights.age
        + label_score(a.location.as_deref(), b.location.as_deref()) * weights.location
        + label_score(
            a.relationship_goals.as_deref(),
            b.relationship_goals.as_deref(),
        ) * weights.relationship_goals
        + overlap_score(a.interests.as_deref(), b.interests.as_deref()) * weights.interests
        + overlap_score(a.hobbies.as_deref(), b.hobbies.as_deref()) * weights.hobbies
        + overlap_score(a.languages.as_deref(), b.languages.as_deref()) * weights.languages
        + label_score(a.smoking.as_deref(), b.smoking.as_deref()) * weights.smoking
        + label_score(a.drinking.as_deref(), b.drinking.as_deref()) * weights.drinking;

    total.min(MAX_SCORE).max(0.0)
}

/// Age score (0-1)
/// Full credit within 2 years, half credit within 5
#[inline]
fn age_score(a: Option<u32>, b: Option<u32>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    match a.abs_diff(b) {
        0..=2 => 1.0,
        3..=5 => 0.5,
        _ => 0.0,
    }
}

/// Exact label match (0 or 1)
#[inline]
fn label_score(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

/// List overlap (0-1)
///
/// Counts the entries of `a` that also appear in `b`, divided by the length
/// of the longer list. Two empty lists share nothing.
#[inline]
fn overlap_score(a: Option<&[String]>, b: Option<&[String]>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }

    let lookup: HashSet<&str> = b.iter().map(String::as_str).collect();
    let shared = a.iter().filter(|item| lookup.contains(item.as_str())).count();

    shared as f64 / longest as f64
}
