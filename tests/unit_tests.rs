// Unit tests for the Blindl matching engine

use blindl_match::core::{
    calculate_compatibility_score, calculate_compatibility_score_with, find_matches, is_eligible,
    Matcher, MAX_SCORE,
};
use blindl_match::models::{Profile, ProfileId, ScoringWeights};
use proptest::prelude::*;
use serde_json::json;

fn labels(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| item.to_string()).collect())
}

fn query_profile() -> Profile {
    Profile {
        gender: Some("Male".to_string()),
        looking_for: Some("Female".to_string()),
        age: Some(25),
        location: Some("Chicago".to_string()),
        interests: labels(&["Coding", "Reading", "Hiking"]),
        hobbies: labels(&["Gaming", "Photography"]),
        languages: labels(&["English", "Spanish"]),
        relationship_goals: Some("Dating".to_string()),
        smoking: Some("Never".to_string()),
        drinking: Some("Socially".to_string()),
        ..Profile::new("1")
    }
}

fn compatible_profile() -> Profile {
    Profile {
        gender: Some("Female".to_string()),
        looking_for: Some("Male".to_string()),
        age: Some(26),
        location: Some("Chicago".to_string()),
        interests: labels(&["Coding", "Reading", "Photography"]),
        hobbies: labels(&["Gaming", "Hiking"]),
        languages: labels(&["English", "Spanish"]),
        relationship_goals: Some("Dating".to_string()),
        smoking: Some("Never".to_string()),
        drinking: Some("Socially".to_string()),
        ..Profile::new("2")
    }
}

fn distant_profile() -> Profile {
    Profile {
        gender: Some("Female".to_string()),
        looking_for: Some("Male".to_string()),
        age: Some(30),
        location: Some("New York".to_string()),
        interests: labels(&["Cooking", "Travel"]),
        hobbies: labels(&["Yoga", "Painting"]),
        languages: labels(&["English"]),
        relationship_goals: Some("Marriage".to_string()),
        smoking: Some("Sometimes".to_string()),
        drinking: Some("Never".to_string()),
        ..Profile::new("3")
    }
}

#[test]
fn test_compatible_profiles_score_high() {
    let score = calculate_compatibility_score(&query_profile(), &compatible_profile());

    assert!(score > 80.0, "Expected > 80, got {}", score);
    // 10 + 10 + 15 + 20*2/3 + 15/2 + 10 + 10 + 10
    assert!((score - 85.8333).abs() < 0.001);
}

#[test]
fn test_incompatible_profiles_score_low() {
    let score = calculate_compatibility_score(&query_profile(), &distant_profile());

    assert!(score < 50.0, "Expected < 50, got {}", score);
    // age within 5 years (5) + half the languages (5)
    assert!((score - 10.0).abs() < 1e-9);
}

#[test]
fn test_missing_interests_still_scores() {
    let mut partial = query_profile();
    partial.interests = None;

    let score = calculate_compatibility_score(&partial, &compatible_profile());

    assert!(score > 0.0);
    assert!((score - 72.5).abs() < 1e-9);
}

#[test]
fn test_identical_full_profiles_score_one_hundred() {
    let a = query_profile();
    let mut b = query_profile();
    b.id = ProfileId::from("other");

    assert_eq!(calculate_compatibility_score(&a, &b), 100.0);
}

#[test]
fn test_bare_profiles_score_zero() {
    let bare = Profile::new("bare");

    assert_eq!(calculate_compatibility_score(&bare, &query_profile()), 0.0);
    assert_eq!(calculate_compatibility_score(&query_profile(), &bare), 0.0);
}

#[test]
fn test_comma_separated_lists_are_ignored() {
    let parsed: Profile = serde_json::from_value(json!({
        "id": "seed",
        "interests": "Coding, Reading, Hiking",
        "hobbies": "Gaming, Photography",
        "languages": "English, Spanish"
    }))
    .unwrap();

    assert_eq!(calculate_compatibility_score(&query_profile(), &parsed), 0.0);
}

#[test]
fn test_weights_are_configurable() {
    let weights = ScoringWeights {
        location: 0.0,
        ..ScoringWeights::default()
    };

    let score =
        calculate_compatibility_score_with(&query_profile(), &compatible_profile(), &weights);

    assert!((score - 75.8333).abs() < 0.001);
}

#[test]
fn test_find_matches_sorted_by_compatibility() {
    let all = vec![query_profile(), compatible_profile(), distant_profile()];

    let matches = find_matches(Some(all.as_slice()), Some(&query_profile()), 10);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].profile.id, ProfileId::from("2"));
    assert_eq!(matches[1].profile.id, ProfileId::from("3"));
}

#[test]
fn test_find_matches_respects_limit() {
    let all = vec![query_profile(), compatible_profile(), distant_profile()];

    let matches = find_matches(Some(all.as_slice()), Some(&query_profile()), 1);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].profile.id, ProfileId::from("2"));
}

#[test]
fn test_find_matches_filters_self_and_incompatible_genders() {
    let mut same_gender = compatible_profile();
    same_gender.id = ProfileId::from("4");
    same_gender.gender = Some("Male".to_string());

    let all = vec![query_profile(), compatible_profile(), distant_profile(), same_gender];
    let query = query_profile();

    let matches = find_matches(Some(all.as_slice()), Some(&query), 10);

    assert!(matches.iter().all(|m| m.profile.id != query.id));
    assert!(matches
        .iter()
        .all(|m| m.profile.gender.as_deref() == Some("Female")));
}

#[test]
fn test_find_matches_degenerate_inputs() {
    let query = query_profile();
    let all = vec![compatible_profile()];

    assert!(find_matches(Some(&[] as &[Profile]), Some(&query), 10).is_empty());
    assert!(find_matches(None, Some(&query), 10).is_empty());
    assert!(find_matches(Some(all.as_slice()), None, 10).is_empty());

    // Nobody is looking for the query
    let lonely = Profile {
        looking_for: Some("Nonbinary".to_string()),
        ..query_profile()
    };
    assert!(find_matches(Some(all.as_slice()), Some(&lonely), 10).is_empty());
}

#[test]
fn test_find_matches_passes_fields_through() {
    let mut candidate = compatible_profile();
    candidate.extra.insert("name".to_string(), json!("Sarah Chen"));
    candidate.extra.insert("password".to_string(), json!("test123"));
    let all = vec![candidate];

    let matches = find_matches(Some(all.as_slice()), Some(&query_profile()), 10);
    let body = serde_json::to_value(&matches[0]).unwrap();

    assert_eq!(body["name"], "Sarah Chen");
    // Redaction is the response layer's job
    assert_eq!(body["password"], "test123");
    assert!(body["compatibilityScore"].as_f64().unwrap() > 80.0);
}

#[test]
fn test_matcher_uses_its_weights() {
    let weights = ScoringWeights {
        drinking: 0.0,
        smoking: 0.0,
        ..ScoringWeights::default()
    };
    let matcher = Matcher::new(weights, 5);
    let all = vec![compatible_profile()];

    let result = matcher.find_matches(Some(all.as_slice()), Some(&query_profile()), 5);

    assert_eq!(matcher.default_limit(), 5);
    assert!((result.matches[0].compatibility_score - 65.8333).abs() < 0.001);
}

fn arb_label() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["A", "B", "C"]).prop_map(String::from))
}

fn arb_labels() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(
        prop::sample::select(vec!["x", "y", "z", "w"]).prop_map(String::from),
        0..6,
    ))
}

prop_compose! {
    fn arb_profile()(
        id in 0i64..8,
        gender in arb_label(),
        looking_for in arb_label(),
        age in prop::option::of(0u32..100),
        location in arb_label(),
        relationship_goals in arb_label(),
        interests in arb_labels(),
        hobbies in arb_labels(),
        languages in arb_labels(),
        smoking in arb_label(),
        drinking in arb_label(),
    ) -> Profile {
        Profile {
            gender,
            looking_for,
            age,
            location,
            relationship_goals,
            interests,
            hobbies,
            languages,
            smoking,
            drinking,
            ..Profile::new(id)
        }
    }
}

proptest! {
    #[test]
    fn prop_score_within_bounds(a in arb_profile(), b in arb_profile()) {
        let score = calculate_compatibility_score(&a, &b);
        prop_assert!((0.0..=MAX_SCORE).contains(&score));
    }

    #[test]
    fn prop_matches_are_eligible_and_ordered(
        candidates in prop::collection::vec(arb_profile(), 0..20),
        query in arb_profile(),
        limit in 0usize..12,
    ) {
        let matches = find_matches(Some(candidates.as_slice()), Some(&query), limit);

        prop_assert!(matches.len() <= limit);
        for m in &matches {
            prop_assert!(m.profile.id != query.id);
            prop_assert!(is_eligible(&m.profile, &query));
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }

        if limit >= 1 {
            let best = candidates
                .iter()
                .filter(|c| is_eligible(c, &query))
                .map(|c| calculate_compatibility_score(&query, c))
                .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))));
            prop_assert_eq!(matches.first().map(|m| m.compatibility_score), best);
        }
    }
}
