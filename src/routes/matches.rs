use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, MatchesQuery, PublicMatch};
use crate::routes::{not_found, store_failure, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches/{profile_id}", web::get().to(find_matches));
}

/// Find matches endpoint
///
/// GET /api/matches/{profileId}?limit=10
///
/// Responds with the ranked candidates, each carrying a `compatibilityScore`,
/// with sensitive fields stripped.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<MatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile_id = path.into_inner();
    let limit = query
        .limit
        .map_or(state.matcher.default_limit(), usize::from)
        .min(state.max_limit);

    // Snapshot the store so ranking runs outside its lock
    let profiles = match state.store.list() {
        Ok(profiles) => profiles,
        Err(e) => return store_failure("Failed to find matches", e),
    };

    let Some(current) = profiles.iter().find(|p| p.id.matches_key(&profile_id)) else {
        return not_found("Profile", &profile_id);
    };

    tracing::info!("Finding matches for profile: {}, limit: {}", profile_id, limit);

    let result = state
        .matcher
        .find_matches(Some(profiles.as_slice()), Some(current), limit);

    tracing::info!(
        "Returning {} matches for profile {} ({} eligible of {} candidates)",
        result.matches.len(),
        profile_id,
        result.eligible_candidates,
        result.total_candidates
    );

    let body: Vec<PublicMatch> = result.matches.into_iter().map(PublicMatch::from).collect();
    HttpResponse::Ok().json(body)
}
