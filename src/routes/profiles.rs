use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use crate::models::{Profile, ProfilePayload, PublicProfile};
use crate::routes::{not_found, store_failure, AppState};
use crate::services::StoreError;

/// Configure all profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::put().to(update_profile));
}

/// List every stored profile
///
/// GET /api/profiles
async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.store.list() {
        Ok(profiles) => {
            let body: Vec<PublicProfile> = profiles.into_iter().map(PublicProfile::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(e) => store_failure("Failed to fetch profiles", e),
    }
}

/// GET /api/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.find(&id) {
        Ok(Some(profile)) => HttpResponse::Ok().json(PublicProfile::from(profile)),
        Ok(None) => not_found("Profile", &id),
        Err(e) => store_failure("Failed to fetch profile", e),
    }
}

/// Create a profile
///
/// POST /api/profiles
///
/// Any JSON object is accepted. A fresh id is assigned unless the body
/// carries one, and the profile is flagged as complete.
async fn create_profile(
    state: web::Data<AppState>,
    body: web::Json<ProfilePayload>,
) -> impl Responder {
    let mut fields = body.into_inner().into_fields();
    fields
        .entry("id")
        .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
    fields.insert("hasCompleteProfile".to_string(), Value::Bool(true));

    let profile: Profile = match serde_json::from_value(Value::Object(fields)) {
        Ok(profile) => profile,
        Err(e) => return store_failure("Failed to create profile", StoreError::from(e)),
    };

    match state.store.upsert(profile) {
        Ok(profile) => {
            tracing::info!("Created profile {}", profile.id);
            HttpResponse::Created().json(PublicProfile::from(profile))
        }
        Err(e) => store_failure("Failed to create profile", e),
    }
}

/// Update a profile by shallow-merging the body over it
///
/// PUT /api/profiles/{id}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProfilePayload>,
) -> impl Responder {
    let id = path.into_inner();

    let patch = body.into_inner().into_fields();

    let result = state
        .store
        .update(&id, Box::new(move |existing: &Profile| {
            existing.merged(patch).map_err(StoreError::from)
        }));

    match result {
        Ok(Some(profile)) => {
            tracing::info!("Updated profile {}", profile.id);
            HttpResponse::Ok().json(PublicProfile::from(profile))
        }
        Ok(None) => not_found("Profile", &id),
        Err(e) => store_failure("Failed to update profile", e),
    }
}
