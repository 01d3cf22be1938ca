use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, MessageResponse, StatusResponse};

/// Liveness routes mounted outside the API scope
pub fn configure_root(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(liveness));
}

/// Health routes mounted inside the API scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/test", web::get().to(reachability));
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Backend server is running".to_string(),
        timestamp: None,
    })
}

async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        status: "healthy".to_string(),
    })
}

/// Health check endpoint
///
/// GET /api/health
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/test
async fn reachability() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Server is running and accessible".to_string(),
        timestamp: Some(chrono::Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
