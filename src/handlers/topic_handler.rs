use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    models::{
        domain::TopicCatalog,
        dto::response::{HealthResponse, PeriodicTableResponse},
    },
    services::http_helpers::{optional_json, success_json},
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    success_json(HealthResponse { status: "ok" })
}

#[get("/api/topics")]
pub async fn list_topics() -> HttpResponse {
    success_json(TopicCatalog::new())
}

#[get("/api/periodic-table")]
pub async fn periodic_table() -> HttpResponse {
    success_json(PeriodicTableResponse::default())
}

/// Banner animation for the landing page; 204 when it cannot be fetched.
#[get("/api/animations/banner")]
pub async fn banner_animation(state: web::Data<AppState>) -> HttpResponse {
    optional_json(state.animation_service.banner().await)
}
