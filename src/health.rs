use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Asset Management API is running")]
    pub message: String,
    #[schema(example = "2025-01-01T00:00:00+00:00")]
    pub timestamp: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Health",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "Asset Management API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
