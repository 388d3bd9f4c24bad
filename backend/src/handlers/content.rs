use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SiteContent;
use crate::models::content::site_content;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Static site content (company info, restaurants, statistics)
#[utoipa::path(
    get,
    path = "/api/mock-data",
    responses(
        (status = 200, description = "Embedded site content", body = SiteContent)
    ),
    tag = "Content"
)]
pub async fn get_site_content() -> Json<SiteContent> {
    Json(site_content())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
