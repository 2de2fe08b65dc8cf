use axum::extract::State;
use serde::{Deserialize, Serialize};
use storefront_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database_response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness",
    description = "Pings the database and reports the round-trip time.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let elapsed = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        database_response_time_ms: elapsed,
    }))
}
