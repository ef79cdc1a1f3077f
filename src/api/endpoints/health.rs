//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_ready: bool,
    pub version: &'static str,
}

/// `GET /api/health` — connection check for the browser client.
///
/// `model_ready` reflects a live probe of the backing model service.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let model_ready = ctx.engine.model_ready().await;

    Ok(Json(HealthResponse {
        status: "ok",
        model_ready,
        version: crate::config::APP_VERSION,
    }))
}
