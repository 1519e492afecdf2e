//! Health check handlers

use crate::{AppState, HealthStatus};
use axum::{extract::State, response::Json};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(&state.service))
}
