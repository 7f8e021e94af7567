// src/handlers/api.rs
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::models::ActivityFetchState;
use crate::services::activity::ActivityPanel;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn get_activity(State(state): State<Arc<AppState>>) -> Json<ActivityFetchState> {
    let panel = ActivityPanel::new()
        .load(&state.activity_client, state.config.activity_limits())
        .await;

    Json(panel.into_state())
}
