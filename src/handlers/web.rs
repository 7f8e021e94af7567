// src/handlers/web.rs
use axum::{extract::State, response::Html};
use chrono::Utc;
use std::sync::Arc;

use crate::services::activity::ActivityPanel;
use crate::templates;
use crate::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::index::render(&state.config.repository_url()))
}

/// Settled activity panel fragment. Always 200: a failed fetch renders the
/// fallback view rather than an error page.
pub async fn activity(State(state): State<Arc<AppState>>) -> Html<String> {
    let panel = ActivityPanel::new()
        .load(&state.activity_client, state.config.activity_limits())
        .await;

    Html(templates::activity::render(
        panel.state(),
        Utc::now(),
        &state.config.repository_url(),
    ))
}
