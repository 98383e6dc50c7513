//! Web handlers for the diary form and its history.

use crate::render;
use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::Local;
use kokoro::{DiaryAnalyzer, History, HistoryRecord};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<DiaryAnalyzer>,
    pub history: Arc<dyn History>,
}

#[derive(Deserialize)]
pub struct DiaryForm {
    #[serde(default)]
    pub diary_text: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::page(None, "", &state.history.all()))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<DiaryForm>) -> Html<String> {
    if form.diary_text.is_empty() {
        debug!("empty submission, pipeline skipped");
        return Html(render::page(None, "", &state.history.all()));
    }

    let result = state.analyzer.analyze(&form.diary_text).await;
    state.history.append(HistoryRecord {
        timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        text: form.diary_text.clone(),
        result: result.clone(),
    });
    info!("diary entry analyzed");

    Html(render::page(
        Some(&result),
        &form.diary_text,
        &state.history.all(),
    ))
}

/// Full history as JSON, most recent first.
pub async fn history_log(State(state): State<AppState>) -> Json<Vec<HistoryRecord>> {
    Json(state.history.all())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/history", get(history_log))
        .with_state(state)
}
