use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{IdentifierKind, RecommendationResult};
use crate::services::loader;

use super::state::TableSnapshot;
use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub identifier: String,
    pub kind: IdentifierKind,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub identifier: String,
    pub collaborative: Vec<String>,
    pub content: Vec<String>,
    pub external: Vec<String>,
}

impl RecommendationsResponse {
    fn from_result(identifier: String, result: RecommendationResult) -> Self {
        Self {
            identifier,
            collaborative: result.collaborative,
            content: result.content,
            external: result.external,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub collaborative_rows: usize,
    pub content_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Aggregate recommendations from all three sources for one identifier
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> AppResult<Json<RecommendationsResponse>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "recommendations",
        %request_id,
        kind = ?request.kind,
    );

    async move {
        let aggregator = state.aggregator().await;
        let result = aggregator
            .get_recommendations(&request.identifier, request.kind)
            .await?;

        Ok(Json(RecommendationsResponse::from_result(
            request.identifier,
            result,
        )))
    }
    .instrument(span)
    .await
}

/// Report row counts and load time of the published table snapshot
pub async fn get_tables(State(state): State<AppState>) -> Json<TablesResponse> {
    let snapshot = state.tables.read().await;
    Json(TablesResponse {
        collaborative_rows: snapshot.collaborative.len(),
        content_rows: snapshot.content.len(),
        loaded_at: snapshot.loaded_at,
    })
}

/// Re-read both source files and atomically publish the new snapshot
pub async fn reload_tables(State(state): State<AppState>) -> AppResult<Json<TablesResponse>> {
    // Both tables are built before the lock is taken; a failure here leaves
    // the current snapshot untouched.
    let collaborative = loader::load_from_path(&state.collaborative_table_path).await?;
    let content = loader::load_from_path(&state.content_table_path).await?;
    let snapshot = TableSnapshot::new(collaborative, content);

    let response = TablesResponse {
        collaborative_rows: snapshot.collaborative.len(),
        content_rows: snapshot.content.len(),
        loaded_at: snapshot.loaded_at,
    };

    let mut published = state.tables.write().await;
    *published = snapshot;

    tracing::info!(
        collaborative_rows = response.collaborative_rows,
        content_rows = response.content_rows,
        "Reloaded source tables"
    );

    Ok(Json(response))
}
