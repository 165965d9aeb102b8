use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;

use crate::{
    db::{
        matches::get::{get_match_detail, get_matches_with_stats},
        score::get::get_scores_for_match,
    },
    models::{
        matches::{MatchDetail, MatchSummary},
        score::UserScore,
    },
    state::AppState,
};

pub async fn get_matches_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchSummary>>, (StatusCode, String)> {
    // Daily bucket: the listing changes at most once per match day
    let cache_key = format!("matches-{}", Utc::now().format("%Y-%m-%d"));

    if let Some(cached) = state.matches_cache.lock().await.get(&cache_key) {
        tracing::debug!("Serving match list from cache");
        return Ok(Json(cached));
    }

    let matches = get_matches_with_stats(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch match list: {}", e);
            e.to_response()
        })?;

    state
        .matches_cache
        .lock()
        .await
        .set(cache_key, matches.clone());

    Ok(Json(matches))
}

pub async fn get_match_handler(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchDetail>, (StatusCode, String)> {
    if let Some(cached) = state.match_cache.lock().await.get(&match_id) {
        tracing::debug!("Serving match {} from cache", match_id);
        return Ok(Json(cached));
    }

    let detail = get_match_detail(&match_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            e.to_response()
        })?;

    state
        .match_cache
        .lock()
        .await
        .set(match_id, detail.clone());

    Ok(Json(detail))
}

pub async fn get_match_scores_handler(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Vec<UserScore>>, (StatusCode, String)> {
    let scores = get_scores_for_match(&match_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch scores for match {}: {}", match_id, e);
            e.to_response()
        })?;

    Ok(Json(scores))
}
