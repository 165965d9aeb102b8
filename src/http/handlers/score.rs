use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use crate::{
    db::{matches::get::get_match_by_id, score::put::upsert_score, user::get::get_user_by_id},
    errors::AppError,
    models::score::UserScore,
    standings::round_to_tenth,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub user_id: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoresPayload {
    pub match_id: String,
    pub scores: Vec<ScoreEntry>,
}

/// Store a match's scores, one upsert per (user, match) pair, then drop the
/// cached views that embedded the old values.
pub async fn submit_scores_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitScoresPayload>,
) -> Result<Json<Vec<UserScore>>, (StatusCode, String)> {
    if payload.scores.is_empty() {
        return Err(AppError::BadRequest("No scores submitted".into()).to_response());
    }

    get_match_by_id(&payload.match_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Score submission for unknown match: {}", e);
            e.to_response()
        })?;

    let mut stored = Vec::with_capacity(payload.scores.len());

    for entry in &payload.scores {
        if !entry.score.is_finite() || entry.score < 0.0 {
            return Err(AppError::BadRequest(format!(
                "Invalid score for user {}: {}",
                entry.user_id, entry.score
            ))
            .to_response());
        }

        get_user_by_id(&entry.user_id, state.postgres.clone())
            .await
            .map_err(|e| {
                tracing::error!("Score submission for unknown user: {}", e);
                e.to_response()
            })?;

        // Scores carry one decimal place
        let score = round_to_tenth(entry.score);

        let row = upsert_score(&entry.user_id, &payload.match_id, score, state.postgres.clone())
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to store score for user {} in match {}: {}",
                    entry.user_id,
                    payload.match_id,
                    e
                );
                e.to_response()
            })?;

        stored.push(row);
    }

    state.dashboard_cache.lock().await.invalidate();
    state.matches_cache.lock().await.invalidate_all();
    state.match_cache.lock().await.invalidate(&payload.match_id);

    tracing::info!(
        "Stored {} scores for match {}",
        stored.len(),
        payload.match_id
    );

    Ok(Json(stored))
}
