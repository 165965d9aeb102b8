use axum::{extract::State, http::StatusCode, response::Json};

use crate::{
    db::{score::get::get_all_scores_with_context, user::get::get_all_users},
    models::dashboard::Dashboard,
    standings::compute_dashboard,
    state::AppState,
};

pub async fn get_dashboard_handler(
    State(state): State<AppState>,
) -> Result<Json<Dashboard>, (StatusCode, String)> {
    if let Some(cached) = state.dashboard_cache.lock().await.get() {
        tracing::debug!("Serving dashboard from cache");
        return Ok(Json(cached));
    }

    let users = get_all_users(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Failed to fetch users for dashboard: {}", e);
        e.to_response()
    })?;

    let scores = get_all_scores_with_context(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch scores for dashboard: {}", e);
            e.to_response()
        })?;

    let dashboard = compute_dashboard(&users, &scores);
    state.dashboard_cache.lock().await.set(dashboard.clone());

    Ok(Json(dashboard))
}
