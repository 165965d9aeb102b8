use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    db::{
        score::get::get_played_matches_for_user,
        user::get::{get_user_by_id, get_users_ordered_by_name},
    },
    models::{User, user::UserDetails},
    state::AppState,
};

pub async fn get_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = get_users_ordered_by_name(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch users: {}", e);
            e.to_response()
        })?;

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDetails>, (StatusCode, String)> {
    let user = get_user_by_id(&user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user {}: {}", user_id, e);
            e.to_response()
        })?;

    let matches_played = get_played_matches_for_user(&user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch matches for user {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(UserDetails {
        user,
        matches_played,
    }))
}
