use sqlx::{FromRow, PgPool};

use crate::{
    errors::AppError,
    models::{
        score::{ScoreWithContext, ScoreWithUser, UserScore},
        user::PlayedMatch,
    },
};

/// Every score joined with its user names and match context. This is the
/// standings pipeline's input; the fixed ordering keeps recomputation
/// deterministic across calls.
pub async fn get_all_scores_with_context(
    postgres: PgPool,
) -> Result<Vec<ScoreWithContext>, AppError> {
    sqlx::query_as::<_, ScoreWithContext>(
        "SELECT s.id, s.user_id, s.match_id, s.score,
            u.name AS user_name, u.display_name AS user_display_name,
            m.match_number, m.date AS match_date,
            m.home_team_id, home.name AS home_team_name,
            m.away_team_id, away.name AS away_team_name
        FROM user_scores s
        JOIN users u ON u.id = s.user_id
        JOIN matches m ON m.id = s.match_id
        JOIN teams home ON home.id = m.home_team_id
        JOIN teams away ON away.id = m.away_team_id
        ORDER BY m.date, s.match_id, s.user_id",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch scores: {}", e)))
}

pub async fn get_all_scores_with_users(postgres: PgPool) -> Result<Vec<ScoreWithUser>, AppError> {
    sqlx::query_as::<_, ScoreWithUser>(
        "SELECT s.id, s.user_id, s.match_id, s.score,
            u.name AS user_name, u.display_name AS user_display_name
        FROM user_scores s
        JOIN users u ON u.id = s.user_id
        ORDER BY s.match_id, s.user_id",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch scores: {}", e)))
}

pub async fn get_scores_with_users_for_match(
    match_id: &str,
    postgres: PgPool,
) -> Result<Vec<ScoreWithUser>, AppError> {
    sqlx::query_as::<_, ScoreWithUser>(
        "SELECT s.id, s.user_id, s.match_id, s.score,
            u.name AS user_name, u.display_name AS user_display_name
        FROM user_scores s
        JOIN users u ON u.id = s.user_id
        WHERE s.match_id = $1
        ORDER BY s.user_id",
    )
    .bind(match_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match scores: {}", e)))
}

pub async fn get_scores_for_match(
    match_id: &str,
    postgres: PgPool,
) -> Result<Vec<UserScore>, AppError> {
    sqlx::query_as::<_, UserScore>(
        "SELECT id, user_id, match_id, score
        FROM user_scores
        WHERE match_id = $1
        ORDER BY user_id",
    )
    .bind(match_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match scores: {}", e)))
}

#[derive(FromRow)]
struct PlayedMatchRow {
    match_id: String,
    match_number: String,
    score: f64,
}

/// Matches a user has scored in, ordered by the numeric match number.
pub async fn get_played_matches_for_user(
    user_id: &str,
    postgres: PgPool,
) -> Result<Vec<PlayedMatch>, AppError> {
    let rows = sqlx::query_as::<_, PlayedMatchRow>(
        "SELECT s.match_id, m.match_number, s.score
        FROM user_scores s
        JOIN matches m ON m.id = s.match_id
        WHERE s.user_id = $1",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user scores: {}", e)))?;

    let mut played: Vec<PlayedMatch> = rows
        .into_iter()
        .map(|row| PlayedMatch {
            id: row.match_id,
            match_number: row.match_number.parse::<i64>().unwrap_or(0),
            points: row.score,
        })
        .collect();

    played.sort_by_key(|m| m.match_number);

    Ok(played)
}
