use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::score::UserScore};

/// Create or overwrite a user's score for a match. (user_id, match_id) is
/// unique, so resubmitting a match replaces the previous value.
pub async fn upsert_score(
    user_id: &str,
    match_id: &str,
    score: f64,
    postgres: PgPool,
) -> Result<UserScore, AppError> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, UserScore>(
        "INSERT INTO user_scores (id, user_id, match_id, score)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, match_id) DO UPDATE SET score = EXCLUDED.score
        RETURNING id, user_id, match_id, score",
    )
    .bind(&id)
    .bind(user_id)
    .bind(match_id)
    .bind(score)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to upsert score: {}", e)))
}
