use sqlx::PgPool;

use crate::{errors::AppError, models::User};

/// All users in seed order. The standings pipeline relies on this order for
/// stable ranking when totals are tied.
pub async fn get_all_users(postgres: PgPool) -> Result<Vec<User>, AppError> {
    sqlx::query_as::<_, User>("SELECT id, name, display_name FROM users ORDER BY id")
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))
}

pub async fn get_users_ordered_by_name(postgres: PgPool) -> Result<Vec<User>, AppError> {
    sqlx::query_as::<_, User>("SELECT id, name, display_name FROM users ORDER BY name ASC")
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))
}

pub async fn get_user_by_id(user_id: &str, postgres: PgPool) -> Result<User, AppError> {
    let user =
        sqlx::query_as::<_, User>("SELECT id, name, display_name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

    user.ok_or_else(|| AppError::NotFound(format!("User not found: {}", user_id)))
}
