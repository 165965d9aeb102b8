use sqlx::PgPool;

use crate::{db::seed::seed_league_data, errors::AppError};

const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS teams (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        display_name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS matches (
        id TEXT PRIMARY KEY,
        match_number TEXT NOT NULL,
        date TIMESTAMPTZ NOT NULL,
        home_team_id TEXT NOT NULL REFERENCES teams(id),
        away_team_id TEXT NOT NULL REFERENCES teams(id),
        winning_team_id TEXT REFERENCES teams(id)
    )",
    "CREATE TABLE IF NOT EXISTS user_scores (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users(id),
        match_id TEXT NOT NULL REFERENCES matches(id),
        score DOUBLE PRECISION NOT NULL,
        UNIQUE (user_id, match_id)
    )",
];

/// Create the schema if it is missing and seed the league reference data on
/// an empty database.
pub async fn initialize_database(postgres: PgPool) -> Result<(), AppError> {
    tracing::info!("Initializing database schema...");

    for statement in CREATE_TABLES {
        sqlx::query(statement)
            .execute(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to create schema: {}", e)))?;
    }

    let user_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count users: {}", e)))?;

    if user_count == 0 {
        tracing::info!("No users found in database, seeding league data");
        seed_league_data(postgres).await?;
    } else {
        tracing::info!("Found {} existing users in database", user_count);
    }

    Ok(())
}
