use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw score row, one per (user, match) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    pub score: f64,
}

/// Score row joined with the scoring user's names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWithUser {
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    pub score: f64,
    pub user_name: String,
    pub user_display_name: String,
}

/// Fully denormalized score row: the score plus its user's names and the
/// owning match's number, date and teams. This is the input record of the
/// standings pipeline.
///
/// `match_date` is optional; rows without a usable date are skipped by the
/// last-match scan but still count toward totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWithContext {
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    pub score: f64,
    pub user_name: String,
    pub user_display_name: String,
    pub match_number: String,
    pub match_date: Option<DateTime<Utc>>,
    pub home_team_id: String,
    pub home_team_name: String,
    pub away_team_id: String,
    pub away_team_name: String,
}
