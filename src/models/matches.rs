use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{score::ScoreWithUser, team::Team};

/// Match with its team references resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithTeams {
    pub id: String,
    pub match_number: String,
    pub date: DateTime<Utc>,
    pub home_team: Team,
    pub away_team: Team,
    pub winning_team_id: Option<String>,
}

/// Match detail served to the match page: the match plus everyone's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub id: String,
    pub match_number: String,
    pub date: DateTime<Utc>,
    pub home_team: Team,
    pub away_team: Team,
    pub winning_team_id: Option<String>,
    pub user_scores: Vec<ScoreWithUser>,
}

/// Listing row for the matches page: who took the match and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub number: String,
    pub details: String,
    pub winner: String,
    pub points: f64,
    pub second_diff: f64,
    pub user_scores: Vec<ScoreWithUser>,
}
