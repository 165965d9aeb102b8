use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{score::ScoreWithContext, team::Team};

/// Highest and lowest score recorded for one match. A match with no scores
/// gets the zero sentinel so win/loss attribution can skip it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchStats {
    pub highest_score: f64,
    pub lowest_score: f64,
}

/// Per-user aggregation before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTotals {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub total_score: f64,
    pub matches_won: u32,
    pub matches_lost: u32,
}

/// One row of the ranked standings table.
///
/// `one_up` is the score gap to the next distinct rank above, `for_one` the
/// gap to first place; both are zero for the leader and for users sharing a
/// rank group with the row above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub total_score: f64,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub ranking: u32,
    pub one_up: f64,
    pub for_one: f64,
}

/// The most recently played match and everyone's score in it. Users whose
/// score ties the highest within tolerance all appear in `winners_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMatch {
    pub id: String,
    pub date: DateTime<Utc>,
    pub match_number: String,
    pub home_team: Team,
    pub away_team: Team,
    pub user_scores: Vec<ScoreWithContext>,
    pub winners_ids: Vec<String>,
    pub highest_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub users: Vec<StandingsRow>,
    pub total_matches: usize,
    pub last_match: Option<LastMatch>,
}
