use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::{cmp::Ordering, collections::HashMap};

use crate::{
    db::score::get::{get_all_scores_with_users, get_scores_with_users_for_match},
    errors::AppError,
    models::{
        matches::{MatchDetail, MatchSummary, MatchWithTeams},
        score::ScoreWithUser,
        team::Team,
    },
    standings::round_to_tenth,
};

#[derive(FromRow)]
struct MatchTeamsRow {
    id: String,
    match_number: String,
    date: DateTime<Utc>,
    home_team_id: String,
    home_team_name: String,
    away_team_id: String,
    away_team_name: String,
    winning_team_id: Option<String>,
}

impl From<MatchTeamsRow> for MatchWithTeams {
    fn from(row: MatchTeamsRow) -> Self {
        MatchWithTeams {
            id: row.id,
            match_number: row.match_number,
            date: row.date,
            home_team: Team {
                id: row.home_team_id,
                name: row.home_team_name,
            },
            away_team: Team {
                id: row.away_team_id,
                name: row.away_team_name,
            },
            winning_team_id: row.winning_team_id,
        }
    }
}

const MATCH_WITH_TEAMS_QUERY: &str = "SELECT m.id, m.match_number, m.date,
        m.home_team_id, home.name AS home_team_name,
        m.away_team_id, away.name AS away_team_name,
        m.winning_team_id
    FROM matches m
    JOIN teams home ON home.id = m.home_team_id
    JOIN teams away ON away.id = m.away_team_id";

pub async fn get_all_matches_with_teams(postgres: PgPool) -> Result<Vec<MatchWithTeams>, AppError> {
    let rows = sqlx::query_as::<_, MatchTeamsRow>(MATCH_WITH_TEAMS_QUERY)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch matches: {}", e)))?;

    Ok(rows.into_iter().map(MatchWithTeams::from).collect())
}

pub async fn get_match_by_id(match_id: &str, postgres: PgPool) -> Result<MatchWithTeams, AppError> {
    let query = format!("{} WHERE m.id = $1", MATCH_WITH_TEAMS_QUERY);
    let row = sqlx::query_as::<_, MatchTeamsRow>(&query)
        .bind(match_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match: {}", e)))?;

    row.map(MatchWithTeams::from)
        .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))
}

pub async fn get_match_detail(match_id: &str, postgres: PgPool) -> Result<MatchDetail, AppError> {
    let match_with_teams = get_match_by_id(match_id, postgres.clone()).await?;
    let user_scores = get_scores_with_users_for_match(match_id, postgres).await?;

    Ok(MatchDetail {
        id: match_with_teams.id,
        match_number: match_with_teams.match_number,
        date: match_with_teams.date,
        home_team: match_with_teams.home_team,
        away_team: match_with_teams.away_team,
        winning_team_id: match_with_teams.winning_team_id,
        user_scores,
    })
}

/// Listing rows for the matches page: each match with its top scorer, the
/// winning points and the gap to the runner-up, ordered by match number.
pub async fn get_matches_with_stats(postgres: PgPool) -> Result<Vec<MatchSummary>, AppError> {
    let matches = get_all_matches_with_teams(postgres.clone()).await?;
    let scores = get_all_scores_with_users(postgres).await?;

    let mut scores_by_match: HashMap<String, Vec<ScoreWithUser>> = HashMap::new();
    for score in scores {
        scores_by_match
            .entry(score.match_id.clone())
            .or_default()
            .push(score);
    }

    let mut summaries: Vec<MatchSummary> = matches
        .into_iter()
        .map(|m| {
            let mut user_scores = scores_by_match.remove(&m.id).unwrap_or_default();
            user_scores.sort_by(|a, b| {
                b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
            });

            let winner = user_scores
                .first()
                .map(|s| s.user_display_name.clone())
                .unwrap_or_else(|| "No winner".to_string());
            let points = user_scores.first().map(|s| s.score).unwrap_or(0.0);
            let second_highest = user_scores.get(1).map(|s| s.score).unwrap_or(0.0);

            MatchSummary {
                id: m.id,
                number: m.match_number,
                details: format!("{} vs {}", m.home_team.name, m.away_team.name),
                winner,
                points,
                second_diff: round_to_tenth(points - second_highest),
                user_scores,
            }
        })
        .collect();

    summaries.sort_by_key(|s| s.number.parse::<i64>().unwrap_or(0));

    Ok(summaries)
}
