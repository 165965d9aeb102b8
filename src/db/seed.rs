use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use crate::errors::AppError;

/// (id, name)
const TEAMS: &[(&str, &str)] = &[
    ("1", "CSK"),
    ("2", "DC"),
    ("3", "GT"),
    ("4", "KKR"),
    ("5", "LSG"),
    ("6", "MI"),
    ("7", "PK"),
    ("8", "RR"),
    ("9", "RCB"),
    ("10", "SRH"),
];

/// (id, name, display_name)
const USERS: &[(&str, &str, &str)] = &[
    ("1", "Bharathi Kannan", "BK"),
    ("2", "Karthik", "Assasino"),
    ("3", "Naveen", "NKutty"),
    ("4", "Balamurali", "Bala"),
    ("5", "Hari Prasad", "HP"),
];

/// (id, match_number, date, home_team_id, away_team_id, winning_team_id)
const MATCHES: &[(&str, &str, &str, &str, &str, Option<&str>)] = &[
    ("1", "1", "2025-03-22", "4", "9", Some("9")),
    ("2", "2", "2025-03-23", "10", "8", Some("10")),
    ("3", "3", "2025-03-23", "1", "6", Some("1")),
    ("4", "4", "2025-03-24", "2", "5", Some("2")),
    ("5", "5", "2025-03-25", "3", "7", Some("7")),
    ("6", "6", "2025-03-26", "8", "4", Some("4")),
    ("7", "7", "2025-03-27", "10", "5", Some("5")),
    ("8", "8", "2025-03-28", "1", "9", Some("9")),
    ("9", "9", "2025-03-29", "3", "6", Some("3")),
    ("10", "10", "2025-03-30", "2", "10", Some("2")),
    ("11", "11", "2025-03-30", "8", "1", Some("8")),
    ("12", "12", "2025-03-31", "6", "4", None),
    ("13", "13", "2025-04-01", "5", "7", None),
    ("14", "14", "2025-04-02", "9", "3", None),
    ("15", "15", "2025-04-03", "4", "10", None),
    ("16", "16", "2025-04-04", "5", "6", None),
    ("17", "17", "2025-04-05", "1", "2", None),
    ("18", "18", "2025-04-05", "7", "8", None),
    ("19", "19", "2025-04-06", "4", "5", None),
    ("20", "20", "2025-04-06", "10", "3", None),
    ("21", "21", "2025-04-07", "6", "9", None),
    ("22", "22", "2025-04-08", "7", "1", None),
    ("23", "23", "2025-04-09", "3", "8", None),
    ("24", "24", "2025-04-10", "9", "2", None),
    ("25", "25", "2025-04-11", "1", "4", None),
    ("26", "26", "2025-04-12", "5", "3", None),
    ("27", "27", "2025-04-12", "10", "7", None),
    ("28", "28", "2025-04-13", "8", "9", None),
    ("29", "29", "2025-04-13", "2", "6", None),
    ("30", "30", "2025-04-14", "5", "1", None),
    ("31", "31", "2025-04-15", "7", "4", None),
    ("32", "32", "2025-04-16", "2", "8", None),
    ("33", "33", "2025-04-17", "6", "10", None),
    ("34", "34", "2025-04-18", "9", "7", None),
    ("35", "35", "2025-04-19", "3", "2", None),
    ("36", "36", "2025-04-19", "8", "5", None),
    ("37", "37", "2025-04-20", "7", "9", None),
    ("38", "38", "2025-04-20", "6", "1", None),
    ("39", "39", "2025-04-21", "4", "3", None),
    ("40", "40", "2025-04-22", "5", "2", None),
    ("41", "41", "2025-04-23", "10", "6", None),
    ("42", "42", "2025-04-24", "9", "8", None),
    ("43", "43", "2025-04-25", "1", "10", None),
    ("44", "44", "2025-04-26", "4", "7", None),
    ("45", "45", "2025-04-27", "6", "5", None),
    ("46", "46", "2025-04-27", "2", "9", None),
    ("47", "47", "2025-04-28", "8", "3", None),
    ("48", "48", "2025-04-29", "2", "4", None),
    ("49", "49", "2025-04-30", "1", "7", None),
    ("50", "50", "2025-05-01", "8", "6", None),
    ("51", "51", "2025-05-02", "3", "10", None),
    ("52", "52", "2025-05-03", "9", "1", None),
    ("53", "53", "2025-05-04", "4", "8", None),
    ("54", "54", "2025-05-04", "7", "5", None),
    ("55", "55", "2025-05-05", "10", "2", None),
    ("56", "56", "2025-05-06", "6", "3", None),
    ("57", "57", "2025-05-07", "4", "1", None),
    ("58", "58", "2025-05-08", "7", "2", None),
    ("59", "59", "2025-05-09", "5", "9", None),
    ("60", "60", "2025-05-10", "10", "4", None),
    ("61", "61", "2025-05-11", "7", "6", None),
    ("62", "62", "2025-05-11", "2", "3", None),
    ("63", "63", "2025-05-12", "1", "8", None),
    ("64", "64", "2025-05-13", "9", "10", None),
    ("65", "65", "2025-05-14", "3", "5", None),
    ("66", "66", "2025-05-15", "6", "2", None),
    ("67", "67", "2025-05-16", "8", "7", None),
    ("68", "68", "2025-05-17", "9", "4", None),
    ("69", "69", "2025-05-18", "3", "1", None),
    ("70", "70", "2025-05-18", "5", "10", None),
];

/// Insert the league's reference data: teams, the five participants and the
/// tournament fixtures. Scores are never seeded; they only arrive through
/// the submission endpoint.
pub async fn seed_league_data(postgres: PgPool) -> Result<(), AppError> {
    for &(id, name) in TEAMS {
        sqlx::query("INSERT INTO teams (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .execute(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to seed team {}: {}", id, e)))?;
    }

    for &(id, name, display_name) in USERS {
        sqlx::query(
            "INSERT INTO users (id, name, display_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(name)
        .bind(display_name)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to seed user {}: {}", id, e)))?;
    }

    for &(id, match_number, date, home_team_id, away_team_id, winning_team_id) in MATCHES {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::DatabaseError(format!("Invalid seed date {}: {}", date, e)))?
            .and_time(NaiveTime::MIN)
            .and_utc();

        sqlx::query(
            "INSERT INTO matches (id, match_number, date, home_team_id, away_team_id, winning_team_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(match_number)
        .bind(date)
        .bind(home_team_id)
        .bind(away_team_id)
        .bind(winning_team_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to seed match {}: {}", id, e)))?;
    }

    tracing::info!(
        "Seeded {} teams, {} users and {} matches",
        TEAMS.len(),
        USERS.len(),
        MATCHES.len()
    );

    Ok(())
}
