use chrono::{TimeZone, Utc};
use dream5_be::models::{User, score::ScoreWithContext};
use dream5_be::standings::{
    SCORE_EPSILON, compute_dashboard, group_scores_by_match, match_stats,
};

fn user(id: &str, name: &str, display_name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        display_name: display_name.to_string(),
    }
}

fn league() -> Vec<User> {
    vec![
        user("1", "Bharathi Kannan", "BK"),
        user("2", "Karthik", "Assasino"),
        user("3", "Naveen", "NKutty"),
    ]
}

fn score(user_id: &str, match_id: &str, day: u32, value: f64) -> ScoreWithContext {
    ScoreWithContext {
        id: format!("{user_id}-{match_id}"),
        user_id: user_id.to_string(),
        match_id: match_id.to_string(),
        score: value,
        user_name: format!("User {user_id}"),
        user_display_name: format!("U{user_id}"),
        match_number: match_id.to_string(),
        match_date: Some(Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap()),
        home_team_id: "1".to_string(),
        home_team_name: "CSK".to_string(),
        away_team_id: "6".to_string(),
        away_team_name: "MI".to_string(),
    }
}

fn undated_score(user_id: &str, match_id: &str, value: f64) -> ScoreWithContext {
    ScoreWithContext {
        match_date: None,
        ..score(user_id, match_id, 22, value)
    }
}

#[test]
fn test_tie_for_first_gets_dense_ranks() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 100.0),
        score("2", "1", 22, 100.0),
        score("3", "1", 22, 80.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let rows = &dashboard.users;

    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].ranking, 1);
    assert_eq!(rows[0].one_up, 0.0);
    assert_eq!(rows[0].for_one, 0.0);
    assert_eq!(rows[0].matches_won, 1);
    assert_eq!(rows[0].matches_lost, 0);

    assert_eq!(rows[1].id, "2");
    assert_eq!(rows[1].ranking, 1);
    assert_eq!(rows[1].one_up, 0.0);
    assert_eq!(rows[1].for_one, 0.0);
    assert_eq!(rows[1].matches_won, 1);

    // Dense ranking: the next distinct entrant takes rank 2, not rank 3
    assert_eq!(rows[2].id, "3");
    assert_eq!(rows[2].ranking, 2);
    assert_eq!(rows[2].one_up, 20.0);
    assert_eq!(rows[2].for_one, 20.0);
    assert_eq!(rows[2].matches_won, 0);
    assert_eq!(rows[2].matches_lost, 1);
}

#[test]
fn test_all_zero_match_counts_toward_totals_but_attributes_nothing() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 0.0),
        score("2", "1", 22, 0.0),
        score("3", "1", 22, 0.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);

    assert_eq!(dashboard.total_matches, 1);
    for row in &dashboard.users {
        assert_eq!(row.total_score, 0.0);
        assert_eq!(row.matches_won, 0);
        assert_eq!(row.matches_lost, 0);
    }

    // The last-match scan still reports the match; everyone ties the
    // highest score of zero
    let last_match = dashboard.last_match.expect("last match should be present");
    assert_eq!(last_match.highest_score, 0.0);
    assert_eq!(last_match.winners_ids, vec!["1", "2", "3"]);
}

#[test]
fn test_empty_scores_ranks_users_in_input_order() {
    let users = vec![
        user("1", "Bharathi Kannan", "BK"),
        user("2", "Karthik", "Assasino"),
        user("3", "Naveen", "NKutty"),
        user("4", "Balamurali", "Bala"),
        user("5", "Hari Prasad", "HP"),
    ];

    let dashboard = compute_dashboard(&users, &[]);

    assert_eq!(dashboard.total_matches, 0);
    assert!(dashboard.last_match.is_none());
    assert_eq!(dashboard.users.len(), 5);

    for (index, row) in dashboard.users.iter().enumerate() {
        assert_eq!(row.id, users[index].id);
        assert_eq!(row.ranking, (index + 1) as u32);
        assert_eq!(row.total_score, 0.0);
        assert_eq!(row.matches_won, 0);
        assert_eq!(row.matches_lost, 0);
        assert_eq!(row.one_up, 0.0);
        assert_eq!(row.for_one, 0.0);
    }
}

#[test]
fn test_repeat_winner_accumulates_wins() {
    let users = vec![user("1", "Bharathi Kannan", "BK"), user("2", "Karthik", "Assasino")];
    let scores = vec![
        score("1", "1", 22, 90.0),
        score("2", "1", 22, 80.0),
        score("1", "2", 23, 85.0),
        score("2", "2", 23, 70.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let rows = &dashboard.users;

    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].total_score, 175.0);
    assert_eq!(rows[0].matches_won, 2);
    assert_eq!(rows[0].matches_lost, 0);
    assert_eq!(rows[0].ranking, 1);

    assert_eq!(rows[1].id, "2");
    assert_eq!(rows[1].total_score, 150.0);
    assert_eq!(rows[1].matches_won, 0);
    assert_eq!(rows[1].matches_lost, 2);
    assert_eq!(rows[1].ranking, 2);
    assert_eq!(rows[1].one_up, 25.0);
    assert_eq!(rows[1].for_one, 25.0);
}

#[test]
fn test_recomputation_is_idempotent() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 55.5),
        score("2", "1", 22, 61.2),
        score("3", "1", 22, 61.2),
        score("1", "2", 23, 70.0),
        score("2", "2", 23, 48.9),
    ];

    let first = compute_dashboard(&users, &scores);
    let second = compute_dashboard(&users, &scores);

    assert_eq!(first, second);
}

#[test]
fn test_ranks_are_dense_across_multiple_tie_groups() {
    let users = vec![
        user("1", "A", "A"),
        user("2", "B", "B"),
        user("3", "C", "C"),
        user("4", "D", "D"),
        user("5", "E", "E"),
    ];
    // Two tie groups: {100, 100}, {80, 80}, then 60
    let scores = vec![
        score("1", "1", 22, 100.0),
        score("2", "2", 23, 100.0),
        score("3", "3", 24, 80.0),
        score("4", "4", 25, 80.0),
        score("5", "5", 26, 60.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let rankings: Vec<u32> = dashboard.users.iter().map(|r| r.ranking).collect();

    assert_eq!(rankings, vec![1, 1, 2, 2, 3]);
}

#[test]
fn test_higher_totals_never_rank_below_lower_totals() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 42.5),
        score("2", "1", 22, 77.0),
        score("3", "1", 22, 61.0),
        score("1", "2", 23, 88.8),
        score("2", "2", 23, 12.3),
        score("3", "2", 23, 55.5),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let rows = &dashboard.users;

    for pair in rows.windows(2) {
        assert!(
            pair[0].total_score > pair[1].total_score
                || (pair[0].total_score == pair[1].total_score
                    && pair[0].matches_won >= pair[1].matches_won)
        );
        assert!(pair[0].ranking <= pair[1].ranking);
    }
}

#[test]
fn test_one_up_telescopes_across_distinct_ranks() {
    let users = vec![
        user("1", "A", "A"),
        user("2", "B", "B"),
        user("3", "C", "C"),
        user("4", "D", "D"),
    ];
    let scores = vec![
        score("1", "1", 22, 100.0),
        score("2", "1", 22, 90.0),
        score("3", "1", 22, 70.0),
        score("4", "1", 22, 40.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let rows = &dashboard.users;

    let mut gap = 0.0;
    for row in rows.iter() {
        gap += row.one_up;
        assert_eq!(gap, rows[0].total_score - row.total_score);
        assert_eq!(row.for_one, gap);
    }
}

#[test]
fn test_last_match_picks_latest_date_and_shares_the_win() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 100.0),
        score("2", "1", 22, 90.0),
        score("1", "2", 25, 95.0),
        score("2", "2", 25, 95.0),
        score("3", "2", 25, 80.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let last_match = dashboard.last_match.expect("last match should be present");

    assert_eq!(last_match.id, "2");
    assert_eq!(last_match.highest_score, 95.0);
    assert_eq!(last_match.winners_ids, vec!["1", "2"]);
    assert_eq!(last_match.user_scores.len(), 3);
    assert_eq!(last_match.home_team.name, "CSK");
    assert_eq!(last_match.away_team.name, "MI");
}

#[test]
fn test_undated_rows_feed_totals_but_not_the_last_match_scan() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 50.0),
        score("2", "1", 22, 40.0),
        undated_score("1", "2", 75.0),
        undated_score("2", "2", 60.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);

    assert_eq!(dashboard.total_matches, 2);

    let last_match = dashboard.last_match.expect("dated match should be found");
    assert_eq!(last_match.id, "1");

    let top = &dashboard.users[0];
    assert_eq!(top.id, "1");
    assert_eq!(top.total_score, 125.0);
    assert_eq!(top.matches_won, 2);
}

#[test]
fn test_duplicate_records_sum_into_totals() {
    let users = vec![user("1", "A", "A")];
    let scores = vec![score("1", "1", 22, 50.5), score("1", "1", 22, 50.5)];

    let dashboard = compute_dashboard(&users, &scores);

    assert_eq!(dashboard.users[0].total_score, 101.0);
    assert_eq!(dashboard.total_matches, 1);
}

#[test]
fn test_totals_round_to_one_decimal() {
    let users = vec![user("1", "A", "A"), user("2", "B", "B")];
    let scores = vec![
        score("1", "1", 22, 33.3),
        score("1", "2", 23, 33.3),
        score("1", "3", 24, 33.5),
        score("2", "1", 22, 10.05),
        score("2", "2", 23, 10.04),
    ];

    let dashboard = compute_dashboard(&users, &scores);

    assert_eq!(dashboard.users[0].total_score, 100.1);
    assert_eq!(dashboard.users[1].total_score, 20.1);
    assert_eq!(dashboard.users[1].one_up, 80.0);
}

#[test]
fn test_attributions_bounded_by_score_records() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 70.0),
        score("2", "1", 22, 70.0),
        score("3", "1", 22, 55.0),
        score("1", "2", 23, 40.0),
        score("2", "2", 23, 62.0),
        score("1", "3", 24, 0.0),
        score("2", "3", 24, 0.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);

    let total_wins: u32 = dashboard.users.iter().map(|r| r.matches_won).sum();
    let total_losses: u32 = dashboard.users.iter().map(|r| r.matches_lost).sum();

    // Every attribution is backed by at least one score record
    assert!(total_wins as usize <= scores.len());
    assert!(total_losses as usize <= scores.len());

    // And per bucket, winners and losers never exceed that match's scorers
    let buckets = group_scores_by_match(&scores);
    let stats = match_stats(&buckets);
    for bucket in &buckets {
        let bucket_stats = stats[&bucket.match_id];
        let winners = bucket
            .scores
            .iter()
            .filter(|s| (s.score - bucket_stats.highest_score).abs() < SCORE_EPSILON)
            .count();
        assert!(winners <= bucket.scores.len());
    }
}

#[test]
fn test_single_scorer_in_a_match_both_wins_and_loses_it() {
    // One recorded score is simultaneously the match maximum and minimum
    let users = vec![user("1", "A", "A")];
    let scores = vec![score("1", "1", 22, 64.5)];

    let dashboard = compute_dashboard(&users, &scores);

    assert_eq!(dashboard.users[0].matches_won, 1);
    assert_eq!(dashboard.users[0].matches_lost, 1);
}

#[test]
fn test_dashboard_serializes_camel_case() {
    let users = league();
    let scores = vec![
        score("1", "1", 22, 100.0),
        score("2", "1", 22, 90.0),
        score("3", "1", 22, 80.0),
    ];

    let dashboard = compute_dashboard(&users, &scores);
    let value = serde_json::to_value(&dashboard).expect("dashboard should serialize");

    assert!(value.get("totalMatches").is_some());
    assert!(value.get("lastMatch").is_some());

    let row = &value["users"][0];
    for key in [
        "displayName",
        "totalScore",
        "matchesWon",
        "matchesLost",
        "ranking",
        "oneUp",
        "forOne",
    ] {
        assert!(row.get(key).is_some(), "missing key {key}");
    }

    let last_match = &value["lastMatch"];
    assert!(last_match.get("winnersIds").is_some());
    assert!(last_match.get("highestScore").is_some());
    assert!(last_match.get("homeTeam").is_some());
}
