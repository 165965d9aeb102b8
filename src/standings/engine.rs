use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{
    dashboard::{Dashboard, LastMatch, MatchStats, StandingsRow, UserTotals},
    score::ScoreWithContext,
    team::Team,
    user::User,
};

/// Scores carry one decimal place, so equality checks against a match's
/// extremes tolerate rounding noise below this bound.
pub const SCORE_EPSILON: f64 = 0.001;

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// All score records of one match, in the order they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBucket {
    pub match_id: String,
    pub scores: Vec<ScoreWithContext>,
}

/// Partition a flat score list into per-match buckets, keeping first-seen
/// match order and record order within each bucket.
pub fn group_scores_by_match(scores: &[ScoreWithContext]) -> Vec<MatchBucket> {
    let mut buckets: Vec<MatchBucket> = Vec::new();
    let mut index_by_match: HashMap<&str, usize> = HashMap::new();

    for score in scores {
        match index_by_match.get(score.match_id.as_str()) {
            Some(&index) => buckets[index].scores.push(score.clone()),
            None => {
                index_by_match.insert(score.match_id.as_str(), buckets.len());
                buckets.push(MatchBucket {
                    match_id: score.match_id.clone(),
                    scores: vec![score.clone()],
                });
            }
        }
    }

    buckets
}

/// Highest and lowest score per match. An empty bucket yields the zero
/// sentinel instead of failing.
pub fn match_stats(buckets: &[MatchBucket]) -> HashMap<String, MatchStats> {
    let mut stats = HashMap::new();

    for bucket in buckets {
        let entry = if bucket.scores.is_empty() {
            MatchStats {
                highest_score: 0.0,
                lowest_score: 0.0,
            }
        } else {
            MatchStats {
                highest_score: bucket
                    .scores
                    .iter()
                    .map(|s| s.score)
                    .fold(f64::NEG_INFINITY, f64::max),
                lowest_score: bucket
                    .scores
                    .iter()
                    .map(|s| s.score)
                    .fold(f64::INFINITY, f64::min),
            }
        };
        stats.insert(bucket.match_id.clone(), entry);
    }

    stats
}

/// Find the bucket with the latest match date and summarize it: everyone's
/// score, the winning score, and every user within tolerance of it (ties
/// share the win). Buckets without scores or without a usable date are
/// skipped; an empty input yields `None`.
pub fn find_last_match(buckets: &[MatchBucket]) -> Option<LastMatch> {
    let mut last: Option<LastMatch> = None;
    let mut last_date: Option<DateTime<Utc>> = None;

    for bucket in buckets {
        let Some(first) = bucket.scores.first() else {
            continue;
        };
        let Some(date) = first.match_date else {
            continue;
        };
        if let Some(current) = last_date {
            if date <= current {
                continue;
            }
        }

        let highest_score = bucket
            .scores
            .iter()
            .map(|s| s.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let winners_ids = bucket
            .scores
            .iter()
            .filter(|s| (s.score - highest_score).abs() < SCORE_EPSILON)
            .map(|s| s.user_id.clone())
            .collect();

        last = Some(LastMatch {
            id: bucket.match_id.clone(),
            date,
            match_number: first.match_number.clone(),
            home_team: Team {
                id: first.home_team_id.clone(),
                name: first.home_team_name.clone(),
            },
            away_team: Team {
                id: first.away_team_id.clone(),
                name: first.away_team_name.clone(),
            },
            user_scores: bucket.scores.clone(),
            winners_ids,
            highest_score,
        });
        last_date = Some(date);
    }

    last
}

/// Total score and win/loss counts for every known user, scoreless users
/// included. A win requires the user's score to tie the match's highest
/// within tolerance while that highest is strictly positive; a loss is the
/// same check against the lowest. A zero extreme marks a match that was
/// never actually played and attributes nothing.
pub fn user_totals(
    users: &[User],
    scores: &[ScoreWithContext],
    stats: &HashMap<String, MatchStats>,
) -> Vec<UserTotals> {
    users
        .iter()
        .map(|user| {
            let mut sum = 0.0;
            let mut matches_won = 0;
            let mut matches_lost = 0;

            for score in scores.iter().filter(|s| s.user_id == user.id) {
                sum += score.score;

                let Some(match_stats) = stats.get(&score.match_id) else {
                    continue;
                };
                if match_stats.highest_score > 0.0
                    && (score.score - match_stats.highest_score).abs() < SCORE_EPSILON
                {
                    matches_won += 1;
                }
                if match_stats.lowest_score > 0.0
                    && (score.score - match_stats.lowest_score).abs() < SCORE_EPSILON
                {
                    matches_lost += 1;
                }
            }

            UserTotals {
                id: user.id.clone(),
                name: user.name.clone(),
                display_name: user.display_name.clone(),
                total_score: round_to_tenth(sum),
                matches_won,
                matches_lost,
            }
        })
        .collect()
}

/// Sort descending by total score, matches won breaking ties, then assign
/// dense ranks: rows equal on both keys share a rank and the next distinct
/// row takes the following rank. `one_up` is the gap to the previous
/// distinct group, `for_one` the gap to the top row.
pub fn rank_users(mut totals: Vec<UserTotals>) -> Vec<StandingsRow> {
    totals.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.matches_won.cmp(&a.matches_won))
    });

    let mut ranked: Vec<StandingsRow> = Vec::with_capacity(totals.len());
    let mut distinct_groups = 0u32;

    for (index, user) in totals.iter().enumerate() {
        let tied_with_previous = index > 0 && {
            let previous = &totals[index - 1];
            user.total_score == previous.total_score && user.matches_won == previous.matches_won
        };

        if !tied_with_previous {
            distinct_groups += 1;
        }

        let one_up = if index > 0 && !tied_with_previous {
            round_to_tenth(totals[index - 1].total_score - user.total_score)
        } else {
            0.0
        };
        let for_one = if index > 0 {
            round_to_tenth(totals[0].total_score - user.total_score)
        } else {
            0.0
        };

        ranked.push(StandingsRow {
            id: user.id.clone(),
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            total_score: user.total_score,
            matches_won: user.matches_won,
            matches_lost: user.matches_lost,
            ranking: distinct_groups,
            one_up,
            for_one,
        });
    }

    ranked
}

/// Run the whole pipeline: group, per-match stats, last-match scan, per-user
/// totals, ranking. Pure and idempotent; an empty score list ranks every
/// known user 1..n in input order with zero totals and no last match.
pub fn compute_dashboard(users: &[User], scores: &[ScoreWithContext]) -> Dashboard {
    if scores.is_empty() {
        return Dashboard {
            users: users
                .iter()
                .enumerate()
                .map(|(index, user)| StandingsRow {
                    id: user.id.clone(),
                    name: user.name.clone(),
                    display_name: user.display_name.clone(),
                    total_score: 0.0,
                    matches_won: 0,
                    matches_lost: 0,
                    ranking: (index + 1) as u32,
                    one_up: 0.0,
                    for_one: 0.0,
                })
                .collect(),
            total_matches: 0,
            last_match: None,
        };
    }

    let buckets = group_scores_by_match(scores);
    let stats = match_stats(&buckets);
    let last_match = find_last_match(&buckets);
    let totals = user_totals(users, scores, &stats);

    Dashboard {
        users: rank_users(totals),
        total_matches: buckets.len(),
        last_match,
    }
}
