pub mod engine;

pub use engine::{
    MatchBucket, SCORE_EPSILON, compute_dashboard, find_last_match, group_scores_by_match,
    match_stats, rank_users, round_to_tenth, user_totals,
};
