pub mod get;
pub mod put;

pub use get::{
    get_all_scores_with_context, get_all_scores_with_users, get_played_matches_for_user,
    get_scores_for_match, get_scores_with_users_for_match,
};
pub use put::upsert_score;
