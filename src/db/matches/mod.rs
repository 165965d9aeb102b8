pub mod get;

pub use get::{get_all_matches_with_teams, get_match_by_id, get_match_detail, get_matches_with_stats};
