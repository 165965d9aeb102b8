pub mod dashboard;
pub mod matches;
pub mod score;
pub mod user;

pub use dashboard::get_dashboard_handler;
pub use matches::{get_match_handler, get_match_scores_handler, get_matches_handler};
pub use score::submit_scores_handler;
pub use user::{get_user_handler, get_users_handler};
