use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    http::handlers::{
        get_dashboard_handler, get_match_handler, get_match_scores_handler, get_matches_handler,
        get_user_handler, get_users_handler, submit_scores_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard_handler))
        .route("/matches", get(get_matches_handler))
        .route("/matches/{match_id}", get(get_match_handler))
        .route("/matches/{match_id}/scores", get(get_match_scores_handler))
        .route("/users", get(get_users_handler))
        .route("/users/{user_id}", get(get_user_handler))
        .route("/scores", put(submit_scores_handler))
        .with_state(state)
}
