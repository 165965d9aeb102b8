mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod standings;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use sqlx::postgres::PgPoolOptions;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::db::init::initialize_database;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::{AppState, DASHBOARD_CACHE_TTL, DashboardCache, MatchCache, MatchesCache};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let postgres = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    // Create schema and seed league data on first boot
    if let Err(e) = initialize_database(postgres.clone()).await {
        tracing::error!("Failed to initialize database: {}", e);
        panic!("Failed to initialize database: {}", e);
    }

    let state = AppState {
        postgres,
        dashboard_cache: Arc::new(Mutex::new(DashboardCache::new(DASHBOARD_CACHE_TTL))),
        matches_cache: Arc::new(Mutex::new(MatchesCache::new())),
        match_cache: Arc::new(Mutex::new(MatchCache::new())),
    };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Dream5 server running at http://127.0.0.1:{port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
