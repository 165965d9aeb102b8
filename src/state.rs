use sqlx::PgPool;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::models::{
    dashboard::Dashboard,
    matches::{MatchDetail, MatchSummary},
};

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub dashboard_cache: SharedDashboardCache,
    pub matches_cache: SharedMatchesCache,
    pub match_cache: SharedMatchCache,
}

/// Standings refresh at most once per TTL window unless a write invalidates
/// them first.
pub const DASHBOARD_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Single-entry cache for the computed dashboard.
#[derive(Debug)]
pub struct DashboardCache {
    entry: Option<Dashboard>,
    stored_at: Option<Instant>,
    ttl: Duration,
}

impl DashboardCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: None,
            stored_at: None,
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.stored_at {
            Some(stored_at) => stored_at.elapsed() > self.ttl,
            None => true,
        }
    }

    pub fn get(&self) -> Option<Dashboard> {
        if self.is_expired() {
            return None;
        }
        self.entry.clone()
    }

    pub fn set(&mut self, dashboard: Dashboard) {
        self.entry = Some(dashboard);
        self.stored_at = Some(Instant::now());
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
        self.stored_at = None;
    }
}

/// Match listing cache keyed by UTC date string, so entries roll over daily.
#[derive(Debug)]
pub struct MatchesCache {
    entries: HashMap<String, Vec<MatchSummary>>,
}

impl MatchesCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<MatchSummary>> {
        self.entries.get(key).cloned()
    }

    pub fn set(&mut self, key: String, matches: Vec<MatchSummary>) {
        self.entries.insert(key, matches);
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}

impl Default for MatchesCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Match detail cache keyed by match id.
#[derive(Debug)]
pub struct MatchCache {
    entries: HashMap<String, MatchDetail>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, match_id: &str) -> Option<MatchDetail> {
        self.entries.get(match_id).cloned()
    }

    pub fn set(&mut self, match_id: String, detail: MatchDetail) {
        self.entries.insert(match_id, detail);
    }

    pub fn invalidate(&mut self, match_id: &str) {
        self.entries.remove(match_id);
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedDashboardCache = Arc<Mutex<DashboardCache>>;

pub type SharedMatchesCache = Arc<Mutex<MatchesCache>>;

pub type SharedMatchCache = Arc<Mutex<MatchCache>>;
