use std::time::Duration;

use chrono::{TimeZone, Utc};
use dream5_be::models::{
    dashboard::Dashboard,
    matches::{MatchDetail, MatchSummary},
    team::Team,
};
use dream5_be::state::{DashboardCache, MatchCache, MatchesCache};

fn empty_dashboard() -> Dashboard {
    Dashboard {
        users: Vec::new(),
        total_matches: 0,
        last_match: None,
    }
}

fn match_detail(id: &str) -> MatchDetail {
    MatchDetail {
        id: id.to_string(),
        match_number: id.to_string(),
        date: Utc.with_ymd_and_hms(2025, 3, 22, 0, 0, 0).unwrap(),
        home_team: Team {
            id: "4".to_string(),
            name: "KKR".to_string(),
        },
        away_team: Team {
            id: "9".to_string(),
            name: "RCB".to_string(),
        },
        winning_team_id: Some("9".to_string()),
        user_scores: Vec::new(),
    }
}

fn match_summary(id: &str) -> MatchSummary {
    MatchSummary {
        id: id.to_string(),
        number: id.to_string(),
        details: "KKR vs RCB".to_string(),
        winner: "BK".to_string(),
        points: 88.5,
        second_diff: 4.0,
        user_scores: Vec::new(),
    }
}

#[test]
fn test_dashboard_cache_starts_expired() {
    let cache = DashboardCache::new(Duration::from_secs(3600));
    assert!(cache.is_expired());
    assert!(cache.get().is_none());
}

#[test]
fn test_dashboard_cache_returns_fresh_entry() {
    let mut cache = DashboardCache::new(Duration::from_secs(3600));
    cache.set(empty_dashboard());

    assert!(!cache.is_expired());
    assert_eq!(cache.get(), Some(empty_dashboard()));
}

#[test]
fn test_dashboard_cache_drops_expired_entry() {
    let mut cache = DashboardCache::new(Duration::ZERO);
    cache.set(empty_dashboard());

    std::thread::sleep(Duration::from_millis(5));

    assert!(cache.is_expired());
    assert!(cache.get().is_none());
}

#[test]
fn test_dashboard_cache_invalidate_clears_entry() {
    let mut cache = DashboardCache::new(Duration::from_secs(3600));
    cache.set(empty_dashboard());
    cache.invalidate();

    assert!(cache.is_expired());
    assert!(cache.get().is_none());
}

#[test]
fn test_match_cache_keys_by_match_id() {
    let mut cache = MatchCache::new();
    cache.set("1".to_string(), match_detail("1"));
    cache.set("2".to_string(), match_detail("2"));

    assert_eq!(cache.get("1"), Some(match_detail("1")));
    assert_eq!(cache.get("2"), Some(match_detail("2")));
    assert!(cache.get("3").is_none());

    cache.invalidate("1");
    assert!(cache.get("1").is_none());
    assert!(cache.get("2").is_some());

    cache.invalidate_all();
    assert!(cache.get("2").is_none());
}

#[test]
fn test_matches_cache_buckets_are_independent() {
    let mut cache = MatchesCache::new();
    cache.set("matches-2025-03-22".to_string(), vec![match_summary("1")]);
    cache.set("matches-2025-03-23".to_string(), vec![match_summary("2")]);

    assert_eq!(
        cache.get("matches-2025-03-22"),
        Some(vec![match_summary("1")])
    );
    assert_eq!(
        cache.get("matches-2025-03-23"),
        Some(vec![match_summary("2")])
    );

    cache.invalidate_all();
    assert!(cache.get("matches-2025-03-22").is_none());
    assert!(cache.get("matches-2025-03-23").is_none());
}
