use super::*;
use crate::api::{join_url, record_url};
use crate::components::notice::{Notice, NoticeKind};
use crate::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn test_route_paths() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::Events.to_path(), "/events");
    assert_eq!(
        Route::EventDetails { event_id: "ufc-300".into() }.to_path(),
        "/events/ufc-300"
    );
    assert_eq!(Route::AdminTickets.to_path(), "/admin/tickets");
}

#[test]
fn test_route_recognition() {
    assert_eq!(
        Route::recognize("/fighters/f1"),
        Some(Route::FighterDetails { fighter_id: "f1".into() })
    );
    assert_eq!(Route::recognize("/admin"), Some(Route::AdminDashboard));
    assert_eq!(Route::not_found_route(), Some(Route::NotFound));
}

#[test]
fn test_admin_routes_are_guarded() {
    for route in [
        Route::AdminDashboard,
        Route::AdminEvents,
        Route::AdminVenues,
        Route::AdminPromoters,
        Route::AdminFighters,
        Route::AdminTickets,
        Route::AdminCodes,
        Route::AdminTitles,
    ] {
        assert!(route.is_admin(), "{:?} should require an admin", route);
    }
    for route in [Route::Home, Route::Login, Route::Events, Route::Rankings, Route::NotFound] {
        assert!(!route.is_admin(), "{:?} should be public", route);
    }
}

#[test]
fn test_join_url() {
    assert_eq!(join_url("", "/api/events"), "/api/events");
    assert_eq!(join_url("https://api.example.com", "/api/events"), "https://api.example.com/api/events");
}

#[test]
fn test_record_url_escapes_id() {
    let url = record_url("/api/fighters", "a b/c");
    assert!(url.ends_with("/api/fighters/a%20b%2Fc"), "got {}", url);
}

#[test]
fn test_config_defaults() {
    assert_eq!(Config::DEFAULT_PAGE_SIZE, 20);
    assert_eq!(Config::PAGER_RADIUS, 2);
    assert!(!Config::api_base_url().ends_with('/'));
}

#[test]
fn test_notice_constructors() {
    let ok = Notice::success("Saved venue");
    assert_eq!(ok.kind, NoticeKind::Success);
    assert_eq!(ok.duration, 5000);

    let err = Notice::error("Boom");
    assert_eq!(err.kind, NoticeKind::Error);
    assert_eq!(err.duration, 8000);
    assert_ne!(ok.id, err.id);
}
