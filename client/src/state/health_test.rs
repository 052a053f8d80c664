use super::*;

#[test]
fn default_is_checking() {
    assert_eq!(BackendHealth::default(), BackendHealth::Checking);
    assert!(!BackendHealth::Checking.is_online());
}

#[test]
fn labels_match_indicator_text() {
    assert_eq!(BackendHealth::Online(String::new()).label(), "Backend: Online");
    assert_eq!(BackendHealth::Offline.label(), "Backend: Offline");
    assert_eq!(BackendHealth::Checking.label(), "Backend: Checking...");
}

#[test]
fn only_online_gets_online_class() {
    assert!(BackendHealth::Online("x".to_owned()).css_class().contains("status-online"));
    assert!(!BackendHealth::Offline.css_class().contains("status-online"));
    assert!(!BackendHealth::Checking.css_class().contains("status-online"));
}

#[test]
fn online_tooltip_carries_detail() {
    assert_eq!(BackendHealth::Online("model loaded on cpu".to_owned()).tooltip(), "model loaded on cpu");
}

#[test]
fn poll_interval_is_five_seconds() {
    assert_eq!(POLL_INTERVAL_MS, 5_000);
}
