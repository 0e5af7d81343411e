use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(3);
    assert_eq!(limits.depth, 3);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_clamp_depth() {
    assert_eq!(SearchLimits::clamp_depth(0), MIN_DEPTH);
    assert_eq!(SearchLimits::clamp_depth(3), 3);
    assert_eq!(SearchLimits::clamp_depth(9), MAX_DEPTH);
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(tc.check_time());
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_not_started_never_expires() {
    let tc = TimeControl::new(Some(Duration::ZERO));
    assert!(!tc.check_time());
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.check_time());
    assert!(!tc.is_stopped());
    assert_eq!(tc.remaining(), None);
}

#[test]
fn test_manual_stop_is_shared_between_clones() {
    let tc = TimeControl::new(None);
    let handle = tc.clone();
    tc.start();
    assert!(!tc.is_stopped());
    handle.stop();
    assert!(tc.is_stopped());
    assert!(tc.check_time());

    // Restarting the clock keeps the request
    tc.start();
    assert!(handle.is_stopped());
    assert!(tc.check_time());
}

#[test]
fn test_stop_before_start_survives_start() {
    let limits = SearchLimits::depth(2);
    limits.time_control.clone().stop();
    limits.start();
    assert!(limits.should_stop());
    assert!(limits.time_control.check_time());
}
