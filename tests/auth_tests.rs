// Host-side tests for the admin gate and its waiting indicator.

mod common;

use common::RecordingNavigator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::*;

#[test]
fn waiting_while_loading_without_navigation() {
    let mut gate = AuthGate::default();
    let mut nav = RecordingNavigator::default();
    for _ in 0..5 {
        assert_eq!(gate.sync(AuthState::LOADING, &mut nav), GateView::Waiting);
    }
    assert!(nav.visits.is_empty());
}

#[test]
fn unauthenticated_redirects_exactly_once() {
    let mut gate = AuthGate::default();
    let mut nav = RecordingNavigator::default();
    gate.sync(AuthState::LOADING, &mut nav);
    for _ in 0..4 {
        assert_eq!(gate.sync(AuthState::settled(false), &mut nav), GateView::Hidden);
    }
    assert_eq!(nav.visits, vec![DEFAULT_LOGIN_PATH.to_string()]);
}

#[test]
fn authenticated_renders_protected_content() {
    let mut gate = AuthGate::new("/elsewhere");
    let mut nav = RecordingNavigator::default();
    gate.sync(AuthState::LOADING, &mut nav);
    assert_eq!(gate.sync(AuthState::settled(true), &mut nav), GateView::Protected);
    assert!(nav.visits.is_empty());
}

#[test]
fn logout_after_login_redirects_to_configured_path() {
    let mut gate = AuthGate::new("/admin/sign-in");
    let mut nav = RecordingNavigator::default();
    gate.sync(AuthState::settled(true), &mut nav);
    gate.sync(AuthState::settled(false), &mut nav);
    assert_eq!(nav.visits, vec!["/admin/sign-in".to_string()]);
    assert_eq!(gate.redirect_to(), "/admin/sign-in");
}

#[test]
fn closures_work_as_navigators() {
    let mut seen = Vec::new();
    let mut gate = AuthGate::default();
    gate.sync(AuthState::settled(false), &mut |path: &str| seen.push(path.to_string()));
    assert_eq!(seen, vec!["/admin/login".to_string()]);
}

#[test]
fn progress_advances_and_stalls_at_cap() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut progress = LoadingProgress::new();
    let mut last = progress.percent();
    for _ in 0..500 {
        let now = progress.tick(&mut rng);
        assert!(now >= last);
        assert!(now - last < LOADING_MAX_STEP);
        last = now;
    }
    assert!(last >= LOADING_PROGRESS_CAP);
    assert!(last < LOADING_PROGRESS_CAP + LOADING_MAX_STEP);
    let frozen = progress.percent();
    assert_eq!(progress.tick(&mut rng), frozen);
}

#[test]
fn spinner_sizes() {
    assert_eq!(SpinnerSize::default(), SpinnerSize::Medium);
    assert_eq!(SpinnerSize::Large.class(), "w-24 h-24");
}
