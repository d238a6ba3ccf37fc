use super::*;
use crate::auth::bridge::Identity;
use crate::net::types::{AppUser, Role};

fn identity() -> Identity {
    Identity {
        uid: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        display_name: None,
        photo_url: None,
    }
}

fn profile(role: Role) -> AppUser {
    AppUser {
        id: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        display_name: None,
        photo_url: None,
        role,
        is_premium: false,
        total_lessons: 0,
        total_favorites: 0,
    }
}

fn initializing() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.identity_changed(None);
    state
}

fn resolving() -> SessionState {
    let mut state = SessionState::default();
    state.identity_changed(Some(identity()));
    state
}

fn authenticated(role: Role) -> SessionState {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity())).unwrap();
    state.finish_profile_fetch(epoch, Some(profile(role)));
    state
}

fn authenticated_without_profile() -> SessionState {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity())).unwrap();
    state.finish_profile_fetch(epoch, None);
    state
}

#[test]
fn loading_states_always_render_placeholder() {
    for requirement in [Requirement::Authenticated, Requirement::Admin] {
        assert_eq!(decide(&initializing(), requirement), GuardDecision::Loading);
        assert_eq!(decide(&resolving(), requirement), GuardDecision::Loading);
    }
}

#[test]
fn anonymous_visitors_are_redirected_to_login() {
    assert_eq!(decide(&anonymous(), Requirement::Authenticated), GuardDecision::RedirectLogin);
    assert_eq!(decide(&anonymous(), Requirement::Admin), GuardDecision::RedirectLogin);
}

#[test]
fn authenticated_users_render_auth_gated_content() {
    assert_eq!(decide(&authenticated(Role::User), Requirement::Authenticated), GuardDecision::Render);
    assert_eq!(
        decide(&authenticated_without_profile(), Requirement::Authenticated),
        GuardDecision::Render
    );
}

#[test]
fn admin_gate_denies_non_admin_roles() {
    assert_eq!(decide(&authenticated(Role::User), Requirement::Admin), GuardDecision::Forbidden);
    // No resolved profile means no admin role, even though authenticated.
    assert_eq!(
        decide(&authenticated_without_profile(), Requirement::Admin),
        GuardDecision::Forbidden
    );
    assert_eq!(decide(&authenticated(Role::Admin), Requirement::Admin), GuardDecision::Render);
}

#[test]
fn login_redirect_preserves_intended_location() {
    assert_eq!(login_redirect_target("/dashboard/my-lessons"), "/login?from=%2Fdashboard%2Fmy-lessons");
    assert_eq!(login_redirect_target("/lessons/l1?tab=reports"), "/login?from=%2Flessons%2Fl1%3Ftab%3Dreports");
}

#[test]
fn login_redirect_avoids_degenerate_targets() {
    assert_eq!(login_redirect_target(""), "/login");
    assert_eq!(login_redirect_target("/"), "/login");
    assert_eq!(login_redirect_target("/login"), "/login");
    assert_eq!(login_redirect_target("/login?from=%2F"), "/login");
}

#[test]
fn post_login_target_only_honors_app_paths() {
    assert_eq!(post_login_target(Some("/dashboard")), "/dashboard");
    assert_eq!(post_login_target(Some("https://evil.example")), "/");
    assert_eq!(post_login_target(Some("//evil.example")), "/");
    assert_eq!(post_login_target(None), "/");
}
