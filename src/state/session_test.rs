use super::*;

fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_owned(),
        email: format!("{uid}@x.com"),
        display_name: None,
        photo_url: None,
    }
}

fn profile(id: &str, role: Role, premium: bool) -> AppUser {
    AppUser {
        id: id.to_owned(),
        email: format!("{id}@x.com"),
        display_name: None,
        photo_url: None,
        role,
        is_premium: premium,
        total_lessons: 0,
        total_favorites: 0,
    }
}

#[test]
fn starts_initializing() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Initializing);
    assert!(state.loading());
    assert!(!state.is_authenticated());
}

#[test]
fn absent_identity_resolves_to_anonymous() {
    let mut state = SessionState::default();
    assert_eq!(state.identity_changed(None), None);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.loading());
}

#[test]
fn present_identity_resolves_profile_then_authenticates() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    assert_eq!(state.phase(), SessionPhase::ResolvingProfile);
    assert!(state.loading());
    assert!(state.is_authenticated());

    assert!(state.finish_profile_fetch(epoch, Some(profile("a", Role::User, false))));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(!state.loading());
    assert_eq!(state.role(), Role::User);
    assert!(!state.is_premium());
}

#[test]
fn failed_profile_fetch_still_authenticates() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    assert!(state.finish_profile_fetch(epoch, None));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(state.profile().is_none());
    assert_eq!(state.role(), Role::User);
    assert!(!state.is_premium());
}

#[test]
fn stale_fetch_result_never_overwrites_newer_identity() {
    let mut state = SessionState::default();
    let epoch_a = state.identity_changed(Some(identity("a"))).unwrap();
    // User signs out and back in as someone else before A's fetch lands.
    let epoch_b = state.identity_changed(Some(identity("b"))).unwrap();

    assert!(!state.finish_profile_fetch(epoch_a, Some(profile("a", Role::Admin, true))));
    assert!(state.profile().is_none());
    assert!(state.loading());

    assert!(state.finish_profile_fetch(epoch_b, Some(profile("b", Role::User, false))));
    assert_eq!(state.profile().unwrap().id, "b");
}

#[test]
fn fetch_result_after_sign_out_is_dropped() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    state.identity_changed(None);
    assert!(!state.finish_profile_fetch(epoch, Some(profile("a", Role::User, true))));
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.profile().is_none());
}

#[test]
fn refetch_keeps_loading_false_and_profile_visible() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    state.finish_profile_fetch(epoch, Some(profile("a", Role::User, false)));

    let refetch_epoch = state.begin_profile_refetch().unwrap();
    // Guards must not flicker: still authenticated, not loading.
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(!state.loading());
    assert!(state.profile().is_some());

    assert!(state.finish_profile_fetch(refetch_epoch, Some(profile("a", Role::User, true))));
    assert!(state.is_premium());
}

#[test]
fn refetch_invalidates_older_inflight_fetch() {
    let mut state = SessionState::default();
    let first = state.identity_changed(Some(identity("a"))).unwrap();
    let second = state.begin_profile_refetch().unwrap();
    assert!(!state.finish_profile_fetch(first, Some(profile("a", Role::User, false))));
    assert!(state.finish_profile_fetch(second, Some(profile("a", Role::User, true))));
    assert!(state.is_premium());
}

#[test]
fn refetch_without_identity_is_a_no_op() {
    let mut state = SessionState::default();
    state.identity_changed(None);
    assert_eq!(state.begin_profile_refetch(), None);
}

#[test]
fn premium_requires_resolved_profile() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    state.finish_profile_fetch(epoch, Some(profile("a", Role::User, true)));
    assert!(state.is_premium());

    // A new identity clears any cached entitlement immediately.
    state.identity_changed(Some(identity("b")));
    assert!(!state.is_premium());
}

#[test]
fn admin_role_comes_only_from_profile() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    assert!(!state.is_admin());
    state.finish_profile_fetch(epoch, Some(profile("a", Role::Admin, false)));
    assert!(state.is_admin());
}

#[test]
fn sign_out_resets_to_anonymous() {
    let mut state = SessionState::default();
    let epoch = state.identity_changed(Some(identity("a"))).unwrap();
    state.finish_profile_fetch(epoch, Some(profile("a", Role::Admin, true)));

    state.identity_changed(None);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.is_authenticated());
    assert!(!state.is_premium());
    assert!(!state.is_admin());
    assert!(!state.loading());
}
