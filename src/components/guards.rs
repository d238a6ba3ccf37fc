//! Route guards gating subtrees on session state.
//!
//! DESIGN
//! ======
//! Guards are pure consumers of the session signal: they never fetch. The
//! rendering decision is a plain function of session state so the full
//! matrix is unit-testable; the components wrap it with the redirect
//! effect. Admin denial renders the Forbidden view rather than silently
//! redirecting.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::forbidden::Forbidden;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::session::{SessionState, use_session};

/// Capability a guarded subtree requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Admin,
}

/// Rendering decision for a guarded subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show a placeholder, decide nothing.
    Loading,
    /// No identity; send the visitor to the login page.
    RedirectLogin,
    /// Identity present but the required role is missing.
    Forbidden,
    /// Render the guarded children.
    Render,
}

/// The guard decision for a session state and requirement.
pub fn decide(state: &SessionState, requirement: Requirement) -> GuardDecision {
    if state.loading() {
        return GuardDecision::Loading;
    }
    if !state.is_authenticated() {
        return GuardDecision::RedirectLogin;
    }
    match requirement {
        Requirement::Authenticated => GuardDecision::Render,
        Requirement::Admin if state.is_admin() => GuardDecision::Render,
        Requirement::Admin => GuardDecision::Forbidden,
    }
}

/// Login URL carrying the originally requested location, so the login page
/// can send the visitor back afterwards.
pub fn login_redirect_target(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with("/login") {
        "/login".to_owned()
    } else {
        format!("/login?from={}", urlencoding::encode(from))
    }
}

/// Where to navigate after a successful sign-in. Only same-app absolute
/// paths are honored; anything else falls back to the home page.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

fn current_full_path(location: &leptos_router::location::Location) -> String {
    let path = location.pathname.get_untracked();
    let search = location.search.get_untracked();
    if search.is_empty() { path } else { format!("{path}?{search}") }
}

/// Render children only for an authenticated session; anonymous visitors
/// are redirected to `/login` with the intended location preserved.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        if decide(&session.get(), Requirement::Authenticated) == GuardDecision::RedirectLogin {
            let target = login_redirect_target(&current_full_path(&location));
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        {move || match decide(&session.get(), Requirement::Authenticated) {
            GuardDecision::Render => children().into_any(),
            // The effect issues the redirect; keep the placeholder up.
            _ => view! { <LoadingSpinner/> }.into_any(),
        }}
    }
}

/// Render children only for an authenticated admin; signed-in non-admins
/// see the Forbidden view.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        if decide(&session.get(), Requirement::Admin) == GuardDecision::RedirectLogin {
            let target = login_redirect_target(&current_full_path(&location));
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        {move || match decide(&session.get(), Requirement::Admin) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Forbidden => view! { <Forbidden/> }.into_any(),
            GuardDecision::Loading | GuardDecision::RedirectLogin => {
                view! { <LoadingSpinner/> }.into_any()
            }
        }}
    }
}
