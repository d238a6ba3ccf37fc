//! Dashboard route screens.
//!
//! ARCHITECTURE
//! ============
//! Every screen renders inside [`DashboardShell`], which owns the sidebar
//! navigation. Admin links appear only for the admin role; the routes
//! themselves are still wrapped in `RequireAdmin`, so the sidebar is
//! convenience, not enforcement.

pub mod add_lesson;
pub mod admin_home;
pub mod admin_profile;
pub mod home;
pub mod manage_lessons;
pub mod manage_users;
pub mod my_favorites;
pub mod my_lessons;
pub mod profile;
pub mod reported_lessons;
pub mod update_lesson;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{SessionState, use_session};

/// Sidebar + content layout shared by all dashboard screens.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_admin = move || session.with(SessionState::is_admin);

    view! {
        <div class="dashboard-shell">
            <aside class="dashboard-shell__sidebar">
                <nav class="dashboard-nav">
                    <A href="/dashboard" exact=true>
                        "Overview"
                    </A>
                    <A href="/dashboard/add-lesson">"Add Lesson"</A>
                    <A href="/dashboard/my-lessons">"My Lessons"</A>
                    <A href="/dashboard/my-favorites">"My Favorites"</A>
                    <A href="/dashboard/profile">"Profile"</A>
                    <Show when=is_admin>
                        <div class="dashboard-nav__section">"Admin"</div>
                        <A href="/dashboard/admin" exact=true>
                            "Admin Home"
                        </A>
                        <A href="/dashboard/admin/manage-users">"Manage Users"</A>
                        <A href="/dashboard/admin/manage-lessons">"Manage Lessons"</A>
                        <A href="/dashboard/admin/reported-lessons">"Reported Lessons"</A>
                        <A href="/dashboard/admin/profile">"Admin Profile"</A>
                    </Show>
                </nav>
            </aside>
            <section class="dashboard-shell__content">{children()}</section>
        </div>
    }
}
