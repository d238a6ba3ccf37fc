//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{self, use_session};

/// Site header. Anonymous visitors get login/register links; signed-in
/// users get their dashboard, identity label, and logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    let display_label = move || {
        session.with(|s| {
            s.identity()
                .map(|i| i.display_name.clone().unwrap_or_else(|| i.email.clone()))
                .unwrap_or_default()
        })
    };
    let is_authenticated = move || session.with(session::SessionState::is_authenticated);
    let is_premium = move || session.with(session::SessionState::is_premium);
    let loading = move || session.with(session::SessionState::loading);

    // No explicit navigation: the store resets to Anonymous and any guarded
    // route the user is on redirects itself to /login.
    let on_logout = move |_| session::logout(session);

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">
                "Digital Life Lessons"
            </A>
            <nav class="navbar__links">
                <A href="/public-lessons">"Public Lessons"</A>
                <Show when=is_authenticated>
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/pricing">"Pricing"</A>
                </Show>
            </nav>
            <div class="navbar__session">
                <Show
                    when=move || !loading()
                    fallback=|| view! { <span class="navbar__loading">"…"</span> }
                >
                    <Show
                        when=is_authenticated
                        fallback=|| {
                            view! {
                                <A href="/login" attr:class="btn">
                                    "Login"
                                </A>
                                <A href="/register" attr:class="btn btn--primary">
                                    "Register"
                                </A>
                            }
                        }
                    >
                        <span class="navbar__self">
                            {display_label}
                            <Show when=is_premium>
                                <span class="badge badge--premium">"Premium"</span>
                            </Show>
                        </span>
                        <button class="btn navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </Show>
            </div>
        </header>
    }
}
