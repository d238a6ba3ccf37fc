//! Admin overview: site-wide statistics.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::AdminStats;
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let stats = RwSignal::new(None::<AdminStats>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_admin::fetch_stats().await {
            Ok(result) => stats.set(Some(result)),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load admin stats: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    view! {
        <DashboardShell>
            <h1>"Admin Dashboard"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || stats.get().is_some()
                    fallback=|| {
                        view! { <p class="empty-state">"Stats are unavailable right now."</p> }
                    }
                >
                    {move || {
                        stats
                            .get()
                            .map(|stats| {
                                view! {
                                    <div class="stat-grid">
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Total Users"</p>
                                            <p class="stat-card__value">{stats.total_users}</p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Total Public Lessons"</p>
                                            <p class="stat-card__value">
                                                {stats.total_public_lessons}
                                            </p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Reported Lessons"</p>
                                            <p class="stat-card__value">
                                                {stats.total_reported_lessons}
                                            </p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Today's New Lessons"</p>
                                            <p class="stat-card__value">
                                                {stats.todays_new_lessons}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </Show>
        </DashboardShell>
    }
}
