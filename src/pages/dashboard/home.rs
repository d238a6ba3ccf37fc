//! Dashboard overview: per-user statistics and recent activity.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::UserStats;
use crate::pages::dashboard::DashboardShell;
use crate::state::session::use_session;
use crate::util::format::short_date;

#[component]
pub fn DashboardHomePage() -> impl IntoView {
    let session = use_session();
    let stats = RwSignal::new(None::<UserStats>);
    let loading = RwSignal::new(true);

    let greeting = move || {
        session.with(|s| {
            s.identity()
                .and_then(|i| i.display_name.clone())
                .unwrap_or_else(|| "there".to_owned())
        })
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_dashboard_stats().await {
            Ok(result) => stats.set(Some(result)),
            Err(err) => log::warn!("dashboard stats failed to load: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <DashboardShell>
            <h1>"Hi, " {greeting} "!"</h1>
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
                                let plan = if stats.plan.is_empty() {
                                    "free".to_owned()
                                } else {
                                    stats.plan.clone()
                                };
                                let trend_items = stats
                                    .trend
                                    .iter()
                                    .map(|point| {
                                        let day = short_date(&point.created_at);
                                        view! {
                                            <li class="activity-list__item">
                                                "Lesson shared on " {day}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                let activity = (!trend_items.is_empty())
                                    .then(|| {
                                        view! {
                                            <h2>"Recent Activity"</h2>
                                            <ul class="activity-list">{trend_items}</ul>
                                        }
                                    });
                                view! {
                                    <div class="stat-grid">
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Total Lessons"</p>
                                            <p class="stat-card__value">{stats.total_lessons}</p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Total Favorites"</p>
                                            <p class="stat-card__value">{stats.total_favorites}</p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Plan"</p>
                                            <p class="stat-card__value">{plan}</p>
                                        </div>
                                    </div>
                                    {activity}
                                }
                            })
                    }}
                </Show>
            </Show>
            <div class="dashboard-home__actions">
                <A href="/dashboard/add-lesson" attr:class="btn btn--primary">
                    "Add a Lesson"
                </A>
            </div>
        </DashboardShell>
    }
}
