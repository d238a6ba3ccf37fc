//! Admin profile with moderation activity counters.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::AdminProfile;
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;

#[component]
pub fn AdminProfilePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let profile = RwSignal::new(None::<AdminProfile>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_admin::fetch_profile().await {
            Ok(found) => profile.set(Some(found)),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load admin profile: {err}")),
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
            <h1>"Admin Profile"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || profile.get().is_some()
                    fallback=|| {
                        view! { <p class="empty-state">"Unable to load admin profile."</p> }
                    }
                >
                    {move || {
                        profile
                            .get()
                            .map(|found| {
                                let name = found
                                    .profile
                                    .display_name
                                    .clone()
                                    .unwrap_or_else(|| "Admin User".to_owned());
                                let moderation = found.moderation.clone();
                                view! {
                                    <div class="profile-card">
                                        <h2>
                                            {name} " "
                                            <span class="badge badge--premium">"Admin"</span>
                                        </h2>
                                        <p class="profile-card__line">{found.profile.email.clone()}</p>
                                    </div>
                                    <h2>"Moderation Activity"</h2>
                                    <div class="stat-grid">
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Lessons Moderated"</p>
                                            <p class="stat-card__value">
                                                {moderation.moderated_lessons}
                                            </p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Lessons Deleted"</p>
                                            <p class="stat-card__value">
                                                {moderation.deleted_lessons}
                                            </p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Reports Ignored"</p>
                                            <p class="stat-card__value">
                                                {moderation.ignored_reports}
                                            </p>
                                        </div>
                                        <div class="stat-card">
                                            <p class="stat-card__label">"Total Reports Reviewed"</p>
                                            <p class="stat-card__value">{moderation.total_actions}</p>
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
