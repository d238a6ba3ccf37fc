//! Profile page: view and update the display name / photo URL.
//!
//! Updates go to both owners of the data: the identity provider (so the
//! navbar label follows the session) and the backend profile record.

use leptos::prelude::*;

use crate::pages::dashboard::DashboardShell;
use crate::state::session::{SessionState, use_session};
use crate::state::toasts::ToastsState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let display_name = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let seeded = RwSignal::new(false);

    // Seed the form once from the session; later edits are the user's.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        session.with(|s| {
            if let Some(identity) = s.identity() {
                display_name.set(identity.display_name.clone().unwrap_or_default());
                photo_url.set(identity.photo_url.clone().unwrap_or_default());
                seeded.set(true);
            }
        });
    });

    let email = move || session.with(|s| s.identity().map(|i| i.email.clone()).unwrap_or_default());
    let plan = move || {
        if session.with(SessionState::is_premium) { "Premium" } else { "Free" }
    };
    let role = move || {
        session.with(|s| match s.role() {
            crate::net::types::Role::Admin => "admin",
            crate::net::types::Role::User => "user",
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        let name_value = display_name.get().trim().to_owned();
        let photo_value = photo_url.get().trim().to_owned();
        let _ = (&name_value, &photo_value);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let provider = crate::auth::bridge::update_profile(&name_value, &photo_value).await;
            let backend = crate::net::api::update_me(&name_value, &photo_value).await;
            match (provider, backend) {
                (Ok(()), Ok(())) => {
                    crate::state::toasts::success(toasts, "Profile updated");
                    crate::state::session::refetch_profile(session);
                }
                (Err(err), _) => crate::state::toasts::error(toasts, format!("Failed to update profile: {err}")),
                (_, Err(err)) => crate::state::toasts::error(toasts, format!("Failed to update profile: {err}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            saving.set(false);
        }
    };

    view! {
        <DashboardShell>
            <h1>"Profile"</h1>
            <div class="profile-card">
                <p class="profile-card__line">"Email: " {email}</p>
                <p class="profile-card__line">"Plan: " {plan}</p>
                <p class="profile-card__line">"Role: " {role}</p>
            </div>
            <form class="lesson-form" on:submit=on_submit>
                <label class="lesson-form__label">
                    "Display Name"
                    <input
                        class="lesson-form__input"
                        type="text"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="lesson-form__label">
                    "Photo URL"
                    <input
                        class="lesson-form__input"
                        type="text"
                        prop:value=move || photo_url.get()
                        on:input=move |ev| photo_url.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </DashboardShell>
    }
}
