//! Registration page: account creation with optional profile seed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::bridge::ProfileSeed;
use crate::components::guards::post_login_target;
use crate::state::toasts::ToastsState;
use crate::util::validate::validate_register_form;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let toasts = expect_context::<RwSignal<ToastsState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let destination = move || post_login_target(query.get().get("from").as_deref());

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_register_form(&name.get(), &email.get(), &password.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        let seed = ProfileSeed {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            photo_url: photo_url.get().trim().to_owned(),
        };
        let target = destination();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::bridge::register_with_password(&seed).await {
                    Ok(_) => {
                        crate::state::toasts::success(toasts, "Account created successfully!");
                        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seed, target, toasts, &navigate_submit);
        }
    };

    let navigate_popup = navigate.clone();
    let on_federated = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        let target = destination();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_popup.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::bridge::sign_in_with_popup().await {
                    Ok(_) => {
                        crate::state::toasts::success(toasts, "Logged in with Google");
                        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, toasts, &navigate_popup);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Account"</h1>
                <p class="auth-card__subtitle">"Start capturing your life lessons today."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Photo URL"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Optional profile photo link"
                            prop:value=move || photo_url.get()
                            on:input=move |ev| photo_url.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <span class="auth-form__hint">
                            "Must contain uppercase, lowercase, and be at least 6 characters."
                        </span>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-form__error">{move || error.get()}</p>
                </Show>
                <div class="auth-card__divider">"or"</div>
                <button class="btn" on:click=on_federated disabled=move || busy.get()>
                    "Continue with Google"
                </button>
                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
