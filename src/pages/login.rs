//! Login page supporting email/password and federated sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Successful sign-in emits an identity-changed event; the session store
//! fetches the profile on its own, so this page only navigates back to the
//! location the route guard preserved in the `from` query parameter.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::guards::post_login_target;
use crate::state::toasts::ToastsState;

/// Trim and require both credential fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
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
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        let target = destination();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::bridge::sign_in_with_password(&email_value, &password_value).await {
                    Ok(_) => {
                        crate::state::toasts::success(toasts, "Logged in successfully");
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
            let _ = (email_value, password_value, target, toasts, &navigate_submit);
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
                        crate::state::toasts::success(toasts, "Logged in successfully");
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
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Continue your journey of learning from life."</p>
                <form class="auth-form" on:submit=on_submit>
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
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
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
                    "New here? " <A href="/register">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
