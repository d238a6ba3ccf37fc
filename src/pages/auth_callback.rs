//! Landing page for the federated sign-in popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects the popup here with credentials in the URL
//! fragment. The page hands them to the opener through `localStorage`
//! (the bridge polls for the handoff key) and closes itself.

use leptos::prelude::*;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let status = RwSignal::new("Completing sign-in...");

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::auth::bridge::{HANDOFF_STORAGE_KEY, parse_callback_fragment};

        let Some(window) = web_sys::window() else {
            return;
        };
        let hash = window.location().hash().unwrap_or_default();
        match parse_callback_fragment(&hash, js_sys::Date::now()) {
            Some(session) => {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(json) = serde_json::to_string(&session) {
                        let _ = storage.set_item(HANDOFF_STORAGE_KEY, &json);
                    }
                }
                status.set("Signed in. You can close this window.");
                let _ = window.close();
            }
            None => status.set("Sign-in failed: the callback carried no credentials."),
        }
    });

    view! {
        <div class="auth-page">
            <p class="auth-card__subtitle">{move || status.get()}</p>
        </div>
    }
}
