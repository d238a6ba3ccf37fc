//! Pricing page with the premium upgrade entry point.
//!
//! Payment processing itself is external: the backend mints a checkout
//! session and the browser navigates to its URL.

use leptos::prelude::*;

use crate::state::session::{SessionState, use_session};
use crate::state::toasts::ToastsState;

#[component]
pub fn PricingPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let busy = RwSignal::new(false);

    let is_premium = move || session.with(SessionState::is_premium);

    let on_upgrade = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout_session().await {
                Ok(checkout) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&checkout.url);
                    }
                }
                Err(err) => {
                    crate::state::toasts::error(toasts, format!("Failed to start payment: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toasts;
    };

    view! {
        <div class="pricing-page">
            <Show
                when=move || !is_premium()
                fallback=|| {
                    view! {
                        <div class="pricing-page__premium">
                            <h2>"You are already Premium"</h2>
                            <p>"Enjoy lifetime access to premium lessons and features."</p>
                        </div>
                    }
                }
            >
                <h1>"Choose Your Plan"</h1>
                <div class="pricing-page__plans">
                    <div class="plan-card">
                        <h2>"Free Plan"</h2>
                        <p>"Get started with essential features for personal reflection."</p>
                        <ul>
                            <li>"Create unlimited free lessons"</li>
                            <li>"View all public free lessons"</li>
                            <li>"Save lessons to favorites"</li>
                            <li>"Basic dashboard insights"</li>
                        </ul>
                    </div>
                    <div class="plan-card plan-card--highlight">
                        <h2>"Premium Plan"</h2>
                        <p>"Unlock premium lessons and advanced features forever."</p>
                        <ul>
                            <li>"Everything in the Free plan"</li>
                            <li>"Create premium lessons with paid access"</li>
                            <li>"View all premium public lessons"</li>
                            <li>"Lifetime access with one-time payment"</li>
                        </ul>
                        <p class="plan-card__price">"$15 (one-time)"</p>
                        <button
                            class="btn btn--primary"
                            on:click=on_upgrade
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Redirecting..." } else { "Upgrade to Premium" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
