//! Landing pages for the external checkout's success/cancel redirects.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{refetch_profile, use_session};

/// Success landing: refetches the profile so the premium flag shows up
/// without a manual reload.
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let session = use_session();
    refetch_profile(session);

    view! {
        <div class="payment-page">
            <h1>"Payment Successful"</h1>
            <p>"Your Premium access is now active."</p>
            <p>"Enjoy unlimited access to premium lessons and features."</p>
            <A href="/public-lessons" attr:class="btn btn--primary">
                "Browse Premium Lessons"
            </A>
        </div>
    }
}

/// Cancel landing: informational only; nothing was charged.
#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    view! {
        <div class="payment-page">
            <h1>"Payment Cancelled"</h1>
            <p>"No charge was made. You can upgrade any time."</p>
            <A href="/pricing" attr:class="btn">
                "Back to Pricing"
            </A>
        </div>
    }
}
