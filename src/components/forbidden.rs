//! Forbidden (403) view rendered when a role gate denies access.

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown to signed-in users who lack the required role. Rendering a 403
/// instead of silently redirecting keeps authorization failures visible.
#[component]
pub fn Forbidden() -> impl IntoView {
    view! {
        <div class="forbidden-page">
            <h1>"403"</h1>
            <p>"You do not have permission to view this page."</p>
            <A href="/dashboard" attr:class="btn">
                "Back to Dashboard"
            </A>
        </div>
    }
}
