//! Catch-all 404 view.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/" attr:class="btn">
                "Back Home"
            </A>
        </div>
    }
}
