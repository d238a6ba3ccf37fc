//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__tagline">"Small stories, lasting lessons."</p>
            <nav class="footer__links">
                <A href="/public-lessons">"Browse Lessons"</A>
                <A href="/pricing">"Pricing"</A>
            </nav>
            <p class="footer__copyright">"© 2026 Digital Life Lessons"</p>
        </footer>
    }
}
