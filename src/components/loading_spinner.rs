//! Loading placeholder used by guards and data-backed pages.

use leptos::prelude::*;

/// Centered spinner; guarded routes show this instead of a blank frame.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
