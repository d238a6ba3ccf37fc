//! Home page: hero, featured lessons, top contributors, latest lessons.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::lesson_card::LessonCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{Contributor, Lesson};

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(Vec::<Lesson>::new());
    let contributors = RwSignal::new(Vec::<Contributor>::new());
    let latest = RwSignal::new(Vec::<Lesson>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        // Sections degrade independently; the page shows whatever loaded.
        match crate::net::api_lessons::fetch_featured_lessons().await {
            Ok(list) => featured.set(list),
            Err(err) => log::warn!("featured lessons failed to load: {err}"),
        }
        match crate::net::api_lessons::fetch_top_contributors().await {
            Ok(list) => contributors.set(list),
            Err(err) => log::warn!("top contributors failed to load: {err}"),
        }
        let query = crate::net::api_lessons::PublicLessonsQuery::default();
        match crate::net::api_lessons::fetch_public_lessons(&query).await {
            Ok(page) => latest.set(page.data),
            Err(err) => log::warn!("latest lessons failed to load: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Learn From Every Life"</h1>
                <p>
                    "Short personal-growth stories from people who lived them. "
                    "Record your own, browse the community's, keep the ones that matter."
                </p>
                <div class="hero__actions">
                    <A href="/public-lessons" attr:class="btn btn--primary">
                        "Browse Lessons"
                    </A>
                    <A href="/register" attr:class="btn">
                        "Share Yours"
                    </A>
                </div>
            </section>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show when=move || !featured.get().is_empty()>
                    <section class="home-page__section">
                        <h2>"Featured Lessons"</h2>
                        <div class="lesson-grid">
                            {move || {
                                featured
                                    .get()
                                    .into_iter()
                                    .map(|lesson| view! { <LessonCard lesson/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                </Show>

                <Show when=move || !contributors.get().is_empty()>
                    <section class="home-page__section">
                        <h2>"Top Contributors"</h2>
                        <ul class="contributor-list">
                            {move || {
                                contributors
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        let name = c.name.unwrap_or_else(|| "Anonymous".to_owned());
                                        view! {
                                            <li class="contributor-list__item">
                                                <span>{name}</span>
                                                <span class="contributor-list__count">
                                                    {c.lessons_count} " lessons"
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>

                <section class="home-page__section">
                    <h2>"Latest Lessons"</h2>
                    <Show
                        when=move || !latest.get().is_empty()
                        fallback=|| view! { <p class="empty-state">"No public lessons yet."</p> }
                    >
                        <div class="lesson-grid">
                            {move || {
                                latest
                                    .get()
                                    .into_iter()
                                    .map(|lesson| view! { <LessonCard lesson/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
