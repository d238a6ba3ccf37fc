//! Card used by lesson listings (feed, home, favorites).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{AccessLevel, Lesson};
use crate::util::format::short_date_opt;

/// Summary card linking to the lesson detail page. Premium lessons carry a
/// badge; the gate itself lives on the detail route.
#[component]
pub fn LessonCard(lesson: Lesson) -> impl IntoView {
    let detail_href = format!("/lessons/{}", lesson.id);
    let creator = lesson.creator_name.clone().unwrap_or_else(|| "Anonymous".to_owned());
    let shared_on = short_date_opt(lesson.created_at.as_deref());
    let premium = lesson.access_level == AccessLevel::Premium;

    view! {
        <article class="lesson-card">
            {lesson
                .image_url
                .clone()
                .map(|url| view! { <img class="lesson-card__image" src=url alt=lesson.title.clone()/> })}
            <div class="lesson-card__body">
                <header class="lesson-card__header">
                    <h3 class="lesson-card__title">
                        <A href=detail_href>{lesson.title.clone()}</A>
                    </h3>
                    <Show when=move || premium>
                        <span class="badge badge--premium">"Premium"</span>
                    </Show>
                </header>
                <p class="lesson-card__meta">
                    {lesson.category.clone()} " · " {lesson.emotional_tone.clone()}
                </p>
                <p class="lesson-card__creator">"By " {creator} " " {shared_on}</p>
                <p class="lesson-card__counts">
                    {lesson.likes_count} " likes · " {lesson.favorites_count} " favorites"
                </p>
            </div>
        </article>
    }
}
