//! Public lesson feed with search, filters, sorting, and pagination.

use leptos::prelude::*;

use crate::components::lesson_card::LessonCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::pagination::{Pagination, total_pages};
use crate::net::types::{CATEGORIES, EMOTIONAL_TONES, Lesson};
use crate::state::toasts::ToastsState;

const PAGE_SIZE: u32 = 6;

#[component]
pub fn PublicLessonsPage() -> impl IntoView {
    let lessons = RwSignal::new(Vec::<Lesson>::new());
    let total = RwSignal::new(0i64);
    let loading = RwSignal::new(true);

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let tone = RwSignal::new(String::new());
    let sort = RwSignal::new("newest".to_owned());
    let page = RwSignal::new(1u32);
    // Bumped by the filter form so submit re-queries without page/sort edits.
    let reload = RwSignal::new(0u32);

    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        // Page, sort, and explicit reloads re-query; text filters apply on
        // submit only, so they are read untracked.
        let _ = (page.get(), sort.get(), reload.get());
        let query = crate::net::api_lessons::PublicLessonsQuery {
            page: page.get_untracked(),
            limit: PAGE_SIZE,
            search: search.get_untracked(),
            category: category.get_untracked(),
            emotional_tone: tone.get_untracked(),
            sort: sort.get_untracked(),
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::fetch_public_lessons(&query).await {
                Ok(result) => {
                    lessons.set(result.data);
                    total.set(result.total);
                }
                // Keep the last-good list; just notify.
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to load lessons: {err}")),
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let on_filter_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        reload.update(|n| *n += 1);
    };

    let pages = Signal::derive(move || total_pages(total.get(), PAGE_SIZE));
    let on_select_page = Callback::new(move |p: u32| page.set(p));

    view! {
        <div class="feed-page">
            <h1>"Public Lessons"</h1>

            <form class="feed-filters" on:submit=on_filter_submit>
                <input
                    class="feed-filters__search"
                    type="search"
                    placeholder="Search lessons..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="feed-filters__select"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="feed-filters__select"
                    prop:value=move || tone.get()
                    on:change=move |ev| tone.set(event_target_value(&ev))
                >
                    <option value="">"All tones"</option>
                    {EMOTIONAL_TONES
                        .into_iter()
                        .map(|t| view! { <option value=t>{t}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="feed-filters__select"
                    prop:value=move || sort.get()
                    on:change=move |ev| sort.set(event_target_value(&ev))
                >
                    <option value="newest">"Newest"</option>
                    <option value="most-liked">"Most liked"</option>
                </select>
                <button class="btn" type="submit">
                    "Apply"
                </button>
            </form>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !lessons.get().is_empty()
                    fallback=|| {
                        view! { <p class="empty-state">"No lessons match these filters."</p> }
                    }
                >
                    <div class="lesson-grid">
                        {move || {
                            lessons
                                .get()
                                .into_iter()
                                .map(|lesson| view! { <LessonCard lesson/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
                <Pagination current=page pages=pages on_select=on_select_page/>
            </Show>
        </div>
    }
}
