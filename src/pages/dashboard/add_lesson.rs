//! Add-lesson form.

use leptos::prelude::*;

use crate::net::api_lessons::LessonInput;
use crate::net::types::{AccessLevel, CATEGORIES, EMOTIONAL_TONES, Visibility};
use crate::pages::dashboard::DashboardShell;
use crate::state::session::{SessionState, use_session};
use crate::state::toasts::ToastsState;
use crate::util::validate::validate_lesson_form;

#[component]
pub fn AddLessonPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let tone = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let visibility = RwSignal::new("public".to_owned());
    let access_level = RwSignal::new("free".to_owned());
    let error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let is_premium = move || session.with(SessionState::is_premium);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        if let Err(message) =
            validate_lesson_form(&title.get(), &description.get(), &category.get(), &tone.get())
        {
            error.set(message.to_owned());
            return;
        }
        error.set(String::new());
        saving.set(true);

        let input = LessonInput {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            category: category.get(),
            emotional_tone: tone.get(),
            image_url: image_url.get().trim().to_owned(),
            visibility: if visibility.get() == "private" {
                Visibility::Private
            } else {
                Visibility::Public
            },
            access_level: if access_level.get() == "premium" {
                AccessLevel::Premium
            } else {
                AccessLevel::Free
            },
        };
        let _ = &input;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::create_lesson(&input).await {
                Ok(()) => {
                    crate::state::toasts::success(toasts, "Lesson added successfully");
                    // Usage counters on the profile just changed.
                    crate::state::session::refetch_profile(session);
                    title.set(String::new());
                    description.set(String::new());
                    category.set(String::new());
                    tone.set(String::new());
                    image_url.set(String::new());
                    visibility.set("public".to_owned());
                    access_level.set("free".to_owned());
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to add lesson: {err}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            saving.set(false);
        }
    };

    view! {
        <DashboardShell>
            <h1>"Add New Life Lesson"</h1>
            <p class="page-subtitle">
                "Share a story, insight, or realization that could help others."
            </p>
            <form class="lesson-form" on:submit=on_submit>
                <label class="lesson-form__label">
                    "Title"
                    <input
                        class="lesson-form__input"
                        type="text"
                        placeholder="Give your lesson a short title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="lesson-form__label">
                    "Description"
                    <textarea
                        class="lesson-form__input lesson-form__input--area"
                        placeholder="Tell the story and what it taught you"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="lesson-form__label">
                    "Category"
                    <select
                        class="lesson-form__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a category"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="lesson-form__label">
                    "Emotional Tone"
                    <select
                        class="lesson-form__input"
                        prop:value=move || tone.get()
                        on:change=move |ev| tone.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a tone"</option>
                        {EMOTIONAL_TONES
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="lesson-form__label">
                    "Image URL"
                    <input
                        class="lesson-form__input"
                        type="text"
                        placeholder="Optional cover image link"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </label>
                <label class="lesson-form__label">
                    "Visibility"
                    <select
                        class="lesson-form__input"
                        prop:value=move || visibility.get()
                        on:change=move |ev| visibility.set(event_target_value(&ev))
                    >
                        <option value="public">"Public"</option>
                        <option value="private">"Private"</option>
                    </select>
                </label>
                <label class="lesson-form__label">
                    "Access Level"
                    <select
                        class="lesson-form__input"
                        prop:value=move || access_level.get()
                        on:change=move |ev| access_level.set(event_target_value(&ev))
                    >
                        <option value="free">"Free"</option>
                        <option value="premium" disabled=move || !is_premium()>
                            "Premium (requires premium plan)"
                        </option>
                    </select>
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="lesson-form__error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Add Lesson" }}
                </button>
            </form>
        </DashboardShell>
    }
}
