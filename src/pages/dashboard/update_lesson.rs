//! Update-lesson form, pre-filled from the existing document.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{AccessLevel, CATEGORIES, EMOTIONAL_TONES, Visibility};
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;
use crate::util::validate::validate_lesson_form;

#[component]
pub fn UpdateLessonPage() -> impl IntoView {
    let params = use_params_map();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let tone = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let visibility = RwSignal::new("public".to_owned());
    let access_level = RwSignal::new("free".to_owned());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let lesson_id = move || params.read().get("id").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let id = lesson_id();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::fetch_lesson(&id).await {
                Ok(lesson) => {
                    title.set(lesson.title);
                    description.set(lesson.description);
                    category.set(lesson.category);
                    tone.set(lesson.emotional_tone);
                    image_url.set(lesson.image_url.unwrap_or_default());
                    visibility.set(lesson.visibility.as_str().to_owned());
                    access_level.set(lesson.access_level.as_str().to_owned());
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to load lesson: {err}")),
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

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

        let id = lesson_id();
        let payload = serde_json::json!({
            "title": title.get().trim(),
            "description": description.get().trim(),
            "category": category.get(),
            "emotionalTone": tone.get(),
            "imageUrl": image_url.get().trim(),
            "visibility": if visibility.get() == "private" {
                Visibility::Private
            } else {
                Visibility::Public
            },
            "accessLevel": if access_level.get() == "premium" {
                AccessLevel::Premium
            } else {
                AccessLevel::Free
            },
        });
        let _ = (&id, &payload);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::update_lesson(&id, payload).await {
                Ok(_) => {
                    crate::state::toasts::success(toasts, "Lesson updated");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard/my-lessons");
                    }
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update lesson: {err}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        saving.set(false);
    };

    view! {
        <DashboardShell>
            <h1>"Update Lesson"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <form class="lesson-form" on:submit=on_submit>
                    <label class="lesson-form__label">
                        "Title"
                        <input
                            class="lesson-form__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="lesson-form__label">
                        "Description"
                        <textarea
                            class="lesson-form__input lesson-form__input--area"
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
                            <option value="premium">"Premium"</option>
                        </select>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="lesson-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </DashboardShell>
    }
}
