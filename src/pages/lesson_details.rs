//! Lesson detail page: full story, reactions, reporting, owner controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route is authentication-gated; by the time this renders, the session
//! has settled, so the premium access gate can decide synchronously from
//! the loaded lesson plus the current entitlement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{AccessLevel, Lesson, REPORT_REASONS};
use crate::state::session::use_session;
use crate::state::toasts::ToastsState;
use crate::util::format::short_date_opt;

#[component]
pub fn LessonDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let lesson = RwSignal::new(None::<Lesson>);
    let loading = RwSignal::new(true);
    let show_report = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

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
                Ok(doc) => lesson.set(Some(doc)),
                Err(err) => {
                    crate::state::toasts::error(toasts, format!("Failed to load lesson: {err}"));
                    lesson.set(None);
                }
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    // Premium lessons route non-premium viewers to the pricing page.
    let navigate_gate = navigate;
    Effect::new(move || {
        let Some(current) = lesson.get() else {
            return;
        };
        let gated = current.access_level == AccessLevel::Premium
            && session.with(|s| !s.loading() && !s.is_premium());
        if gated {
            navigate_gate("/pricing", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let can_moderate = move || {
        session.with(|s| {
            let owner = lesson.with(|l| {
                l.as_ref()
                    .and_then(|l| l.creator_id.clone())
                    .zip(s.profile().map(|p| p.id.clone()))
                    .is_some_and(|(creator, me)| creator == me)
            });
            owner || s.is_admin()
        })
    };

    let on_like = move |_| {
        let Some(id) = lesson.with(|l| l.as_ref().map(|l| l.id.clone())) else {
            return;
        };
        let _ = id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::like_lesson(&id).await {
                Ok(resp) => {
                    lesson.update(|l| {
                        if let Some(l) = l.as_mut() {
                            l.likes_count = resp.likes_count;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to like lesson: {err}")),
            }
        });
    };

    let on_favorite = move |_| {
        let Some(id) = lesson.with(|l| l.as_ref().map(|l| l.id.clone())) else {
            return;
        };
        let _ = id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::toggle_favorite(&id).await {
                Ok(resp) => {
                    crate::state::toasts::success(
                        toasts,
                        if resp.favorited { "Saved to favorites" } else { "Removed from favorites" },
                    );
                    lesson.update(|l| {
                        if let Some(l) = l.as_mut() {
                            l.favorites_count = resp.favorites_count;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update favorite: {err}")),
            }
        });
    };

    let on_edit = move |_| {
        if let Some(id) = lesson.with(|l| l.as_ref().map(|l| l.id.clone())) {
            let _ = &id;
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(&format!("/dashboard/update-lesson/{id}"));
            }
        }
    };

    view! {
        <div class="lesson-page">
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || lesson.get().is_some()
                    fallback=|| view! { <p class="empty-state">"Lesson not found."</p> }
                >
                    {move || {
                        lesson
                            .get()
                            .map(|current| {
                                let creator = current
                                    .creator_name
                                    .clone()
                                    .unwrap_or_else(|| "Anonymous".to_owned());
                                let shared_on = short_date_opt(current.created_at.as_deref());
                                let premium = current.access_level == AccessLevel::Premium;
                                view! {
                                    <article class="lesson-detail">
                                        {current
                                            .image_url
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <img
                                                        class="lesson-detail__image"
                                                        src=url
                                                        alt=current.title.clone()
                                                    />
                                                }
                                            })}
                                        <h1>{current.title.clone()}</h1>
                                        <p class="lesson-detail__meta">
                                            {current.category.clone()} " · "
                                            {current.emotional_tone.clone()} " · "
                                            <span class="badge">
                                                {current.visibility.as_str()}
                                            </span>
                                            {premium
                                                .then(|| {
                                                    view! {
                                                        <span class="badge badge--premium">"Premium"</span>
                                                    }
                                                })}
                                        </p>
                                        <p class="lesson-detail__creator">
                                            "By " {creator} " · " {shared_on}
                                        </p>
                                        <p class="lesson-detail__story">{current.description.clone()}</p>
                                        <p class="lesson-detail__counts">
                                            {current.likes_count} " likes · "
                                            {current.favorites_count} " favorites"
                                        </p>
                                    </article>
                                }
                            })
                    }}
                    <div class="lesson-detail__actions">
                        <button class="btn" on:click=on_favorite>
                            "Save to Favorites"
                        </button>
                        <button class="btn" on:click=on_like>
                            "Like"
                        </button>
                        <button class="btn" on:click=move |_| show_report.set(true)>
                            "Report Lesson"
                        </button>
                        <Show when=can_moderate>
                            <button class="btn btn--primary" on:click=on_edit>
                                "Edit"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </Show>
            </Show>
            <Show when=move || show_report.get()>
                <ReportDialog lesson=lesson show=show_report/>
            </Show>
            <Show when=move || show_delete.get()>
                <DeleteDialog lesson=lesson show=show_delete/>
            </Show>
        </div>
    }
}

/// Modal dialog collecting a report reason.
#[component]
fn ReportDialog(lesson: RwSignal<Option<Lesson>>, show: RwSignal<bool>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let reason = RwSignal::new(REPORT_REASONS[0].to_owned());

    let submit = move |_| {
        let Some(id) = lesson.with(|l| l.as_ref().map(|l| l.id.clone())) else {
            return;
        };
        let _ = id;
        let picked = reason.get();
        let _ = (&picked, toasts);
        show.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::report_lesson(&id, &picked).await {
                Ok(()) => crate::state::toasts::success(toasts, "Lesson reported. Thank you."),
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to report lesson: {err}")),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| show.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Report Lesson"</h2>
                <label class="dialog__label">
                    "Reason"
                    <select
                        class="dialog__input"
                        prop:value=move || reason.get()
                        on:change=move |ev| reason.set(event_target_value(&ev))
                    >
                        {REPORT_REASONS
                            .into_iter()
                            .map(|r| view! { <option value=r>{r}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| show.set(false)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Submit Report"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting an owned lesson.
#[component]
fn DeleteDialog(lesson: RwSignal<Option<Lesson>>, show: RwSignal<bool>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let submit = move |_| {
        let Some(id) = lesson.with(|l| l.as_ref().map(|l| l.id.clone())) else {
            return;
        };
        let _ = id;
        show.set(false);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_lessons::delete_lesson(&id).await {
                    Ok(()) => {
                        crate::state::toasts::success(toasts, "Lesson deleted");
                        navigate("/dashboard/my-lessons", NavigateOptions::default());
                    }
                    Err(err) => crate::state::toasts::error(toasts, format!("Failed to delete lesson: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (toasts, &navigate);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| show.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete this lesson?"</h2>
                <p class="dialog__danger">"This action cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| show.set(false)>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=submit>
                        "Yes, delete it"
                    </button>
                </div>
            </div>
        </div>
    }
}
