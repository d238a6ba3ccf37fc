//! Manage Lessons: site-wide lesson moderation (feature, review, delete).

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Lesson;
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;
use crate::util::format::short_date_opt;

#[component]
pub fn ManageLessonsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let lessons = RwSignal::new(Vec::<Lesson>::new());
    let loading = RwSignal::new(true);
    let delete_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_admin::fetch_lessons().await {
            Ok(list) => lessons.set(list),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load lessons: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let on_toggle_featured = move |id: String, next: bool| {
        let _ = (&id, next);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::set_lesson_featured(&id, next).await {
                Ok(()) => {
                    lessons.update(|list| {
                        if let Some(lesson) = list.iter_mut().find(|l| l.id == id) {
                            lesson.is_featured = next;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update lesson: {err}")),
            }
        });
    };

    let on_toggle_reviewed = move |id: String, next: bool| {
        let _ = (&id, next);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::set_lesson_reviewed(&id, next).await {
                Ok(()) => {
                    lessons.update(|list| {
                        if let Some(lesson) = list.iter_mut().find(|l| l.id == id) {
                            lesson.is_reviewed = next;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update lesson: {err}")),
            }
        });
    };

    let on_delete_confirmed = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        let _ = &id;
        delete_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::delete_lesson(&id).await {
                Ok(()) => {
                    crate::state::toasts::success(toasts, "Lesson deleted");
                    lessons.update(|list| list.retain(|l| l.id != id));
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to delete lesson: {err}")),
            }
        });
    };

    view! {
        <DashboardShell>
            <h1>"Manage Lessons"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Creator"</th>
                            <th>"Visibility"</th>
                            <th>"Access"</th>
                            <th>"Featured"</th>
                            <th>"Reviewed"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            lessons
                                .get()
                                .into_iter()
                                .map(|lesson| {
                                    let creator = lesson
                                        .creator_name
                                        .clone()
                                        .unwrap_or_else(|| "Unknown".to_owned());
                                    let feature_id = lesson.id.clone();
                                    let review_id = lesson.id.clone();
                                    let featured = lesson.is_featured;
                                    let reviewed = lesson.is_reviewed;
                                    view! {
                                        <tr>
                                            <td>{lesson.title.clone()}</td>
                                            <td>{creator}</td>
                                            <td>{lesson.visibility.as_str()}</td>
                                            <td>{lesson.access_level.as_str()}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| on_toggle_featured(
                                                        feature_id.clone(),
                                                        !featured,
                                                    )
                                                >
                                                    {if featured { "Featured" } else { "Normal" }}
                                                </button>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| on_toggle_reviewed(
                                                        review_id.clone(),
                                                        !reviewed,
                                                    )
                                                >
                                                    {if reviewed { "Reviewed" } else { "Not reviewed" }}
                                                </button>
                                            </td>
                                            <td>{short_date_opt(lesson.created_at.as_deref())}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| delete_id.set(Some(lesson.id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_id.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete this lesson?"</h2>
                        <p class="dialog__danger">
                            "This permanently removes the lesson and its reports."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| delete_id.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_delete_confirmed>
                                "Yes, delete it"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </DashboardShell>
    }
}
