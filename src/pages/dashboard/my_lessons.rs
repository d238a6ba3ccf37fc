//! My Lessons: the signed-in user's lessons with inline moderation of
//! their own visibility and access level.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{AccessLevel, Lesson, Visibility};
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;
use crate::util::format::short_date_opt;

#[component]
pub fn MyLessonsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let lessons = RwSignal::new(Vec::<Lesson>::new());
    let loading = RwSignal::new(true);
    let delete_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_lessons::fetch_my_lessons().await {
            Ok(list) => lessons.set(list),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load your lessons: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let apply_patch = move |id: String, patch: serde_json::Value| {
        let _ = (&id, &patch);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::update_lesson(&id, patch).await {
                Ok(updated) => {
                    lessons.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|l| l.id == updated.id) {
                            *slot = updated;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update lesson: {err}")),
            }
        });
    };

    let on_toggle_visibility = move |lesson: &Lesson| {
        let next = match lesson.visibility {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        };
        apply_patch(lesson.id.clone(), serde_json::json!({ "visibility": next }));
    };

    let on_toggle_access = move |lesson: &Lesson| {
        let next = match lesson.access_level {
            AccessLevel::Free => AccessLevel::Premium,
            AccessLevel::Premium => AccessLevel::Free,
        };
        apply_patch(lesson.id.clone(), serde_json::json!({ "accessLevel": next }));
    };

    let on_delete_confirmed = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        let _ = &id;
        delete_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::delete_lesson(&id).await {
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
            <h1>"My Lessons"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !lessons.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="empty-state">
                                "You have not shared any lessons yet. "
                                <A href="/dashboard/add-lesson">"Add your first one."</A>
                            </p>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Visibility"</th>
                                <th>"Access"</th>
                                <th>"Likes"</th>
                                <th>"Shared"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                lessons
                                    .get()
                                    .into_iter()
                                    .map(|lesson| {
                                        let row = lesson.clone();
                                        let toggle_vis = lesson.clone();
                                        let toggle_access = lesson.clone();
                                        let edit_href =
                                            format!("/dashboard/update-lesson/{}", lesson.id);
                                        let detail_href = format!("/lessons/{}", lesson.id);
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=detail_href>{row.title.clone()}</A>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_toggle_visibility(&toggle_vis)
                                                    >
                                                        {row.visibility.as_str()}
                                                    </button>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_toggle_access(&toggle_access)
                                                    >
                                                        {row.access_level.as_str()}
                                                    </button>
                                                </td>
                                                <td>{row.likes_count}</td>
                                                <td>{short_date_opt(row.created_at.as_deref())}</td>
                                                <td class="data-table__actions">
                                                    <A href=edit_href attr:class="btn btn--small">
                                                        "Edit"
                                                    </A>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete_id.set(Some(row.id.clone()))
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
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_id.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete this lesson?"</h2>
                        <p class="dialog__danger">"This action cannot be undone."</p>
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
