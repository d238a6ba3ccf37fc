//! My Favorites: saved lessons with un-favorite.

use leptos::prelude::*;

use crate::components::lesson_card::LessonCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::FavoriteEntry;
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;

#[component]
pub fn MyFavoritesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let favorites = RwSignal::new(Vec::<FavoriteEntry>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_lessons::fetch_my_favorites().await {
            Ok(list) => favorites.set(list),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load favorites: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let on_remove = move |entry_id: String, lesson_id: String| {
        let _ = (&entry_id, &lesson_id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_lessons::toggle_favorite(&lesson_id).await {
                Ok(_) => {
                    crate::state::toasts::success(toasts, "Removed from favorites");
                    favorites.update(|list| list.retain(|f| f.id != entry_id));
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to remove favorite: {err}")),
            }
        });
    };

    view! {
        <DashboardShell>
            <h1>"My Favorites"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !favorites.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="empty-state">
                                "You haven't favorited any lessons yet. Browse public lessons "
                                "and save the ones that resonate with you."
                            </p>
                        }
                    }
                >
                    <div class="lesson-grid">
                        {move || {
                            favorites
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let entry_id = entry.id.clone();
                                    let lesson_id = entry.lesson.id.clone();
                                    view! {
                                        <div class="favorite-item">
                                            <LessonCard lesson=entry.lesson/>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| on_remove(
                                                    entry_id.clone(),
                                                    lesson_id.clone(),
                                                )
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </DashboardShell>
    }
}
