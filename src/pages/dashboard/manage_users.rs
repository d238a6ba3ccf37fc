//! Manage Users: role promotion/demotion.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{AdminUser, Role};
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_admin::fetch_users().await {
            Ok(list) => users.set(list),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load users: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let on_role_change = move |id: String, role: Role| {
        let _ = (&id, role);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::set_user_role(&id, role).await {
                Ok(()) => {
                    crate::state::toasts::success(toasts, "User role updated");
                    users.update(|list| {
                        if let Some(user) = list.iter_mut().find(|u| u.id == id) {
                            user.role = role;
                        }
                    });
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to update role: {err}")),
            }
        });
    };

    view! {
        <DashboardShell>
            <h1>"Manage Users"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Total Lessons"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let label = user.label().to_owned();
                                    let is_admin = user.role == Role::Admin;
                                    let promote_id = user.id.clone();
                                    let demote_id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td>{label}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{if is_admin { "admin" } else { "user" }}</td>
                                            <td>{user.total_lessons}</td>
                                            <td>
                                                {if is_admin {
                                                    view! {
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| on_role_change(
                                                                demote_id.clone(),
                                                                Role::User,
                                                            )
                                                        >
                                                            "Demote to User"
                                                        </button>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| on_role_change(
                                                                promote_id.clone(),
                                                                Role::Admin,
                                                            )
                                                        >
                                                            "Make Admin"
                                                        </button>
                                                    }
                                                        .into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </DashboardShell>
    }
}
