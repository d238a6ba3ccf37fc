//! Reported Lessons: inspect reports per lesson, resolve or delete.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::{ReportDetail, ReportedLesson};
use crate::pages::dashboard::DashboardShell;
use crate::state::toasts::ToastsState;
use crate::util::format::short_date_opt;

#[component]
pub fn ReportedLessonsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let reported = RwSignal::new(Vec::<ReportedLesson>::new());
    let detail = RwSignal::new(None::<ReportDetail>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_admin::fetch_reports().await {
            Ok(list) => reported.set(list),
            Err(err) => crate::state::toasts::error(toasts, format!("Failed to load reported lessons: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    let on_view = move |lesson_id: String| {
        let _ = &lesson_id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::fetch_report_detail(&lesson_id).await {
                Ok(found) => detail.set(Some(found)),
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to load report details: {err}")),
            }
        });
    };

    let on_resolve = move |lesson_id: String| {
        let _ = &lesson_id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::resolve_reports(&lesson_id).await {
                Ok(()) => {
                    crate::state::toasts::success(toasts, "Reports resolved");
                    reported.update(|list| list.retain(|r| r.lesson_id != lesson_id));
                    detail.set(None);
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to resolve reports: {err}")),
            }
        });
    };

    let on_delete = move |lesson_id: String| {
        let _ = &lesson_id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_admin::delete_lesson(&lesson_id).await {
                Ok(()) => {
                    crate::state::toasts::success(toasts, "Lesson deleted");
                    reported.update(|list| list.retain(|r| r.lesson_id != lesson_id));
                    detail.set(None);
                }
                Err(err) => crate::state::toasts::error(toasts, format!("Failed to delete lesson: {err}")),
            }
        });
    };

    view! {
        <DashboardShell>
            <h1>"Reported Lessons"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !reported.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No reported lessons."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Lesson Title"</th>
                                <th>"Report Count"</th>
                                <th>"Last Reported"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                reported
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let title = item
                                            .lesson_title
                                            .clone()
                                            .unwrap_or_else(|| "Untitled".to_owned());
                                        let view_id = item.lesson_id.clone();
                                        let resolve_id = item.lesson_id.clone();
                                        let delete_lesson_id = item.lesson_id.clone();
                                        view! {
                                            <tr>
                                                <td>{title}</td>
                                                <td>{item.report_count}</td>
                                                <td>
                                                    {short_date_opt(item.last_reported_at.as_deref())}
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_view(view_id.clone())
                                                    >
                                                        "View Details"
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_resolve(resolve_id.clone())
                                                    >
                                                        "Resolve"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete(delete_lesson_id.clone())
                                                    >
                                                        "Delete Lesson"
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
            <Show when=move || detail.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| detail.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        {move || {
                            detail
                                .get()
                                .map(|found| {
                                    let reports = found
                                        .reports
                                        .iter()
                                        .map(|report| {
                                            let reporter = report
                                                .reporter_email
                                                .clone()
                                                .or_else(|| report.reporter_user_id.clone())
                                                .unwrap_or_else(|| "Unknown".to_owned());
                                            let filed =
                                                short_date_opt(report.created_at.as_deref());
                                            view! {
                                                <li class="report-list__item">
                                                    <strong>{report.reason.clone()}</strong>
                                                    " — " {reporter} " " {filed}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>();
                                    view! {
                                        <h2>{found.lesson.title.clone()}</h2>
                                        <ul class="report-list">{reports}</ul>
                                    }
                                })
                        }}
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| detail.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </DashboardShell>
    }
}
