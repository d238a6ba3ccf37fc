//! Moderation endpoints, admin-role only on the backend.

#[cfg(test)]
#[path = "api_admin_test.rs"]
mod api_admin_test;

use super::client::{self, HttpMethod, RequestError};
use super::types::{AdminProfile, AdminStats, AdminUser, Lesson, ReportDetail, ReportedLesson, Role};

fn admin_user_role_endpoint(id: &str) -> String {
    format!("/admin/users/{id}/role")
}

fn admin_lesson_endpoint(id: &str) -> String {
    format!("/admin/lessons/{id}")
}

fn report_resolve_endpoint(lesson_id: &str) -> String {
    format!("/admin/reports/{lesson_id}/resolve")
}

/// Site-wide counters (`GET /admin/stats`).
///
/// # Errors
///
/// Propagates [`RequestError`]; a non-admin caller receives a 403, which
/// also force-closes the session.
pub async fn fetch_stats() -> Result<AdminStats, RequestError> {
    client::get("/admin/stats").await
}

/// All users for the management table (`GET /admin/users`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_users() -> Result<Vec<AdminUser>, RequestError> {
    client::get("/admin/users").await
}

/// Promote or demote a user (`PATCH /admin/users/{id}/role`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn set_user_role(id: &str, role: Role) -> Result<(), RequestError> {
    let body = serde_json::json!({ "role": role });
    client::request_no_content(HttpMethod::Patch, &admin_user_role_endpoint(id), Some(body)).await
}

/// Every lesson, regardless of visibility (`GET /admin/lessons`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_lessons() -> Result<Vec<Lesson>, RequestError> {
    client::get("/admin/lessons").await
}

/// Feature or unfeature a lesson (`PATCH /admin/lessons/{id}/feature`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn set_lesson_featured(id: &str, featured: bool) -> Result<(), RequestError> {
    let body = serde_json::json!({ "isFeatured": featured });
    let path = format!("{}/feature", admin_lesson_endpoint(id));
    client::request_no_content(HttpMethod::Patch, &path, Some(body)).await
}

/// Mark a lesson's moderation review state
/// (`PATCH /admin/lessons/{id}/review`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn set_lesson_reviewed(id: &str, reviewed: bool) -> Result<(), RequestError> {
    let body = serde_json::json!({ "isReviewed": reviewed });
    let path = format!("{}/review", admin_lesson_endpoint(id));
    client::request_no_content(HttpMethod::Patch, &path, Some(body)).await
}

/// Remove a lesson as a moderation action (`DELETE /admin/lessons/{id}`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn delete_lesson(id: &str) -> Result<(), RequestError> {
    client::delete(&admin_lesson_endpoint(id)).await
}

/// Reported-lesson aggregates (`GET /admin/reports`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_reports() -> Result<Vec<ReportedLesson>, RequestError> {
    client::get("/admin/reports").await
}

/// The individual reports against one lesson
/// (`GET /admin/reports/{lesson_id}`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_report_detail(lesson_id: &str) -> Result<ReportDetail, RequestError> {
    client::get(&format!("/admin/reports/{lesson_id}")).await
}

/// Resolve all reports against a lesson without deleting it
/// (`PATCH /admin/reports/{lesson_id}/resolve`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn resolve_reports(lesson_id: &str) -> Result<(), RequestError> {
    let body = serde_json::json!({ "action": "ignore" });
    client::request_no_content(HttpMethod::Patch, &report_resolve_endpoint(lesson_id), Some(body))
        .await
}

/// The admin's own profile with moderation counters
/// (`GET /admin/profile`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_profile() -> Result<AdminProfile, RequestError> {
    client::get("/admin/profile").await
}
