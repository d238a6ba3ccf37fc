//! Lesson, favorite, and report endpoints.

#[cfg(test)]
#[path = "api_lessons_test.rs"]
mod api_lessons_test;

use serde::{Deserialize, Serialize};

use super::client::{self, HttpMethod, RequestError};
use super::types::{
    AccessLevel, Contributor, FavoriteEntry, FavoriteToggle, Lesson, LessonPage, LikeResponse,
    Visibility,
};

/// Query parameters for the public lesson feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicLessonsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub category: String,
    pub emotional_tone: String,
    /// `newest` or `most-liked`.
    pub sort: String,
}

impl Default for PublicLessonsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 6,
            search: String::new(),
            category: String::new(),
            emotional_tone: String::new(),
            sort: "newest".to_owned(),
        }
    }
}

impl PublicLessonsQuery {
    /// Encode as a query string; empty filters are omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if !self.search.trim().is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(self.search.trim())));
        }
        if !self.category.is_empty() {
            pairs.push(format!("category={}", urlencoding::encode(&self.category)));
        }
        if !self.emotional_tone.is_empty() {
            pairs.push(format!("emotionalTone={}", urlencoding::encode(&self.emotional_tone)));
        }
        if !self.sort.is_empty() {
            pairs.push(format!("sort={}", self.sort));
        }
        pairs.join("&")
    }
}

/// Payload for creating or replacing a lesson.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub emotional_tone: String,
    pub image_url: String,
    pub visibility: Visibility,
    pub access_level: AccessLevel,
}

/// `GET /lessons/{id}` wraps its payload as `{"lesson": ...}`.
#[derive(Debug, Deserialize)]
struct LessonDoc {
    lesson: Lesson,
}

fn lesson_endpoint(id: &str) -> String {
    format!("/lessons/{id}")
}

/// One page of the public feed (`GET /lessons/public`). Works signed out.
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_public_lessons(query: &PublicLessonsQuery) -> Result<LessonPage, RequestError> {
    let path = format!("/lessons/public?{}", query.to_query_string());
    client::get(&path).await
}

/// Featured lessons for the home page (`GET /lessons/public/featured`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_featured_lessons() -> Result<Vec<Lesson>, RequestError> {
    client::get("/lessons/public/featured").await
}

/// Top contributors for the home page
/// (`GET /lessons/public/top-contributors`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_top_contributors() -> Result<Vec<Contributor>, RequestError> {
    client::get("/lessons/public/top-contributors").await
}

/// One lesson by id (`GET /lessons/{id}`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_lesson(id: &str) -> Result<Lesson, RequestError> {
    let doc: LessonDoc = client::get(&lesson_endpoint(id)).await?;
    Ok(doc.lesson)
}

/// Create a lesson (`POST /lessons`).
///
/// # Errors
///
/// Propagates [`RequestError`]; the backend rejects premium lessons from
/// non-premium creators.
pub async fn create_lesson(input: &LessonInput) -> Result<(), RequestError> {
    let body = serde_json::to_value(input).map_err(|e| RequestError::Decode(e.to_string()))?;
    client::request_no_content(HttpMethod::Post, "/lessons", Some(body)).await
}

/// Patch a lesson (`PATCH /lessons/{id}`), returning the updated document.
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn update_lesson(id: &str, patch: serde_json::Value) -> Result<Lesson, RequestError> {
    client::patch(&lesson_endpoint(id), patch).await
}

/// Delete an owned lesson (`DELETE /lessons/{id}`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn delete_lesson(id: &str) -> Result<(), RequestError> {
    client::delete(&lesson_endpoint(id)).await
}

/// All lessons owned by the signed-in user (`GET /lessons/my/all`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_my_lessons() -> Result<Vec<Lesson>, RequestError> {
    client::get("/lessons/my/all").await
}

/// Like a lesson (`POST /lessons/{id}/like`), returning the new count.
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn like_lesson(id: &str) -> Result<LikeResponse, RequestError> {
    client::post(&format!("/lessons/{id}/like"), serde_json::json!({})).await
}

/// Toggle a favorite (`POST /favorites/toggle`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn toggle_favorite(lesson_id: &str) -> Result<FavoriteToggle, RequestError> {
    client::post("/favorites/toggle", serde_json::json!({ "lessonId": lesson_id })).await
}

/// The signed-in user's favorites with their lessons (`GET /favorites/my`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_my_favorites() -> Result<Vec<FavoriteEntry>, RequestError> {
    client::get("/favorites/my").await
}

/// File a report against a lesson (`POST /lessons/{id}/report`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn report_lesson(id: &str, reason: &str) -> Result<(), RequestError> {
    let body = serde_json::json!({ "reason": reason });
    client::request_no_content(HttpMethod::Post, &format!("/lessons/{id}/report"), Some(body)).await
}
