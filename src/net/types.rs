//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON (camelCase fields, Mongo-style
//! `_id` keys). Optional and counter fields default so partially-populated
//! documents from older records still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Application role carried on the profile; the only role source this
/// client consults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Lesson audience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Lesson entitlement tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Free,
    Premium,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

/// The backend's view of the signed-in user (`GET /users/me`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub total_favorites: i64,
}

/// A life lesson as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub emotional_tone: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub access_level: AccessLevel,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub favorites_count: i64,
    #[serde(default)]
    pub reports_count: Option<i64>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_reviewed: bool,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub creator_photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of the public lesson feed (`GET /lessons/public`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LessonPage {
    #[serde(default)]
    pub data: Vec<Lesson>,
    #[serde(default)]
    pub total: i64,
}

/// A contributor ranking entry for the home page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub lessons_count: i64,
}

/// A saved favorite joined with its lesson (`GET /favorites/my`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub lesson: Lesson,
}

/// Response of `POST /lessons/{id}/like`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes_count: i64,
}

/// Response of `POST /favorites/toggle`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub favorited: bool,
    pub favorites_count: i64,
}

/// Per-user dashboard statistics (`GET /users/stats/dashboard`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub total_favorites: i64,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

/// One lesson-creation event in the dashboard activity trend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub created_at: String,
}

/// Site-wide statistics for the admin dashboard (`GET /admin/stats`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_public_lessons: i64,
    #[serde(default)]
    pub total_reported_lessons: i64,
    #[serde(default)]
    pub todays_new_lessons: i64,
}

/// A managed user row (`GET /admin/users`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub total_lessons: i64,
}

impl AdminUser {
    /// Preferred display label: display name, then legacy name, then a
    /// placeholder.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("N/A")
    }
}

/// A reported-lesson aggregate row (`GET /admin/reports`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedLesson {
    pub lesson_id: String,
    #[serde(default)]
    pub lesson_title: Option<String>,
    #[serde(default)]
    pub report_count: i64,
    #[serde(default)]
    pub last_reported_at: Option<String>,
}

/// A single report inside a report-detail response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub reason: String,
    #[serde(default)]
    pub reporter_email: Option<String>,
    #[serde(default)]
    pub reporter_user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Detail view for one reported lesson (`GET /admin/reports/{lesson_id}`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReportDetail {
    pub lesson: Lesson,
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// Moderation counters on the admin profile.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationStats {
    #[serde(default)]
    pub moderated_lessons: i64,
    #[serde(default)]
    pub deleted_lessons: i64,
    #[serde(default)]
    pub ignored_reports: i64,
    #[serde(default)]
    pub total_actions: i64,
}

/// Response of `GET /admin/profile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminProfile {
    pub profile: AppUser,
    #[serde(default)]
    pub moderation: ModerationStats,
}

/// Response of `POST /payments/create-checkout-session`: the external
/// checkout page to navigate to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}

/// Lesson categories offered by the add/update forms.
pub const CATEGORIES: [&str; 5] =
    ["Personal Growth", "Career", "Relationships", "Mindset", "Mistakes Learned"];

/// Emotional tones offered by the add/update forms.
pub const EMOTIONAL_TONES: [&str; 5] =
    ["Motivational", "Sad", "Realization", "Gratitude", "Reflective"];

/// Reasons offered by the report dialog.
pub const REPORT_REASONS: [&str; 6] = [
    "Inappropriate Content",
    "Hate Speech or Harassment",
    "Misleading or False Information",
    "Spam or Promotional Content",
    "Sensitive or Disturbing Content",
    "Other",
];
