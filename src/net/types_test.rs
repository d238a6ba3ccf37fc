use super::*;

#[test]
fn app_user_deserializes_backend_shape() {
    let user: AppUser = serde_json::from_str(
        r#"{
            "_id": "u1",
            "email": "a@x.com",
            "displayName": "Alice",
            "photoURL": "https://img/a.png",
            "role": "admin",
            "isPremium": true,
            "totalLessons": 3
        }"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_premium);
    assert_eq!(user.total_lessons, 3);
    assert_eq!(user.total_favorites, 0);
}

#[test]
fn app_user_defaults_role_and_entitlement() {
    let user: AppUser = serde_json::from_str(r#"{"_id":"u2","email":"b@x.com"}"#).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_premium);
    assert_eq!(user.display_name, None);
}

#[test]
fn lesson_defaults_cover_sparse_documents() {
    let lesson: Lesson = serde_json::from_str(r#"{"_id":"l1","title":"On patience"}"#).unwrap();
    assert_eq!(lesson.visibility, Visibility::Public);
    assert_eq!(lesson.access_level, AccessLevel::Free);
    assert_eq!(lesson.likes_count, 0);
    assert_eq!(lesson.reports_count, None);
    assert!(!lesson.is_featured);
}

#[test]
fn lesson_reads_full_documents() {
    let lesson: Lesson = serde_json::from_str(
        r#"{
            "_id": "l2",
            "title": "Quitting well",
            "description": "Leaving a job taught me more than keeping it.",
            "category": "Career",
            "emotionalTone": "Realization",
            "visibility": "private",
            "accessLevel": "premium",
            "likesCount": 7,
            "favoritesCount": 2,
            "isFeatured": true,
            "creatorName": "Alice",
            "createdAt": "2026-02-01T10:00:00.000Z"
        }"#,
    )
    .unwrap();
    assert_eq!(lesson.visibility, Visibility::Private);
    assert_eq!(lesson.access_level, AccessLevel::Premium);
    assert_eq!(lesson.likes_count, 7);
    assert!(lesson.is_featured);
    assert_eq!(lesson.creator_name.as_deref(), Some("Alice"));
}

#[test]
fn lesson_serializes_enum_fields_lowercase() {
    let lesson = Lesson {
        id: "l1".to_owned(),
        title: "t".to_owned(),
        visibility: Visibility::Private,
        access_level: AccessLevel::Premium,
        ..Lesson::default()
    };
    let json = serde_json::to_value(&lesson).unwrap();
    assert_eq!(json["visibility"], "private");
    assert_eq!(json["accessLevel"], "premium");
    assert_eq!(json["_id"], "l1");
}

#[test]
fn admin_user_label_prefers_display_name() {
    let mut user: AdminUser =
        serde_json::from_str(r#"{"_id":"u1","email":"a@x.com","name":"legacy"}"#).unwrap();
    assert_eq!(user.label(), "legacy");
    user.display_name = Some("Alice".to_owned());
    assert_eq!(user.label(), "Alice");
    user.display_name = None;
    user.name = None;
    assert_eq!(user.label(), "N/A");
}

#[test]
fn reported_lesson_row_deserializes() {
    let row: ReportedLesson = serde_json::from_str(
        r#"{"lessonId":"l1","lessonTitle":"On patience","reportCount":4,"lastReportedAt":"2026-03-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(row.lesson_id, "l1");
    assert_eq!(row.report_count, 4);
}

#[test]
fn report_detail_deserializes_nested_reports() {
    let detail: ReportDetail = serde_json::from_str(
        r#"{
            "lesson": {"_id":"l1","title":"On patience"},
            "reports": [
                {"reason":"Spam or Promotional Content","reporterEmail":"r@x.com"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(detail.reports.len(), 1);
    assert_eq!(detail.reports[0].reporter_email.as_deref(), Some("r@x.com"));
}

#[test]
fn lesson_page_defaults_when_fields_missing() {
    let page: LessonPage = serde_json::from_str("{}").unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}
