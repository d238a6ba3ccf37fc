use super::*;
use crate::net::types::{AdminStats, AppUser, LessonPage};

#[test]
fn auth_failure_statuses_are_401_and_403() {
    assert!(is_auth_failure_status(401));
    assert!(is_auth_failure_status(403));
    assert!(!is_auth_failure_status(400));
    assert!(!is_auth_failure_status(404));
    assert!(!is_auth_failure_status(500));
}

#[test]
fn request_error_reports_auth_failures() {
    let forbidden = RequestError::Status { status: 403, message: "Forbidden".to_owned() };
    let not_found = RequestError::Status { status: 404, message: "HTTP 404".to_owned() };
    assert!(forbidden.is_auth_failure());
    assert!(!not_found.is_auth_failure());
    assert!(!RequestError::Network("offline".to_owned()).is_auth_failure());
}

#[test]
fn status_message_prefers_backend_message() {
    assert_eq!(status_message(400, r#"{"message":"Title is required"}"#), "Title is required");
    assert_eq!(status_message(403, r#"{"error":"admin only"}"#), "admin only");
}

#[test]
fn status_message_degrades_to_status_code() {
    assert_eq!(status_message(502, "<html>bad gateway</html>"), "HTTP 502");
    assert_eq!(status_message(500, ""), "HTTP 500");
}

#[test]
fn decode_accepts_bare_payload() {
    let user: AppUser = decode_payload(r#"{"_id":"u1","email":"a@x.com"}"#).unwrap();
    assert_eq!(user.id, "u1");
}

#[test]
fn decode_accepts_enveloped_payload() {
    let stats: AdminStats =
        decode_payload(r#"{"data":{"totalUsers":5,"totalPublicLessons":9}}"#).unwrap();
    assert_eq!(stats.total_users, 5);
    assert_eq!(stats.total_public_lessons, 9);
}

#[test]
fn decode_does_not_double_unwrap_pages() {
    // A lesson page legitimately contains its own `data` field; the
    // envelope is only peeled when its contents match the target shape.
    let page: LessonPage =
        decode_payload(r#"{"data":[{"_id":"l1","title":"t"}],"total":1}"#).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn decode_peels_enveloped_pages_once() {
    let page: LessonPage =
        decode_payload(r#"{"data":{"data":[{"_id":"l1","title":"t"}],"total":3}}"#).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn decode_rejects_mismatched_shapes() {
    let err = decode_payload::<AdminStats>(r#"[1,2,3]"#).unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[test]
fn error_display_is_user_presentable() {
    let err = RequestError::Status { status: 403, message: "admin only".to_owned() };
    assert_eq!(err.to_string(), "Request failed (403): admin only");
    assert_eq!(
        RequestError::Network("connection refused".to_owned()).to_string(),
        "Network error: connection refused"
    );
}
