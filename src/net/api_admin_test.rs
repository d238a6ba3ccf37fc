use super::*;

#[test]
fn role_endpoint_formats_expected_path() {
    assert_eq!(admin_user_role_endpoint("u42"), "/admin/users/u42/role");
}

#[test]
fn lesson_endpoint_formats_expected_path() {
    assert_eq!(admin_lesson_endpoint("l7"), "/admin/lessons/l7");
}

#[test]
fn resolve_endpoint_is_keyed_by_lesson() {
    assert_eq!(report_resolve_endpoint("l7"), "/admin/reports/l7/resolve");
}

#[test]
fn role_serializes_lowercase_for_the_wire() {
    assert_eq!(serde_json::json!(Role::Admin), serde_json::json!("admin"));
    assert_eq!(serde_json::json!(Role::User), serde_json::json!("user"));
}
