use super::*;

#[test]
fn password_requires_uppercase_first() {
    assert_eq!(
        validate_password("abc123"),
        Err("Password must contain at least one uppercase letter.")
    );
}

#[test]
fn password_requires_lowercase() {
    assert_eq!(
        validate_password("ABC123"),
        Err("Password must contain at least one lowercase letter.")
    );
}

#[test]
fn password_requires_length() {
    assert_eq!(validate_password("Ab1"), Err("Password must be at least 6 characters."));
}

#[test]
fn password_accepts_compliant_values() {
    assert_eq!(validate_password("Abc123"), Ok(()));
    assert_eq!(validate_password("SecurePass"), Ok(()));
}

#[test]
fn lesson_form_requires_each_field_in_order() {
    assert_eq!(validate_lesson_form("", "d", "c", "t"), Err("Title is required."));
    assert_eq!(validate_lesson_form("t", "  ", "c", "t"), Err("Description is required."));
    assert_eq!(validate_lesson_form("t", "d", "", "t"), Err("Pick a category."));
    assert_eq!(validate_lesson_form("t", "d", "c", ""), Err("Pick an emotional tone."));
    assert_eq!(validate_lesson_form("t", "d", "c", "t"), Ok(()));
}

#[test]
fn register_form_checks_identity_fields_before_password() {
    assert_eq!(validate_register_form(" ", "a@x.com", "Abc123"), Err("Name is required."));
    assert_eq!(validate_register_form("Alice", "", "Abc123"), Err("Email is required."));
    assert_eq!(
        validate_register_form("Alice", "a@x.com", "abc123"),
        Err("Password must contain at least one uppercase letter.")
    );
    assert_eq!(validate_register_form("Alice", "a@x.com", "Abc123"), Ok(()));
}
