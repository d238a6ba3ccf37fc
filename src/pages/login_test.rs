use super::*;

#[test]
fn login_input_trims_and_accepts_both_fields() {
    assert_eq!(
        validate_login_input(" a@x.com ", " Abc123 "),
        Ok(("a@x.com".to_owned(), "Abc123".to_owned()))
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "Abc123"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@x.com", "   "), Err("Enter both email and password."));
}
