use super::*;

#[test]
fn maps_credential_failures() {
    assert_eq!(map_provider_code("INVALID_LOGIN_CREDENTIALS"), AuthError::InvalidCredentials);
    assert_eq!(map_provider_code("EMAIL_NOT_FOUND"), AuthError::InvalidCredentials);
    assert_eq!(map_provider_code("INVALID_PASSWORD"), AuthError::InvalidCredentials);
}

#[test]
fn maps_registration_failures() {
    assert_eq!(map_provider_code("EMAIL_EXISTS"), AuthError::EmailInUse);
    assert_eq!(
        map_provider_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        AuthError::WeakPassword("Password should be at least 6 characters".to_owned())
    );
    assert_eq!(
        map_provider_code("WEAK_PASSWORD"),
        AuthError::WeakPassword("Password is too weak.".to_owned())
    );
}

#[test]
fn unknown_codes_become_provider_errors() {
    assert_eq!(
        map_provider_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
        AuthError::Provider("TOO_MANY_ATTEMPTS_TRY_LATER".to_owned())
    );
}

#[test]
fn parses_error_body() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS"}}"#;
    assert_eq!(parse_provider_error(body), Some("EMAIL_EXISTS".to_owned()));
}

#[test]
fn parse_tolerates_malformed_bodies() {
    assert_eq!(parse_provider_error("not json"), None);
    assert_eq!(parse_provider_error(r#"{"message":"nope"}"#), None);
}

#[test]
fn display_messages_are_user_facing() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password.");
    assert_eq!(AuthError::NoSession.to_string(), "No active session.");
}
