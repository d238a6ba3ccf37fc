use super::*;

fn sign_in_response() -> SignInResponse {
    serde_json::from_str(
        r#"{
            "idToken": "tok-1",
            "refreshToken": "refresh-1",
            "expiresIn": "3600",
            "localId": "uid-1",
            "email": "a@x.com",
            "displayName": "Alice"
        }"#,
    )
    .unwrap()
}

#[test]
fn token_freshness_respects_margin() {
    // Expires in two minutes: fresh.
    assert!(token_is_fresh(120_000.0, 0.0));
    // Expires within the renewal margin: stale.
    assert!(!token_is_fresh(30_000.0, 0.0));
    assert!(!token_is_fresh(0.0, 0.0));
}

#[test]
fn expiry_is_absolute_from_now() {
    assert!((expires_at_ms(1_000.0, "3600") - 3_601_000.0).abs() < f64::EPSILON);
    // Unparseable expiry degrades to already-expired.
    assert!((expires_at_ms(1_000.0, "bogus") - 1_000.0).abs() < f64::EPSILON);
}

#[test]
fn session_from_sign_in_captures_identity_and_tokens() {
    let session = session_from_sign_in(sign_in_response(), "fallback@x.com", 0.0);
    assert_eq!(session.identity.uid, "uid-1");
    assert_eq!(session.identity.email, "a@x.com");
    assert_eq!(session.identity.display_name.as_deref(), Some("Alice"));
    assert_eq!(session.identity.photo_url, None);
    assert_eq!(session.tokens.id_token, "tok-1");
    assert!((session.tokens.expires_at_ms - 3_600_000.0).abs() < f64::EPSILON);
}

#[test]
fn session_from_sign_in_falls_back_to_request_email() {
    let resp: SignInResponse = serde_json::from_str(
        r#"{"idToken":"t","refreshToken":"r","expiresIn":"3600","localId":"u"}"#,
    )
    .unwrap();
    let session = session_from_sign_in(resp, "seed@x.com", 0.0);
    assert_eq!(session.identity.email, "seed@x.com");
    assert_eq!(session.identity.display_name, None);
}

#[test]
fn callback_fragment_round_trips_a_session() {
    let fragment = "#id_token=tok&refresh_token=ref&expires_in=3600&uid=u1\
                    &email=a%40x.com&display_name=Alice%20A&photo_url=";
    let session = parse_callback_fragment(fragment, 0.0).unwrap();
    assert_eq!(session.identity.uid, "u1");
    assert_eq!(session.identity.email, "a@x.com");
    assert_eq!(session.identity.display_name.as_deref(), Some("Alice A"));
    assert_eq!(session.identity.photo_url, None);
    assert_eq!(session.tokens.refresh_token, "ref");
}

#[test]
fn callback_fragment_requires_token_and_subject() {
    assert!(parse_callback_fragment("#email=a%40x.com", 0.0).is_none());
    assert!(parse_callback_fragment("#id_token=t&refresh_token=r&uid=u", 0.0).is_none());
    assert!(parse_callback_fragment("", 0.0).is_none());
}

#[test]
fn federated_popup_url_encodes_callback() {
    let url = federated_popup_url("https://app.example");
    assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example%2Fauth%2Fcallback"));
}

#[test]
fn stored_session_serde_round_trip() {
    let session = StoredSession {
        identity: Identity {
            uid: "u1".to_owned(),
            email: "a@x.com".to_owned(),
            display_name: None,
            photo_url: Some("https://img".to_owned()),
        },
        tokens: TokenSet {
            id_token: "t".to_owned(),
            refresh_token: "r".to_owned(),
            expires_at_ms: 42.0,
        },
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: StoredSession = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
