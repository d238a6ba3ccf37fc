use super::*;

#[test]
fn join_url_handles_slash_combinations() {
    assert_eq!(join_url("https://x/api", "/lessons"), "https://x/api/lessons");
    assert_eq!(join_url("https://x/api/", "lessons"), "https://x/api/lessons");
    assert_eq!(join_url("https://x/api/", "/lessons"), "https://x/api/lessons");
    assert_eq!(join_url("https://x/api", "lessons"), "https://x/api/lessons");
}

#[test]
fn api_url_targets_configured_base() {
    let url = api_url("/users/me");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/users/me"));
}
