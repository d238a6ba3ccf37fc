//! Compile-time endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is deployed as static WASM, so configuration is baked in at
//! build time. `LIFE_LESSONS_API_BASE` selects the backend REST base URL;
//! the identity-provider settings point at its token endpoints.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "https://digital-life-lessons-server-beta.vercel.app/api";
const DEFAULT_IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";

/// Backend REST base URL, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("LIFE_LESSONS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Identity-provider account endpoint base URL.
pub fn identity_base() -> &'static str {
    option_env!("LIFE_LESSONS_IDENTITY_BASE").unwrap_or(DEFAULT_IDENTITY_BASE)
}

/// Identity-provider token-refresh endpoint base URL.
pub fn token_base() -> &'static str {
    option_env!("LIFE_LESSONS_TOKEN_BASE").unwrap_or(DEFAULT_TOKEN_BASE)
}

/// Public API key identifying this app to the identity provider.
pub fn identity_api_key() -> &'static str {
    option_env!("LIFE_LESSONS_IDENTITY_KEY").unwrap_or("demo-key")
}

/// Hosted page for the provider's federated (popup) sign-in flow.
pub fn federated_auth_url() -> &'static str {
    option_env!("LIFE_LESSONS_FEDERATED_URL").unwrap_or("https://auth.life-lessons.app/federated")
}

/// Join a path onto a base URL, tolerating slashes on either side.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Full backend URL for an API path like `/lessons/public`.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}
