//! Profile and payment endpoints.

use super::client::{self, RequestError};
use super::types::{AppUser, CheckoutSession, UserStats};

/// Fetch the application profile for the signed-in identity
/// (`GET /users/me`).
///
/// # Errors
///
/// Propagates [`RequestError`]; the session store absorbs failures into
/// "no profile yet".
pub async fn fetch_me() -> Result<AppUser, RequestError> {
    client::get("/users/me").await
}

/// Update the backend copy of the display name / photo URL
/// (`PATCH /users/me`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn update_me(display_name: &str, photo_url: &str) -> Result<(), RequestError> {
    let body = serde_json::json!({
        "displayName": display_name,
        "photoURL": photo_url,
    });
    client::request_no_content(client::HttpMethod::Patch, "/users/me", Some(body)).await
}

/// Per-user dashboard statistics (`GET /users/stats/dashboard`).
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn fetch_dashboard_stats() -> Result<UserStats, RequestError> {
    client::get("/users/stats/dashboard").await
}

/// Start an external checkout for the premium upgrade
/// (`POST /payments/create-checkout-session`); the caller navigates to the
/// returned URL.
///
/// # Errors
///
/// Propagates [`RequestError`].
pub async fn create_checkout_session() -> Result<CheckoutSession, RequestError> {
    client::post("/payments/create-checkout-session", serde_json::json!({})).await
}
