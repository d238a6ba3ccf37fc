//! Authenticated request client for the backend REST boundary.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning a network error, since backend data is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outgoing request gets a freshly minted bearer header when a
//! session exists; requests without one still dispatch, because several
//! endpoints are public. A 401/403 response forces a sign-out and a
//! navigation to `/login` exactly once, and the error still propagates to
//! the caller for local messaging.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::auth::{bridge, error::AuthError};

/// Failures surfaced to pages by the request client.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Transport-level failure; the request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response from the backend.
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Whether this failure also triggered the global logout/redirect.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status, .. } if is_auth_failure_status(*status))
    }
}

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// Statuses that force the session closed: unauthorized and forbidden.
pub(crate) fn is_auth_failure_status(status: u16) -> bool {
    status == 401 || status == 403
}

/// Best-effort human message for a non-2xx response. The backend sends
/// `{"message": "..."}` (sometimes `{"error": "..."}`); anything else
/// degrades to the bare status code.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|m| m.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Decode a response body that is either the bare payload or wrapped in a
/// `{"data": ...}` envelope. The envelope is peeled at most once, and only
/// when its contents match the expected shape, so payloads carrying their
/// own `data` field (the paged lesson feed) are not mis-unwrapped.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    #[derive(serde::Deserialize)]
    struct Envelope<T> {
        data: T,
    }
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
        return Ok(envelope.data);
    }
    serde_json::from_str::<T>(body).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
thread_local! {
    /// Set once the 401/403 handler has run; the redirect reloads the app,
    /// so the flag never needs resetting.
    static UNAUTHORIZED_HANDLED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Force-close the session after an authorization failure. Idempotent:
/// concurrent failing requests trigger a single sign-out and navigation.
#[cfg(feature = "hydrate")]
async fn handle_unauthorized() {
    let first = UNAUTHORIZED_HANDLED.with(|flag| !flag.replace(true));
    if !first {
        return;
    }
    bridge::sign_out().await;
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    method: HttpMethod,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<String, RequestError> {
    use gloo_net::http::{Method, RequestBuilder};

    let url = crate::net::config::api_url(path);
    let wire_method = match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    };
    let mut builder = RequestBuilder::new(&url).method(wire_method);

    match bridge::fresh_credential().await {
        Ok(token) => builder = builder.header("Authorization", &format!("Bearer {token}")),
        // No session: the request goes out unauthenticated.
        Err(AuthError::NoSession) => {}
        Err(err) => {
            log::warn!("credential mint failed, sending unauthenticated: {err}");
        }
    }

    let request = match body {
        Some(json) => builder.json(&json).map_err(|e| RequestError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| RequestError::Network(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        if is_auth_failure_status(status) {
            handle_unauthorized().await;
        }
        return Err(RequestError::Status { status, message: status_message(status, &text) });
    }
    Ok(text)
}

/// Issue a request and decode the (possibly enveloped) JSON response.
///
/// # Errors
///
/// [`RequestError`] on transport failure, non-2xx status, or decode
/// mismatch; 401/403 additionally force a logout before propagating.
pub async fn request<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let text = dispatch(method, path, body).await?;
        decode_payload(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(RequestError::Network("not available on server".to_owned()))
    }
}

/// Issue a request and discard the response body.
///
/// # Errors
///
/// Same as [`request`].
pub async fn request_no_content(
    method: HttpMethod,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), RequestError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(method, path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(RequestError::Network("not available on server".to_owned()))
    }
}

/// `GET path` decoding the response.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, RequestError> {
    request(HttpMethod::Get, path, None).await
}

/// `POST path` with a JSON body, decoding the response.
pub async fn post<T: DeserializeOwned>(
    path: &str,
    body: serde_json::Value,
) -> Result<T, RequestError> {
    request(HttpMethod::Post, path, Some(body)).await
}

/// `PATCH path` with a JSON body, decoding the response.
pub async fn patch<T: DeserializeOwned>(
    path: &str,
    body: serde_json::Value,
) -> Result<T, RequestError> {
    request(HttpMethod::Patch, path, Some(body)).await
}

/// `DELETE path`, ignoring the response body.
pub async fn delete(path: &str) -> Result<(), RequestError> {
    request_no_content(HttpMethod::Delete, path, None).await
}
