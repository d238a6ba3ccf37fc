//! Identity-provider error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures surface to the calling form for inline messaging; they
//! never mutate session state directly. Wire-level error codes are folded
//! into a small set of variants the UI can message on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures raised by the identity bridge.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair rejected by the provider.
    #[error("Invalid email or password.")]
    InvalidCredentials,
    /// Registration attempted with an already-registered email.
    #[error("An account with this email already exists.")]
    EmailInUse,
    /// Password policy rejection, local or provider-side.
    #[error("{0}")]
    WeakPassword(String),
    /// The federated sign-in popup was dismissed before completing.
    #[error("Sign-in window was closed before completing.")]
    PopupClosed,
    /// A credential was requested while signed out.
    #[error("No active session.")]
    NoSession,
    /// Transport-level failure talking to the provider.
    #[error("Network error: {0}")]
    Network(String),
    /// Any provider error code without a dedicated variant.
    #[error("Sign-in failed ({0}).")]
    Provider(String),
}

/// Map a provider error code (e.g. `EMAIL_EXISTS`) onto an [`AuthError`].
///
/// Codes may carry a trailing explanation after ` : `, which is ignored for
/// classification.
pub fn map_provider_code(code: &str) -> AuthError {
    let base = code.split(':').next().unwrap_or(code).trim();
    match base {
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "USER_DISABLED" => {
            AuthError::InvalidCredentials
        }
        "EMAIL_EXISTS" => AuthError::EmailInUse,
        "WEAK_PASSWORD" => {
            let detail = code.split_once(':').map(|(_, d)| d.trim());
            AuthError::WeakPassword(detail.unwrap_or("Password is too weak.").to_owned())
        }
        other => AuthError::Provider(other.to_owned()),
    }
}

/// Extract the error code from a provider error body like
/// `{"error":{"message":"EMAIL_EXISTS"}}`.
pub fn parse_provider_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}
