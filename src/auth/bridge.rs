//! Identity bridge — the sole integration point with the external identity
//! provider.
//!
//! Client-side (hydrate): real HTTP calls to the provider's REST endpoints
//! via `gloo-net`, with the active session persisted to `localStorage`.
//! Server-side (SSR): stubs reporting "signed out" so server rendering stays
//! deterministic.
//!
//! ARCHITECTURE
//! ============
//! The bridge is a process-wide singleton mirroring the provider SDK it
//! replaces. Session consumers register through [`subscribe`]; the callback
//! fires once immediately with the current identity and again on every
//! change (sign-in, sign-out, profile update). Bearer tokens never leave the
//! bridge except through [`fresh_credential`], which renews them on demand.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
#[cfg(feature = "hydrate")]
use crate::auth::error::{map_provider_code, parse_provider_error};
use crate::util::validate::validate_password;

#[cfg(feature = "hydrate")]
const SESSION_STORAGE_KEY: &str = "life_lessons_session";
/// Key the popup callback page writes its token handoff to.
pub const HANDOFF_STORAGE_KEY: &str = "life_lessons_auth_handoff";

/// Renew a token this many milliseconds before its recorded expiry.
const EXPIRY_MARGIN_MS: f64 = 60_000.0;

/// Read-only snapshot of the signed-in provider identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned stable subject id.
    pub uid: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name, if the account has one.
    pub display_name: Option<String>,
    /// Avatar image URL, if the account has one.
    pub photo_url: Option<String>,
}

/// Input to [`register_with_password`].
#[derive(Clone, Debug, Default)]
pub struct ProfileSeed {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
}

/// Bearer-token material for one identity. Internal to the bridge; only the
/// popup-callback handoff and `localStorage` persistence serialize it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub id_token: String,
    pub refresh_token: String,
    /// Absolute expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: f64,
}

/// Persisted session: identity snapshot plus its token material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub identity: Identity,
    pub tokens: TokenSet,
}

/// Handle returned by [`subscribe`]; dropping it does not unsubscribe (the
/// app holds its single subscription for the whole process lifetime).
#[derive(Debug)]
pub struct Subscription(#[allow(dead_code)] u64);

/// Whether a cached token is still usable at `now_ms` with renewal margin.
pub fn token_is_fresh(expires_at_ms: f64, now_ms: f64) -> bool {
    now_ms + EXPIRY_MARGIN_MS < expires_at_ms
}

/// Absolute expiry for a provider `expiresIn` value in seconds.
pub fn expires_at_ms(now_ms: f64, expires_in_secs: &str) -> f64 {
    let secs: f64 = expires_in_secs.parse().unwrap_or(0.0);
    now_ms + secs * 1000.0
}

/// Sign-in / sign-up response from the provider account endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) struct SignInResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, alias = "profilePicture")]
    pub photo_url: Option<String>,
}

/// Token-refresh response; this endpoint speaks snake_case.
#[derive(Debug, Deserialize)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn session_from_sign_in(resp: SignInResponse, fallback_email: &str, now_ms: f64) -> StoredSession {
    StoredSession {
        identity: Identity {
            uid: resp.local_id,
            email: resp.email.unwrap_or_else(|| fallback_email.to_owned()),
            display_name: resp.display_name.filter(|s| !s.is_empty()),
            photo_url: resp.photo_url.filter(|s| !s.is_empty()),
        },
        tokens: TokenSet {
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at_ms: expires_at_ms(now_ms, &resp.expires_in),
        },
    }
}

/// Parse the fragment the federated callback page receives, e.g.
/// `id_token=..&refresh_token=..&expires_in=3600&uid=..&email=..`.
pub fn parse_callback_fragment(fragment: &str, now_ms: f64) -> Option<StoredSession> {
    let mut id_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut uid = None;
    let mut email = None;
    let mut display_name = None;
    let mut photo_url = None;

    for pair in fragment.trim_start_matches('#').split('&') {
        let (key, raw) = pair.split_once('=')?;
        let value = urlencoding::decode(raw).ok()?.into_owned();
        match key {
            "id_token" => id_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_in" => expires_in = Some(value),
            "uid" => uid = Some(value),
            "email" => email = Some(value),
            "display_name" => display_name = Some(value),
            "photo_url" => photo_url = Some(value),
            _ => {}
        }
    }

    Some(StoredSession {
        identity: Identity {
            uid: uid?,
            email: email?,
            display_name: display_name.filter(|s| !s.is_empty()),
            photo_url: photo_url.filter(|s| !s.is_empty()),
        },
        tokens: TokenSet {
            id_token: id_token?,
            refresh_token: refresh_token?,
            expires_at_ms: expires_at_ms(now_ms, expires_in.as_deref().unwrap_or("0")),
        },
    })
}

/// Popup URL for the provider's federated sign-in flow.
pub fn federated_popup_url(origin: &str) -> String {
    let callback = format!("{origin}/auth/callback");
    format!(
        "{}?redirect_uri={}",
        crate::net::config::federated_auth_url(),
        urlencoding::encode(&callback)
    )
}

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct BridgeState {
    current: Option<StoredSession>,
    subscribers: Vec<(u64, std::rc::Rc<dyn Fn(Option<Identity>)>)>,
    next_subscriber: u64,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static BRIDGE: std::cell::RefCell<BridgeState> = std::cell::RefCell::new(BridgeState::default());
}

#[cfg(feature = "hydrate")]
fn emit_identity_changed() {
    let (subscribers, identity) = BRIDGE.with(|b| {
        let state = b.borrow();
        (
            state.subscribers.iter().map(|(_, cb)| cb.clone()).collect::<Vec<_>>(),
            state.current.as_ref().map(|s| s.identity.clone()),
        )
    });
    // Callbacks run outside the borrow so they may call back into the bridge.
    for cb in subscribers {
        cb(identity.clone());
    }
}

#[cfg(feature = "hydrate")]
fn persist_session(session: Option<&StoredSession>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match session {
        Some(session) => {
            if let Ok(json) = serde_json::to_string(session) {
                if storage.set_item(SESSION_STORAGE_KEY, &json).is_err() {
                    log::warn!("failed to persist auth session");
                }
            }
        }
        None => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn install_session(session: StoredSession) -> Identity {
    let identity = session.identity.clone();
    persist_session(Some(&session));
    BRIDGE.with(|b| b.borrow_mut().current = Some(session));
    emit_identity_changed();
    identity
}

#[cfg(feature = "hydrate")]
fn clear_session() {
    persist_session(None);
    BRIDGE.with(|b| b.borrow_mut().current = None);
    emit_identity_changed();
}

#[cfg(feature = "hydrate")]
fn restore_persisted_session() -> Option<StoredSession> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let json = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

#[cfg(feature = "hydrate")]
async fn provider_post(url: &str, body: &serde_json::Value) -> Result<SignInResponse, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let code = parse_provider_error(&body).unwrap_or_else(|| format!("HTTP_{}", resp.status()));
        return Err(map_provider_code(&code));
    }
    resp.json::<SignInResponse>()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

/// Restore any persisted session. Call exactly once during app startup,
/// before the session store subscribes, so the subscription's immediate
/// replay sees the restored identity.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(session) = restore_persisted_session() {
            BRIDGE.with(|b| b.borrow_mut().current = Some(session));
        }
        emit_identity_changed();
    }
}

/// Register an identity-changed callback. Fires once immediately with the
/// current identity (or `None`), then on every subsequent change.
pub fn subscribe(callback: impl Fn(Option<Identity>) + 'static) -> Subscription {
    #[cfg(feature = "hydrate")]
    {
        let callback = std::rc::Rc::new(callback);
        let id = BRIDGE.with(|b| {
            let mut state = b.borrow_mut();
            let id = state.next_subscriber;
            state.next_subscriber += 1;
            state.subscribers.push((id, callback.clone()));
            id
        });
        let current = BRIDGE.with(|b| b.borrow().current.as_ref().map(|s| s.identity.clone()));
        callback(current);
        Subscription(id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        callback(None);
        Subscription(0)
    }
}

/// Sign in with an email/password pair.
///
/// # Errors
///
/// `InvalidCredentials` on rejection, `Network` on transport failure.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Identity, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            crate::net::config::identity_base(),
            crate::net::config::identity_api_key()
        );
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let resp = provider_post(&url, &body).await?;
        let session = session_from_sign_in(resp, email, js_sys::Date::now());
        Ok(install_session(session))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::NoSession)
    }
}

/// Create an account, then best-effort apply the seed's display name and
/// photo URL.
///
/// The password policy is enforced locally before any network call.
///
/// # Errors
///
/// `WeakPassword` on policy violation, `EmailInUse` if already registered.
pub async fn register_with_password(seed: &ProfileSeed) -> Result<Identity, AuthError> {
    if let Err(message) = validate_password(&seed.password) {
        return Err(AuthError::WeakPassword(message.to_owned()));
    }
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/accounts:signUp?key={}",
            crate::net::config::identity_base(),
            crate::net::config::identity_api_key()
        );
        let body = serde_json::json!({
            "email": seed.email,
            "password": seed.password,
            "returnSecureToken": true,
        });
        let resp = provider_post(&url, &body).await?;
        let mut session = session_from_sign_in(resp, &seed.email, js_sys::Date::now());

        if !seed.name.trim().is_empty() || !seed.photo_url.trim().is_empty() {
            match apply_profile_update(&session.tokens.id_token, seed.name.trim(), seed.photo_url.trim()).await {
                Ok(()) => {
                    session.identity.display_name =
                        Some(seed.name.trim().to_owned()).filter(|s| !s.is_empty());
                    session.identity.photo_url =
                        Some(seed.photo_url.trim().to_owned()).filter(|s| !s.is_empty());
                }
                // Account creation already succeeded; a failed name update
                // is not worth failing registration over.
                Err(err) => log::warn!("profile seed update failed: {err}"),
            }
        }
        Ok(install_session(session))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::NoSession)
    }
}

#[cfg(feature = "hydrate")]
async fn apply_profile_update(id_token: &str, display_name: &str, photo_url: &str) -> Result<(), AuthError> {
    let url = format!(
        "{}/accounts:update?key={}",
        crate::net::config::identity_base(),
        crate::net::config::identity_api_key()
    );
    let body = serde_json::json!({
        "idToken": id_token,
        "displayName": display_name,
        "photoUrl": photo_url,
        "returnSecureToken": false,
    });
    let resp = gloo_net::http::Request::post(&url)
        .json(&body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let code = parse_provider_error(&body).unwrap_or_else(|| format!("HTTP_{}", resp.status()));
        return Err(map_provider_code(&code));
    }
    Ok(())
}

/// Update the provider-side display name / photo URL for the current
/// identity and re-emit it to subscribers.
///
/// # Errors
///
/// `NoSession` when signed out; provider/network errors otherwise.
pub async fn update_profile(display_name: &str, photo_url: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let token = fresh_credential().await?;
        apply_profile_update(&token, display_name, photo_url).await?;
        let updated = BRIDGE.with(|b| {
            let mut state = b.borrow_mut();
            if let Some(session) = state.current.as_mut() {
                session.identity.display_name =
                    Some(display_name.to_owned()).filter(|s| !s.is_empty());
                session.identity.photo_url = Some(photo_url.to_owned()).filter(|s| !s.is_empty());
                Some(session.clone())
            } else {
                None
            }
        });
        if let Some(session) = updated {
            persist_session(Some(&session));
            emit_identity_changed();
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (display_name, photo_url);
        Err(AuthError::NoSession)
    }
}

/// Federated sign-in via a provider popup.
///
/// The popup lands on `/auth/callback`, which writes a token handoff to
/// `localStorage` and closes itself; this function polls for the handoff.
///
/// # Errors
///
/// `PopupClosed` if the window is dismissed (or times out) before the
/// handoff arrives.
pub async fn sign_in_with_popup() -> Result<Identity, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| AuthError::Network("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| AuthError::Network("no storage".to_owned()))?;
        let _ = storage.remove_item(HANDOFF_STORAGE_KEY);

        let origin = window
            .location()
            .origin()
            .map_err(|_| AuthError::Network("no origin".to_owned()))?;
        let popup = window
            .open_with_url_and_target_and_features(
                &federated_popup_url(&origin),
                "_blank",
                "popup,width=480,height=640",
            )
            .ok()
            .flatten()
            .ok_or(AuthError::PopupClosed)?;

        // Poll for the handoff; the flow must terminate in bounded time.
        for _ in 0..480 {
            gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
            if let Ok(Some(json)) = storage.get_item(HANDOFF_STORAGE_KEY) {
                let _ = storage.remove_item(HANDOFF_STORAGE_KEY);
                let session: StoredSession = serde_json::from_str(&json)
                    .map_err(|e| AuthError::Network(e.to_string()))?;
                return Ok(install_session(session));
            }
            if popup.closed().unwrap_or(true) {
                return Err(AuthError::PopupClosed);
            }
        }
        Err(AuthError::PopupClosed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::NoSession)
    }
}

/// Clear the local session and notify subscribers. Always succeeds locally.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        clear_session();
    }
}

/// A bearer token for the current identity, transparently renewed when the
/// cached one is near expiry.
///
/// # Errors
///
/// `NoSession` when signed out (including after a failed renewal, which
/// clears the session).
pub async fn fresh_credential() -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(tokens) = BRIDGE.with(|b| b.borrow().current.as_ref().map(|s| s.tokens.clone())) else {
            return Err(AuthError::NoSession);
        };
        if token_is_fresh(tokens.expires_at_ms, js_sys::Date::now()) {
            return Ok(tokens.id_token);
        }

        let url = format!(
            "{}/token?key={}",
            crate::net::config::token_base(),
            crate::net::config::identity_api_key()
        );
        let form = format!(
            "grant_type=refresh_token&refresh_token={}",
            urlencoding::encode(&tokens.refresh_token)
        );
        let resp = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            // The provider revoked the refresh token; the session is dead.
            log::warn!("token refresh rejected ({}), signing out", resp.status());
            clear_session();
            return Err(AuthError::NoSession);
        }
        let refreshed: RefreshResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let id_token = refreshed.id_token.clone();
        let updated = BRIDGE.with(|b| {
            let mut state = b.borrow_mut();
            if let Some(session) = state.current.as_mut() {
                session.tokens = TokenSet {
                    id_token: refreshed.id_token,
                    refresh_token: refreshed.refresh_token,
                    expires_at_ms: expires_at_ms(js_sys::Date::now(), &refreshed.expires_in),
                };
                Some(session.clone())
            } else {
                None
            }
        });
        if let Some(session) = updated {
            persist_session(Some(&session));
        }
        Ok(id_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::NoSession)
    }
}
