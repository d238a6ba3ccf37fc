//! Session state — the single source of truth for who is using the app.
//!
//! ARCHITECTURE
//! ============
//! `SessionState` is a small state machine driven by identity-changed events
//! from the auth bridge plus explicit refetch/logout calls. All transitions
//! are pure methods so the lifecycle is testable without a browser; the
//! Leptos wiring at the bottom of this module owns the one bridge
//! subscription and the profile fetches.
//!
//! TRADE-OFFS
//! ==========
//! A failed profile fetch leaves the session Authenticated with an absent
//! profile rather than erroring: backend downtime must not lock a signed-in
//! user out of the shell UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::bridge::{self, Identity};
use crate::net::types::{AppUser, Role};

/// Lifecycle phase, derived from the session tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// App start; no identity-changed event has resolved yet.
    Initializing,
    /// The bridge reported no identity.
    Anonymous,
    /// Identity present, first profile fetch in flight.
    ResolvingProfile,
    /// Identity present, profile fetch settled (possibly with no profile).
    Authenticated,
}

/// Current identity, application profile, and loading flag.
///
/// Mutated only by the bridge subscription callback and the explicit
/// [`refetch_profile`] / [`logout`] calls; everything else reads through
/// the derived accessors.
#[derive(Clone, Debug)]
pub struct SessionState {
    identity: Option<Identity>,
    profile: Option<AppUser>,
    loading: bool,
    /// Bumped on every identity change and refetch; stale profile fetches
    /// carry an older value and are discarded on completion.
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, profile: None, loading: true, epoch: 0 }
    }
}

impl SessionState {
    /// Apply an identity-changed event from the bridge.
    ///
    /// Returns the epoch for a profile fetch the caller must start, or
    /// `None` when the event signed the user out.
    pub fn identity_changed(&mut self, identity: Option<Identity>) -> Option<u64> {
        self.epoch += 1;
        match identity {
            Some(identity) => {
                self.identity = Some(identity);
                self.profile = None;
                self.loading = true;
                Some(self.epoch)
            }
            None => {
                self.identity = None;
                self.profile = None;
                self.loading = false;
                None
            }
        }
    }

    /// Start a profile refetch without toggling `loading` (route guards must
    /// not flicker). Returns the fetch epoch, or `None` when signed out.
    pub fn begin_profile_refetch(&mut self) -> Option<u64> {
        if self.identity.is_none() {
            return None;
        }
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Settle a profile fetch. Results from a superseded epoch are dropped;
    /// returns whether the result was applied.
    pub fn finish_profile_fetch(&mut self, epoch: u64, profile: Option<AppUser>) -> bool {
        if epoch != self.epoch || self.identity.is_none() {
            return false;
        }
        self.profile = profile;
        self.loading = false;
        true
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.identity, self.loading) {
            (None, true) => SessionPhase::Initializing,
            (None, false) => SessionPhase::Anonymous,
            (Some(_), true) => SessionPhase::ResolvingProfile,
            (Some(_), false) => SessionPhase::Authenticated,
        }
    }

    /// True until the current identity-changed resolution completes; no
    /// authorization decision may be made while set.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn profile(&self) -> Option<&AppUser> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Premium entitlement; always false without a resolved profile.
    pub fn is_premium(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_premium)
    }

    /// Role from the application profile; defaults to `user` when absent.
    pub fn role(&self) -> Role {
        self.profile.as_ref().map_or(Role::User, |p| p.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

/// Create the session signal and put it into context. Called once from the
/// root component.
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    session
}

/// The session signal from context.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Restore any persisted bridge session, then subscribe the store to it.
/// The subscription's immediate replay delivers the first identity-changed
/// resolution; it lives for the whole process.
pub fn init_session(session: RwSignal<SessionState>) {
    bridge::init();
    let _subscription = bridge::subscribe(move |identity| {
        let mut fetch_epoch = None;
        session.update(|s| fetch_epoch = s.identity_changed(identity));
        if let Some(epoch) = fetch_epoch {
            spawn_profile_fetch(session, epoch);
        }
    });
}

/// Re-resolve the application profile for the current identity, e.g. after
/// a completed payment or lesson creation.
pub fn refetch_profile(session: RwSignal<SessionState>) {
    let mut epoch = None;
    session.update(|s| epoch = s.begin_profile_refetch());
    if let Some(epoch) = epoch {
        spawn_profile_fetch(session, epoch);
    }
}

/// Sign out: the bridge emits identity-changed(absent), which resets the
/// store through the subscription.
pub fn logout(session: RwSignal<SessionState>) {
    let _ = session;
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        bridge::sign_out().await;
    });
}

fn spawn_profile_fetch(session: RwSignal<SessionState>, epoch: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let profile = match crate::net::api::fetch_me().await {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("profile fetch failed, continuing without one: {err}");
                None
            }
        };
        session.update(|s| {
            s.finish_profile_fetch(epoch, profile);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    session.update(|s| {
        s.finish_profile_fetch(epoch, None);
    });
}
