//! Identity-provider integration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bridge` owns the provider session (sign-in flows, token renewal, the
//! identity-changed subscription); `error` defines the failure taxonomy
//! surfaced to forms. No other module talks to the provider.

pub mod bridge;
pub mod error;
