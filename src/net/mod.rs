//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns credential attachment, envelope normalization, and the
//! global 401/403 reaction; `api`, `api_lessons`, and `api_admin` are thin
//! typed endpoint wrappers over it; `types` defines the wire schema and
//! `config` the base URLs.

pub mod api;
pub mod api_admin;
pub mod api_lessons;
pub mod client;
pub mod config;
pub mod types;
