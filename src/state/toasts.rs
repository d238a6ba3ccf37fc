//! Non-blocking toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report mutation outcomes here instead of blocking the UI; the
//! `ToastHost` component renders the queue and entries dismiss themselves
//! after a few seconds.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use uuid::Uuid;

#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4_000;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier suffix for the toast entry.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Shared toast queue, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub items: Vec<Toast>,
}

impl ToastsState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast { id, level, message: message.into() });
        id
    }

    /// Remove a toast by id; unknown ids are ignored (it may have been
    /// dismissed manually before its timer fired).
    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|t| t.id != id);
    }
}

/// Queue a toast on the shared signal and schedule its auto-dismissal.
pub fn show(toasts: RwSignal<ToastsState>, level: ToastLevel, message: impl Into<String>) {
    let mut id = Uuid::nil();
    let message = message.into();
    toasts.update(|t| id = t.push(level, message));
    let _ = id;
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });
}

pub fn success(toasts: RwSignal<ToastsState>, message: impl Into<String>) {
    show(toasts, ToastLevel::Success, message);
}

pub fn error(toasts: RwSignal<ToastsState>, message: impl Into<String>) {
    show(toasts, ToastLevel::Error, message);
}

pub fn info(toasts: RwSignal<ToastsState>, message: impl Into<String>) {
    show(toasts, ToastLevel::Info, message);
}
