//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every validation or API failure ends in a toast; successes get one too.
//! Shared as a `RwSignal<Notifications>` context and rendered by `ToastStack`.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::config::MAX_VISIBLE_TOASTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    items: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Queue a toast and return its id. Drops the oldest past the visible limit.
    pub fn push(&mut self, level: ToastLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, level, text: text.into() });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<Notifications>, level: ToastLevel, text: impl Into<String>) {
    let id = toasts.try_update(|n| n.push(level, text));
    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        gloo_timers::callback::Timeout::new(crate::config::TOAST_DURATION_MS, move || {
            toasts.update(|n| {
                n.dismiss(id);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn notify_success(toasts: RwSignal<Notifications>, text: impl Into<String>) {
    notify(toasts, ToastLevel::Success, text);
}

pub fn notify_error(toasts: RwSignal<Notifications>, text: impl Into<String>) {
    notify(toasts, ToastLevel::Error, text);
}
