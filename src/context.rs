//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::FormError;
use crate::toast::{ToastKind, ToastQueue};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pending toasts - read
    pub toasts: ReadSignal<ToastQueue>,
    /// Pending toasts - write
    set_toasts: WriteSignal<ToastQueue>,
    /// Notifications overlay open - read
    pub notifications_open: ReadSignal<bool>,
    /// Notifications overlay open - write
    set_notifications_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        toasts: (ReadSignal<ToastQueue>, WriteSignal<ToastQueue>),
        notifications_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
            notifications_open: notifications_open.0,
            set_notifications_open: notifications_open.1,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "toast");
        self.set_toasts.update(|q| {
            q.push(ToastKind::Success, message);
        });
    }

    /// Toast a form outcome and hand back the accepted value
    pub fn settle<T>(
        &self,
        outcome: Result<T, FormError>,
        success: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "form rejected");
        }
        self.set_toasts.try_update(|q| q.settle(outcome, success)).flatten()
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|q| q.dismiss(id));
    }

    pub fn toggle_notifications(&self) {
        self.set_notifications_open.update(|v| *v = !*v);
    }

    pub fn close_notifications(&self) {
        self.set_notifications_open.set(false);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
