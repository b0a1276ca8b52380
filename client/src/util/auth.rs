//! Shared route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes share one signed-in guard. The admin route layers a
//! stricter role gate on top that navigates non-admins away instead of
//! swapping content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::redirect::RedirectTarget;

/// Outcome of the generic signed-in guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Auth has not loaded; render nothing.
    Unknown,
    Authorized,
    /// Render the login view in place.
    Unauthorized,
}

impl GuardState {
    pub fn from_auth(auth: &AuthState) -> Self {
        if !auth.loaded {
            Self::Unknown
        } else if auth.is_signed_in() {
            Self::Authorized
        } else {
            Self::Unauthorized
        }
    }
}

/// Outcome of the admin-only role gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminGate {
    /// Not loaded, or signed out (the outer guard handles that case).
    Pending,
    Allow,
    RedirectToDashboard,
}

impl AdminGate {
    pub fn from_auth(auth: &AuthState) -> Self {
        if !auth.is_signed_in() {
            Self::Pending
        } else if auth.is_admin() {
            Self::Allow
        } else {
            Self::RedirectToDashboard
        }
    }
}

/// Replace the current history entry with `/dashboard` whenever a loaded,
/// signed-in user lacks the admin role.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if AdminGate::from_auth(&auth.get()) == AdminGate::RedirectToDashboard {
            navigate(RedirectTarget::Dashboard.path(), replace_history());
        }
    });
}

/// Navigation options that replace the current history entry.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
