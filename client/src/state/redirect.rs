//! One-shot redirect decision for the `/post-auth` landing route.
//!
//! DESIGN
//! ======
//! The redirector is a small state machine, `Waiting -> Redirecting -> Done`,
//! fed by the reactive auth signal. It yields a navigation target at most
//! once per resolved `(signed_in, role)` key, so re-renders and unrelated
//! signal churn never produce a second navigation.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use super::auth::{AuthState, Role};

/// Where a freshly authenticated (or rejected) visitor is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Admin,
    Dashboard,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Admin => "/admin",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Target for a loaded session; `None` while auth is still loading.
    pub fn for_auth(auth: &AuthState) -> Option<Self> {
        if !auth.loaded {
            return None;
        }
        Some(match auth.role() {
            None => Self::Login,
            Some(Role::Admin) => Self::Admin,
            Some(Role::Member) => Self::Dashboard,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RedirectPhase {
    #[default]
    Waiting,
    Redirecting(RedirectTarget),
    Done(RedirectTarget),
}

type ResolvedKey = (bool, Option<Role>);

/// Post-auth redirect state machine. One instance per page mount.
#[derive(Clone, Debug, Default)]
pub struct PostAuthRedirector {
    phase: RedirectPhase,
    last_key: Option<ResolvedKey>,
}

impl PostAuthRedirector {
    pub fn phase(&self) -> RedirectPhase {
        self.phase
    }

    /// Feed the latest auth state. Returns the target to navigate to when
    /// this state resolves to a key not acted on yet.
    pub fn observe(&mut self, auth: &AuthState) -> Option<RedirectTarget> {
        let target = RedirectTarget::for_auth(auth)?;
        let key = (auth.is_signed_in(), auth.role());
        if self.last_key == Some(key) {
            return None;
        }
        self.last_key = Some(key);
        self.phase = RedirectPhase::Redirecting(target);
        Some(target)
    }

    /// Mark the pending navigation as issued.
    pub fn complete(&mut self) {
        if let RedirectPhase::Redirecting(target) = self.phase {
            self.phase = RedirectPhase::Done(target);
        }
    }
}
