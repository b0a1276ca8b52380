//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted auth provider owns the session; this module is the only place
//! its loosely-typed user metadata is turned into a typed `Role`. Route
//! guards, the post-auth redirector, and the admin gate all read the
//! resolved `AuthState` and never look at raw metadata.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

/// Metadata key the provider stores the role claim under.
pub const ROLE_CLAIM_KEY: &str = "role";
/// Claim value granting admin access. Compared exactly.
pub const ADMIN_ROLE_CLAIM: &str = "admin";

/// Closed set of roles the console distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    /// Any signed-in user whose claim is not exactly `"admin"`, including
    /// users with no claim at all.
    Member,
}

impl Role {
    /// Classify a raw role claim.
    pub fn from_claim(claim: &Value) -> Self {
        match claim {
            Value::String(s) if s == ADMIN_ROLE_CLAIM => Self::Admin,
            _ => Self::Member,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

/// Resolve the role from a user's public metadata object.
pub fn resolve_role(public_metadata: &Value) -> Role {
    public_metadata
        .get(ROLE_CLAIM_KEY)
        .map_or(Role::Member, Role::from_claim)
}

/// The signed-in user as the console sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub display_name: String,
    pub role: Role,
}

impl SessionUser {
    /// Build a user from the fields read off the provider's user object.
    pub fn from_parts(id: &str, first_name: Option<&str>, last_name: Option<&str>, public_metadata: &Value) -> Self {
        let name = [first_name, last_name]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            id: id.to_owned(),
            display_name: if name.is_empty() { id.to_owned() } else { name },
            role: resolve_role(public_metadata),
        }
    }
}

/// Authentication state tracking the current user and whether the provider
/// has finished loading.
///
/// `user` and the role it carries are meaningful only once `loaded` is true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loaded: bool,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self { user: None, loaded: true }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user), loaded: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.loaded && self.user.is_some()
    }

    /// The resolved role, or `None` while loading or signed out.
    pub fn role(&self) -> Option<Role> {
        if !self.loaded {
            return None;
        }
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}
