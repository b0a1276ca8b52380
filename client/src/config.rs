//! Runtime configuration shared by the host and the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds an `AppConfig` from its environment and renders every
//! field into the SSR shell as a `<meta>` tag. The hydrated app reads those
//! tags back, so both sides always agree on the backend URL and token
//! template.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_TOKEN_TEMPLATE: &str = "skillmentor-auth-frontend";
pub const DEFAULT_SESSION_FETCH_DELAY_MS: u64 = 2000;

pub const META_BACKEND_URL: &str = "skillmentor:backend-url";
pub const META_TOKEN_TEMPLATE: &str = "skillmentor:token-template";
pub const META_CLERK_KEY: &str = "skillmentor:clerk-publishable-key";
pub const META_SESSION_FETCH_DELAY: &str = "skillmentor:session-fetch-delay-ms";

/// Settings the admin console needs at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the academic REST backend, without a trailing `/`.
    pub backend_url: String,
    /// JWT template requested from the auth provider for backend calls.
    pub token_template: String,
    /// Publishable key for the hosted auth provider script.
    pub clerk_publishable_key: String,
    /// Fixed pause before every session-list request.
    pub session_fetch_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            token_template: DEFAULT_TOKEN_TEMPLATE.to_owned(),
            clerk_publishable_key: String::new(),
            session_fetch_delay_ms: DEFAULT_SESSION_FETCH_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Build a config from a key lookup, falling back to defaults for
    /// absent, blank, or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        Self {
            backend_url: non_blank(META_BACKEND_URL).map_or(defaults.backend_url, |v| normalize_base_url(&v)),
            token_template: non_blank(META_TOKEN_TEMPLATE).unwrap_or(defaults.token_template),
            clerk_publishable_key: non_blank(META_CLERK_KEY).unwrap_or(defaults.clerk_publishable_key),
            session_fetch_delay_ms: non_blank(META_SESSION_FETCH_DELAY)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_fetch_delay_ms),
        }
    }

    /// Read the config the server rendered into `<meta>` tags.
    ///
    /// Outside the browser this returns the defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Self::default();
            };
            Self::from_lookup(|key| {
                document
                    .query_selector(&format!("meta[name=\"{key}\"]"))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// `(name, content)` pairs rendered into the SSR shell.
    pub fn meta_entries(&self) -> [(&'static str, String); 4] {
        [
            (META_BACKEND_URL, self.backend_url.clone()),
            (META_TOKEN_TEMPLATE, self.token_template.clone()),
            (META_CLERK_KEY, self.clerk_publishable_key.clone()),
            (META_SESSION_FETCH_DELAY, self.session_fetch_delay_ms.to_string()),
        ]
    }

    pub fn session_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.session_fetch_delay_ms)
    }
}

/// Trim whitespace and trailing slashes so endpoint joins stay single-slashed.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
