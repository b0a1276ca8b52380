//! Host configuration loaded from the process environment.
//!
//! `BACKEND_URL` is required; everything else has a default. The browser
//! receives the `AppConfig` half through the SSR shell.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{AppConfig, DEFAULT_SESSION_FETCH_DELAY_MS, DEFAULT_TOKEN_TEMPLATE, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub app: AppConfig,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns a `ConfigError` when `BACKEND_URL` is unset or a numeric
    /// setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let backend_url = value("BACKEND_URL")
            .map(|v| normalize_base_url(&v))
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("BACKEND_URL"))?;
        let port = parse_or("PORT", value("PORT"), DEFAULT_PORT)?;
        let session_fetch_delay_ms =
            parse_or("SESSION_FETCH_DELAY_MS", value("SESSION_FETCH_DELAY_MS"), DEFAULT_SESSION_FETCH_DELAY_MS)?;

        Ok(Self {
            port,
            app: AppConfig {
                backend_url,
                token_template: value("AUTH_TOKEN_TEMPLATE").unwrap_or_else(|| DEFAULT_TOKEN_TEMPLATE.to_owned()),
                clerk_publishable_key: value("CLERK_PUBLISHABLE_KEY").unwrap_or_default(),
                session_fetch_delay_ms,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
