//! Binding to the hosted auth provider's browser SDK (`window.Clerk`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns identity, session lifecycle, and token issuance. This
//! module only snapshots its user into `AuthState`, subscribes to changes,
//! and asks it for bearer tokens. Role resolution happens in
//! `state::auth`; nothing here interprets metadata.
//!
//! TRADE-OFFS
//! ==========
//! The SDK is reached through `js_sys::Reflect` instead of typed bindings so
//! a missing or slow-loading script degrades to "signed out" rather than a
//! hydration panic. SSR and native builds no-op.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clerk_test.rs"]
mod clerk_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;

/// DOM id of the element the hosted sign-in widget mounts into.
pub const SIGN_IN_ROOT_ID: &str = "sign-in-root";

/// Quick polls for `window.Clerk` before the visitor is shown as signed out.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const FAST_POLL_ATTEMPTS: u32 = 50;
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const FAST_POLL_INTERVAL: Duration = Duration::from_millis(100);
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const SLOW_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Delay after the zero-based poll `attempt` found no provider.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn poll_interval(attempt: u32) -> Duration {
    if attempt < FAST_POLL_ATTEMPTS {
        FAST_POLL_INTERVAL
    } else {
        SLOW_POLL_INTERVAL
    }
}

/// Whether a provider still missing after `attempt` should mark the visitor
/// signed out. Polling continues afterwards at the slow interval.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn gives_up_waiting(attempt: u32) -> bool {
    attempt == FAST_POLL_ATTEMPTS - 1
}

#[cfg(feature = "hydrate")]
mod sdk {
    use js_sys::{Array, Function, JSON, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use crate::state::auth::{AuthState, SessionUser};

    pub(super) fn describe(err: &JsValue) -> String {
        err.as_string()
            .or_else(|| {
                Reflect::get(err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{err:?}"))
    }

    fn present(value: JsValue) -> Option<JsValue> {
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    pub(super) fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key)).ok().and_then(present)
    }

    pub(super) fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let func: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
        func.apply(target, &args.iter().collect::<Array>())
    }

    pub(super) async fn resolve(value: JsValue) -> Result<JsValue, JsValue> {
        JsFuture::from(Promise::resolve(&value)).await
    }

    pub(super) fn options(pairs: &[(&str, &str)]) -> JsValue {
        let obj = Object::new();
        for (key, value) in pairs {
            let _ = Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_str(value));
        }
        obj.into()
    }

    pub(super) fn instance() -> Option<JsValue> {
        let window = web_sys::window()?;
        get(&window, "Clerk")
    }

    /// Wait for the provider script to define `window.Clerk`, calling
    /// `on_slow` once the quick polls run out.
    pub(super) async fn wait_for_instance(on_slow: impl FnOnce()) -> JsValue {
        let mut on_slow = Some(on_slow);
        let mut attempt = 0_u32;
        loop {
            if let Some(clerk) = instance() {
                return clerk;
            }
            if super::gives_up_waiting(attempt) {
                if let Some(notify) = on_slow.take() {
                    notify();
                }
            }
            gloo_timers::future::sleep(super::poll_interval(attempt)).await;
            attempt = attempt.saturating_add(1);
        }
    }

    /// Read the provider's current user into an `AuthState`.
    pub(super) fn snapshot(clerk: &JsValue) -> AuthState {
        let Some(user) = get(clerk, "user") else {
            return AuthState::signed_out();
        };
        let Some(id) = get(&user, "id").and_then(|v| v.as_string()) else {
            return AuthState::signed_out();
        };
        let first = get(&user, "firstName").and_then(|v| v.as_string());
        let last = get(&user, "lastName").and_then(|v| v.as_string());
        let metadata = get(&user, "publicMetadata")
            .and_then(|m| JSON::stringify(&m).ok())
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or(serde_json::Value::Null);
        AuthState::signed_in(SessionUser::from_parts(&id, first.as_deref(), last.as_deref(), &metadata))
    }
}

/// Load the provider and keep `auth` in sync with its session events.
///
/// Until the provider finishes loading `auth` stays not-loaded, which keeps
/// every guard rendering nothing. If the SDK is slow to appear the visitor is
/// shown as signed out, and the real session replaces that once it loads.
pub fn install_auth_listener(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let clerk = sdk::wait_for_instance(|| {
            log::warn!("auth provider script not available yet; treating visitor as signed out");
            let _ = auth.try_set(AuthState::signed_out());
        })
        .await;
        let loaded = match sdk::call(&clerk, "load", &[]) {
            Ok(promise) => sdk::resolve(promise).await,
            Err(err) => Err(err),
        };
        if let Err(err) = loaded {
            log::warn!("auth provider failed to load: {}", sdk::describe(&err));
            let _ = auth.try_set(AuthState::signed_out());
            return;
        }
        let _ = auth.try_set(sdk::snapshot(&clerk));

        let listener_clerk = clerk.clone();
        let on_change = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            let next = sdk::snapshot(&listener_clerk);
            if auth.try_get_untracked().as_ref() != Some(&next) {
                let _ = auth.try_set(next);
            }
        });
        if let Err(err) = sdk::call(&clerk, "addListener", &[on_change.as_ref().clone()]) {
            log::warn!("could not subscribe to auth changes: {}", sdk::describe(&err));
        }
        // The provider holds the callback for the lifetime of the page.
        on_change.forget();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Fetch a bearer token for `template` from the active session.
///
/// # Errors
///
/// Returns `ApiError::Token` when there is no active session or the
/// provider rejects the request.
pub async fn session_token(template: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let clerk = sdk::instance().ok_or_else(|| ApiError::Token("auth provider not loaded".to_owned()))?;
        let session = sdk::get(&clerk, "session").ok_or_else(|| ApiError::Token("no active session".to_owned()))?;
        let promise = sdk::call(&session, "getToken", &[sdk::options(&[("template", template)])])
            .map_err(|e| ApiError::Token(sdk::describe(&e)))?;
        let token = sdk::resolve(promise)
            .await
            .map_err(|e| ApiError::Token(sdk::describe(&e)))?;
        token
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Token("provider returned no token".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = template;
        Err(ApiError::Unavailable)
    }
}

/// Mount the hosted sign-in widget into `#sign-in-root`, sending the user to
/// `redirect_path` once authenticated.
pub fn mount_sign_in(redirect_path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(clerk) = sdk::instance() else {
            return;
        };
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SIGN_IN_ROOT_ID))
        else {
            return;
        };
        let opts = sdk::options(&[
            ("forceRedirectUrl", redirect_path),
            ("signUpForceRedirectUrl", redirect_path),
        ]);
        if let Err(err) = sdk::call(&clerk, "mountSignIn", &[target.into(), opts]) {
            log::warn!("could not mount sign-in widget: {}", sdk::describe(&err));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = redirect_path;
    }
}

/// Remove the sign-in widget mounted by `mount_sign_in`.
pub fn unmount_sign_in() {
    #[cfg(feature = "hydrate")]
    {
        let Some(clerk) = sdk::instance() else {
            return;
        };
        if let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SIGN_IN_ROOT_ID))
        {
            let _ = sdk::call(&clerk, "unmountSignIn", &[target.into()]);
        }
    }
}

/// End the provider session. The change listener updates `AuthState`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let Some(clerk) = sdk::instance() else {
            return;
        };
        let result = match sdk::call(&clerk, "signOut", &[]) {
            Ok(promise) => sdk::resolve(promise).await.map(drop),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            log::warn!("sign-out failed: {}", sdk::describe(&err));
        }
    }
}
