//! REST gateway to the academic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying a
//! bearer token fetched from the auth provider for the configured template.
//! Server-side (SSR) and native builds: every call returns
//! `ApiError::Unavailable` since these endpoints are only reachable from the
//! browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses become
//! `ApiError::Status` so pages can show them instead of silently leaving
//! stale data on screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Classroom, MentorPayload, NewClassroom, Session, SessionTransition};
use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("could not obtain an auth token: {0}")]
    Token(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(&'static str),
    #[error("session {session_id} is {from}; cannot {action}")]
    TransitionNotAllowed {
        session_id: i64,
        from: String,
        action: &'static str,
    },
    #[error("not available outside the browser")]
    Unavailable,
}

/// Operations the admin console performs against the backend.
#[allow(async_fn_in_trait)]
pub trait AcademicApi {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError>;
    async fn create_classroom(&self, classroom: &NewClassroom) -> Result<(), ApiError>;
    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError>;
    async fn create_mentor(&self, payload: &MentorPayload) -> Result<(), ApiError>;
    async fn update_session_status(&self, session_id: i64, transition: SessionTransition) -> Result<(), ApiError>;
}

fn classroom_endpoint(base: &str) -> String {
    format!("{base}/academic/classroom")
}

fn session_endpoint(base: &str) -> String {
    format!("{base}/academic/session")
}

fn mentor_endpoint(base: &str) -> String {
    format!("{base}/academic/mentor")
}

fn session_status_endpoint(base: &str, session_id: i64, transition: SessionTransition) -> String {
    format!(
        "{base}/academic/session/{session_id}?sessionStatus={}",
        transition.target_status()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `AcademicApi` over HTTP against `AppConfig::backend_url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpGateway {
    backend_url: String,
    token_template: String,
}

impl HttpGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backend_url: config.backend_url.clone(),
            token_template: config.token_template.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, HttpGateway, bearer};

    impl HttpGateway {
        async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
            let token = crate::util::clerk::session_token(&self.token_template).await?;
            Ok(builder.header("Authorization", &bearer(&token)))
        }

        pub(super) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
            let request = self
                .authorized(Request::get(url))
                .await?
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = send(request).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }

        pub(super) async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
            let request = self
                .authorized(Request::post(url))
                .await?
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            send(request).await.map(drop)
        }

        pub(super) async fn put_empty(&self, url: &str) -> Result<(), ApiError> {
            let request = self
                .authorized(Request::put(url))
                .await?
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            send(request).await.map(drop)
        }
    }

    async fn send(request: gloo_net::http::Request) -> Result<Response, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }
}

impl AcademicApi for HttpGateway {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        let url = classroom_endpoint(&self.backend_url);
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_classroom(&self, classroom: &NewClassroom) -> Result<(), ApiError> {
        let url = classroom_endpoint(&self.backend_url);
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&url, classroom).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, classroom);
            Err(ApiError::Unavailable)
        }
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let url = session_endpoint(&self.backend_url);
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_mentor(&self, payload: &MentorPayload) -> Result<(), ApiError> {
        let url = mentor_endpoint(&self.backend_url);
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&url, payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_session_status(&self, session_id: i64, transition: SessionTransition) -> Result<(), ApiError> {
        let url = session_status_endpoint(&self.backend_url, session_id, transition);
        #[cfg(feature = "hydrate")]
        {
            self.put_empty(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}
