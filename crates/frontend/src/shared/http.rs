//! Authenticated HTTP client for frontend-backend communication.
//!
//! Every request attaches the persisted bearer token when one exists. A 401
//! answer from any endpoint invalidates the session (forced logout) before
//! the error is handed back to the caller; all other failures stay local to
//! the call site.

use contracts::shared::error::error_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::SessionManager;
use crate::system::auth::storage;

/// Build the API base URL from the current window location.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api", protocol, host)
}

/// Build a full API URL from a path such as `/centers/me`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server rejected the credential; the session has already been
    /// terminated by the time the caller sees this.
    Unauthorized,
    /// Non-2xx answer with a user-facing message.
    Api { status: u16, message: String },
    /// The request never produced a response (network, serialization).
    Transport(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Transport(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Thin wrapper over `gloo_net` shared through context next to the
/// [`SessionManager`]. Copyable so async handlers can move it freely.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionManager,
}

impl ApiClient {
    pub fn new(session: SessionManager) -> Self {
        Self { session }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(transport)?;
        self.decode(path, response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        self.decode(path, response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = authorize(Request::put(&api_url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        self.decode(path, response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = authorize(Request::patch(&api_url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        self.decode(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = authorize(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(self.failure(path, response).await)
        }
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(self.failure(path, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to parse response: {e}")))
    }

    async fn failure(&self, path: &str, response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == 401 {
            log::warn!("401 from {path}, terminating session");
            self.session.force_logout();
            return ApiError::Unauthorized;
        }
        let message = error_message(status, &body);
        log::error!("API error [{status}] on {path}: {message}");
        ApiError::Api { status, message }
    }
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Request failed: {err}"))
}

/// Hook to reach the shared client from any component under the app root.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
