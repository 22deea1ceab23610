use contracts::shared::error::error_message;
use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use gloo_net::http::{Request, Response};

use crate::shared::http::api_url;

/// Authenticate with email and password. Failures carry the server's
/// message so the login form can show it inline.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&api_url("/users/auth/login"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// Create a new account. Does not log the new user in.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    let response = Request::post(&api_url("/users/auth/register"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

async fn failure_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}
