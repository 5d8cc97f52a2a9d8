use crate::api::api_url;
use crate::api::utils::{authenticated_post, decode_json};
use gloo_net::http::Request;
use log::{debug, warn};
use shared::{LoginRequest, LoginResponse, Result, SharedError};
use validator::Validate;

pub async fn login(email: String, password: String) -> Result<LoginResponse> {
    let request = LoginRequest { email, password };
    request.validate()?;
    debug!("Attempting login for {}", request.email);

    let builder = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize login request: {}", e)))?;
    let response = builder
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to reach the server: {}", e)))?;
    decode_json(response, "login").await
}

/// Tells the API to drop the token. Failure only gets logged: the local session
/// is cleared either way.
pub async fn logout() {
    match authenticated_post(&api_url("/api/auth/logout")).send().await {
        Ok(response) if response.ok() => debug!("Logged out"),
        Ok(response) => warn!("Logout request returned status {}", response.status()),
        Err(e) => warn!("Logout request failed: {}", e),
    }
}
