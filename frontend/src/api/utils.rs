use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use log::debug;
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Result, SharedError};

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "session_token";
/// Local storage key holding the signed-in user.
pub const USER_KEY: &str = "session_user";

/// Creates a request with Authorization header from localStorage
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };

    if let Ok(token) = LocalStorage::get::<String>(TOKEN_KEY) {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    req
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    authenticated_request("PUT", url)
}

/// Turns a non-2xx response into the matching error, keeping field-level detail.
pub async fn error_from_response(response: Response) -> SharedError {
    let status = response.status();
    let body = response.json::<ErrorResponse>().await.unwrap_or_else(|_| ErrorResponse {
        error: "Unknown error occurred".to_string(),
        ..Default::default()
    });
    SharedError::from_response(status, body)
}

/// Sends `request` and decodes a JSON body of type `T`. `what` names the
/// resource in error messages.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to reach the server for {}: {}", what, e)))?;
    decode_json(response, what).await
}

pub async fn decode_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    let value = response
        .json::<T>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse {} response: {}", what, e)))?;
    debug!("decoded {} response", what);
    Ok(value)
}
