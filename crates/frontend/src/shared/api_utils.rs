//! HTTP plumbing shared by all gateways.
//!
//! Every entity request goes through the helpers here: URL construction from
//! the current window location, the bearer header, the `{ data }` envelope
//! and one normalization point for server error messages.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::shared::envelope::ApiEnvelope;

use crate::system::auth::storage;

/// Shown when a failed response carries no usable `message`.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 8080.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// One error-extraction point for every remote call: prefer the server's
/// `message`, fall back to a generic string.
pub async fn extract_error_message(response: Response) -> String {
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    GENERIC_ERROR.to_string()
}

async fn send_checked(builder: RequestBuilder) -> Result<Response, String> {
    let response = builder
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(extract_error_message(response).await);
    }
    Ok(response)
}

async fn send_checked_with_body(
    builder: RequestBuilder,
    body: &impl Serialize,
) -> Result<Response, String> {
    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(extract_error_message(response).await);
    }
    Ok(response)
}

async fn parse_enveloped<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(envelope.data)
}

/// GET an enveloped payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send_checked(with_auth(Request::get(&api_url(path)))).await?;
    parse_enveloped(response).await
}

/// POST a body; the response payload is discarded.
pub async fn post_json(path: &str, body: &impl Serialize) -> Result<(), String> {
    send_checked_with_body(with_auth(Request::post(&api_url(path))), body).await?;
    Ok(())
}

/// PUT a body; the response payload is discarded.
pub async fn put_json(path: &str, body: &impl Serialize) -> Result<(), String> {
    send_checked_with_body(with_auth(Request::put(&api_url(path))), body).await?;
    Ok(())
}

/// PATCH with no body; the response payload is discarded.
pub async fn patch(path: &str) -> Result<(), String> {
    send_checked(with_auth(Request::patch(&api_url(path)))).await?;
    Ok(())
}

/// DELETE; the response payload is discarded.
pub async fn delete(path: &str) -> Result<(), String> {
    send_checked(with_auth(Request::delete(&api_url(path)))).await?;
    Ok(())
}

/// POST a body and parse a bare (non-enveloped) response. Used by the auth
/// endpoints, which do not wrap their payloads.
pub async fn post_json_bare<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, String> {
    let response = send_checked_with_body(with_auth(Request::post(&api_url(path))), body).await?;
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
