//! API utilities for frontend-backend communication
//!
//! Shared error type and response handling for the `gloo-net` calls in the
//! page `api` modules.

use crate::shared::config::config;
use crate::system::auth::storage;
use gloo_net::http::Response;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("{0}")]
    Validation(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/shift-slot-types/all");
/// ```
pub fn api_url(path: &str) -> String {
    config().api_url(path)
}

/// `Authorization` header value for authenticated endpoints
pub fn auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::Unauthenticated)
}

/// Map a non-2xx response to [`ApiError::Status`], preferring the server's
/// `message` field over the raw body.
pub fn status_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthenticated;
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("message") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        })
        .unwrap_or_else(|| body.trim().to_string());
    ApiError::Status { status, message }
}

/// Fail on a non-2xx status
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = status_error(status, &body);
    if err == ApiError::Unauthenticated {
        storage::clear_tokens();
    }
    Err(err)
}

/// Check the status and decode a JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Publish the outcome of the latest request. A failure clears the previous
/// result along with setting the error.
pub fn show_result<T>(
    result: Result<T, ApiError>,
    data: WriteSignal<Option<T>>,
    error: WriteSignal<Option<String>>,
) where
    T: Send + Sync + 'static,
{
    match result {
        Ok(value) => {
            data.set(Some(value));
            error.set(None);
        }
        Err(err) => {
            data.set(None);
            error.set(Some(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_clears_previous_result() {
        let owner = Owner::new();
        owner.set();
        let (data, set_data) = signal(None::<u32>);
        let (error, set_error) = signal(None::<String>);

        show_result(Ok(42), set_data, set_error);
        assert_eq!(data.get_untracked(), Some(42));
        assert_eq!(error.get_untracked(), None);

        show_result(Err(ApiError::Network("offline".into())), set_data, set_error);
        assert_eq!(data.get_untracked(), None);
        assert_eq!(error.get_untracked().as_deref(), Some("Request failed: offline"));

        show_result(Ok(7), set_data, set_error);
        assert_eq!(data.get_untracked(), Some(7));
        assert_eq!(error.get_untracked(), None);
    }

    #[test]
    fn test_status_error_uses_server_message() {
        assert_eq!(
            status_error(404, r#"{"statusCode":404,"message":"Shift slot type not found"}"#),
            ApiError::Status {
                status: 404,
                message: "Shift slot type not found".into()
            }
        );
        assert_eq!(
            status_error(400, r#"{"message":["name should not be empty","startTime must be HH:MM"]}"#)
                .to_string(),
            "HTTP 400: name should not be empty; startTime must be HH:MM"
        );
    }

    #[test]
    fn test_status_error_falls_back_to_body() {
        assert_eq!(
            status_error(502, " Bad Gateway \n").to_string(),
            "HTTP 502: Bad Gateway"
        );
        assert_eq!(status_error(401, ""), ApiError::Unauthenticated);
    }
}
