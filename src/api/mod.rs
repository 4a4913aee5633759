//! Habits API Bindings
//!
//! Frontend bindings to the remote HTTP API, organized by domain.
//! Every call is bearer-authenticated and returns `Result<_, ApiError>`; nothing retries.

mod auth;
mod coach;
mod habits;
mod subscription;

use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub use auth::*;
pub use coach::*;
pub use habits::*;
pub use subscription::*;

// ========================
// Response Envelope
// ========================

/// `{ success, data, message }` wrapper used by the API; missing fields read as `None`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn succeeded(&self) -> bool {
        self.success == Some(true)
    }
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Message from a JSON error body, if there is one
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<IgnoredAny>>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

pub(crate) fn http_error(status: u16, body: &str, fallback: &str) -> ApiError {
    ApiError::Http {
        status,
        message: server_message(body).unwrap_or_else(|| fallback.to_string()),
    }
}

/// Turn a raw response into an envelope. Non-2xx becomes `Http` carrying the
/// server's message or `http_fallback`; an unparseable 2xx body becomes
/// `InvalidResponse(invalid)`.
pub(crate) fn parse_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
    http_fallback: &str,
    invalid: &str,
) -> Result<Envelope<T>, ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body, http_fallback));
    }
    serde_json::from_str(body).map_err(|e| {
        log::warn!("Respuesta no válida ({}): {}", status, e);
        ApiError::InvalidResponse(invalid.to_string())
    })
}

/// For mutations whose body may be empty: any 2xx passes unless the body says `success: false`
pub(crate) fn ensure_success(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body, fallback));
    }
    match serde_json::from_str::<Envelope<IgnoredAny>>(body) {
        Ok(env) if env.success == Some(false) => Err(ApiError::InvalidResponse(
            env.message.unwrap_or_else(|| fallback.to_string()),
        )),
        _ => Ok(()),
    }
}

// ========================
// Transport
// ========================

async fn dispatch(request: RequestBuilder) -> Result<(u16, String), ApiError> {
    let token = auth::session_token().await?;
    let response = request.bearer_auth(token).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    log::debug!("HTTP {}", status);
    Ok((status, body))
}

pub(crate) async fn send_json<B: Serialize>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<(u16, String), ApiError> {
    log::debug!("{} {}", method, url);
    dispatch(reqwest::Client::new().request(method, url).json(body)).await
}

pub(crate) async fn send_empty(method: Method, url: &str) -> Result<(u16, String), ApiError> {
    log::debug!("{} {}", method, url);
    dispatch(reqwest::Client::new().request(method, url)).await
}
