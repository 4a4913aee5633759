//! Auth Token Provider
//!
//! Short-lived bearer tokens come from the page's auth session (`window.Clerk.session`).

use wasm_bindgen::prelude::*;

use crate::error::ApiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "Clerk", "session"], js_name = getToken)]
    async fn get_session_token() -> Result<JsValue, JsValue>;
}

/// Fetch a fresh token. No session or an empty token is `MissingToken`.
pub async fn session_token() -> Result<String, ApiError> {
    match get_session_token().await {
        Ok(value) => value
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken),
        Err(e) => {
            log::warn!("Sesión de autenticación no disponible: {:?}", e);
            Err(ApiError::MissingToken)
        }
    }
}
