//! Error Types
//!
//! Failures surfaced by the API bindings. Display strings are shown inline to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The auth provider had no session token
    #[error("No hay token de autenticación")]
    MissingToken,

    /// Non-2xx response; message comes from the server when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Error de red: {0}")]
    Network(String),

    /// 2xx response whose payload lacked the success flag or data
    #[error("{0}")]
    InvalidResponse(String),

    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_server_message() {
        let err = ApiError::Http { status: 422, message: "Meta demasiado corta".into() };
        assert_eq!(err.to_string(), "Meta demasiado corta");
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(ApiError::MissingToken.to_string(), "No hay token de autenticación");
    }
}
