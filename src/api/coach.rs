//! AI Coach Commands
//!
//! Habit suggestions generated from a free-text goal.

use reqwest::Method;
use serde::Serialize;

use super::{parse_envelope, send_json, Envelope};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Suggestions;

#[derive(Serialize)]
struct SuggestionArgs<'a> {
    input_usuario: &'a str,
}

pub async fn request_suggestions(config: &AppConfig, goal: &str) -> Result<Suggestions, ApiError> {
    let url = config.endpoint("ia-coach/sugerencias-habitos");
    let (status, body) = send_json(Method::POST, &url, &SuggestionArgs { input_usuario: goal }).await?;
    suggestions_from_response(status, &body)
}

pub(crate) fn suggestions_from_response(status: u16, body: &str) -> Result<Suggestions, ApiError> {
    let envelope: Envelope<Suggestions> = parse_envelope(
        status,
        body,
        "Error al obtener sugerencias",
        "Respuesta inválida del servidor",
    )?;
    match envelope {
        Envelope { success: Some(true), data: Some(data), .. } => Ok(data),
        _ => Err(ApiError::InvalidResponse("Respuesta inválida del servidor".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_suggestions_payload() {
        let body = r#"{ "success": true, "data": { "hacer": ["Caminar 30 min"], "dejar": ["Refrescos"] } }"#;
        let suggestions = suggestions_from_response(200, body).unwrap();
        assert_eq!(
            suggestions,
            Suggestions { to_do: vec!["Caminar 30 min".into()], to_stop: vec!["Refrescos".into()] }
        );
    }

    #[test]
    fn test_missing_success_or_data_is_invalid() {
        for body in [
            r#"{ "data": { "hacer": [], "dejar": [] } }"#,
            r#"{ "success": true }"#,
            r#"{ "success": false, "data": { "hacer": [], "dejar": [] } }"#,
        ] {
            assert_eq!(
                suggestions_from_response(200, body),
                Err(ApiError::InvalidResponse("Respuesta inválida del servidor".into()))
            );
        }
    }

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_value(SuggestionArgs { input_usuario: "bajar 10 kg" }).unwrap();
        assert_eq!(json, serde_json::json!({ "input_usuario": "bajar 10 kg" }));
    }
}
