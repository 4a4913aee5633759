//! Subscription Commands

use reqwest::Method;

use super::{parse_envelope, send_empty, Envelope};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Subscription;

/// Current plan; `None` when the user has no subscription
pub async fn current_subscription(config: &AppConfig) -> Result<Option<Subscription>, ApiError> {
    let (status, body) = send_empty(Method::GET, &config.endpoint("suscripciones/actual")).await?;
    let envelope: Envelope<Subscription> = parse_envelope(
        status,
        &body,
        "Error al cargar la suscripción",
        "Respuesta inválida del servidor",
    )?;
    Ok(envelope.data)
}
