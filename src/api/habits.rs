//! Habit Commands
//!
//! Bindings for the habit list, daily registration, edits, removal and bulk creation.

use reqwest::Method;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::{ensure_success, http_error, is_success, parse_envelope, send_empty, send_json, Envelope};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{Habit, Outcome};
use crate::suggestion_flow::BulkHabits;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct RegistrationArgs<'a> {
    estado: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    comentario: Option<&'a str>,
}

#[derive(Serialize)]
struct EditHabitArgs<'a> {
    titulo: &'a str,
}

/// The list endpoint may answer with an envelope or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum HabitList {
    Wrapped(Envelope<Vec<Habit>>),
    Bare(Vec<Habit>),
}

fn habit_url(config: &AppConfig, id: &str, suffix: &str) -> String {
    let id = percent_encoding::utf8_percent_encode(id, percent_encoding::NON_ALPHANUMERIC);
    config.endpoint(&format!("habits/{}{}", id, suffix))
}

// ========================
// Commands
// ========================

pub async fn list_habits(config: &AppConfig) -> Result<Vec<Habit>, ApiError> {
    let (status, body) = send_empty(Method::GET, &config.endpoint("habits")).await?;
    habits_from_response(status, &body)
}

pub(crate) fn habits_from_response(status: u16, body: &str) -> Result<Vec<Habit>, ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body, "Error al cargar hábitos"));
    }
    let list: HabitList = serde_json::from_str(body).map_err(|e| {
        log::warn!("Lista de hábitos no válida: {}", e);
        ApiError::InvalidResponse("Respuesta inválida del servidor".into())
    })?;
    match list {
        HabitList::Bare(habits) => Ok(habits),
        HabitList::Wrapped(env) if env.success != Some(false) => Ok(env.data.unwrap_or_default()),
        HabitList::Wrapped(env) => Err(ApiError::InvalidResponse(
            env.message.unwrap_or_else(|| "Error al cargar hábitos".into()),
        )),
    }
}

/// Record today's outcome for a habit
pub async fn register_outcome(
    config: &AppConfig,
    id: &str,
    outcome: Outcome,
    comment: Option<&str>,
) -> Result<(), ApiError> {
    let args = RegistrationArgs {
        estado: outcome,
        comentario: comment.map(str::trim).filter(|c| !c.is_empty()),
    };
    let (status, body) = send_json(Method::POST, &habit_url(config, id, "/registros"), &args).await?;
    ensure_success(status, &body, "Error al registrar el hábito")
}

pub async fn edit_habit(config: &AppConfig, id: &str, title: &str) -> Result<(), ApiError> {
    let (status, body) =
        send_json(Method::PATCH, &habit_url(config, id, ""), &EditHabitArgs { titulo: title }).await?;
    ensure_success(status, &body, "Error al editar el hábito")
}

pub async fn delete_habit(config: &AppConfig, id: &str) -> Result<(), ApiError> {
    let (status, body) = send_empty(Method::DELETE, &habit_url(config, id, "")).await?;
    ensure_success(status, &body, "Error al eliminar el hábito")
}

/// Create every selected suggestion at once; returns the server's confirmation
pub async fn register_bulk(config: &AppConfig, habits: &BulkHabits) -> Result<String, ApiError> {
    let (status, body) = send_json(Method::POST, &config.endpoint("habits/bulk"), habits).await?;
    bulk_from_response(status, &body)
}

pub(crate) fn bulk_from_response(status: u16, body: &str) -> Result<String, ApiError> {
    let envelope: Envelope<IgnoredAny> = parse_envelope(
        status,
        body,
        "Error al registrar hábitos",
        "Error en la respuesta del servidor",
    )?;
    if !envelope.succeeded() {
        return Err(ApiError::InvalidResponse("Error en la respuesta del servidor".into()));
    }
    Ok(envelope
        .message
        .unwrap_or_else(|| "Hábitos registrados correctamente".into()))
}
