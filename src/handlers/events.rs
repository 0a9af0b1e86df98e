//! The event resource: list, create, show, update, destroy.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::{debug, field, info, instrument, Span};
use uuid::Uuid;

use crate::models::{Event, EventPayload};
use crate::state::AppState;
use crate::utils::error::{AppError, CREATE_FAILED};
use crate::utils::response;
use crate::utils::validation::validate_event;

const DELETED: &str = "event deleted successfully";

/// GET /events
#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.events.find_all().await?;
    debug!(count = events.len(), "Listed events");

    Ok(response::events(events))
}

/// POST /events
#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let input = validate_event(&read_payload(payload))?;

    let event = state
        .events
        .insert(input)
        .await
        .map_err(|e| AppError::storage(CREATE_FAILED, e))?;
    info!(id = %event.id, "Event created");

    Ok(response::event(event, StatusCode::CREATED))
}

/// GET /events/:id
#[instrument(skip_all, fields(id = field::Empty))]
pub async fn show_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let event = find_event(&state, path).await?;

    Ok(response::event(event, StatusCode::OK))
}

/// PUT|PATCH /events/:id
///
/// The lookup runs before validation, so an unknown id answers 404 even
/// when the body is also invalid.
#[instrument(skip_all, fields(id = field::Empty))]
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let existing = find_event(&state, path).await?;
    let input = validate_event(&read_payload(payload))?;

    let event = state
        .events
        .update(existing.id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(existing.id.to_string()))?;
    info!(id = %event.id, "Event updated");

    Ok(response::event(event, StatusCode::OK))
}

/// DELETE /events/:id
#[instrument(skip_all, fields(id = field::Empty))]
pub async fn destroy_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let existing = find_event(&state, path).await?;

    if !state.events.delete(existing.id).await? {
        return Err(AppError::NotFound(existing.id.to_string()));
    }
    info!(id = %existing.id, "Event deleted");

    Ok(response::message(DELETED, StatusCode::OK))
}

/// An id that does not decode, or is not a UUID, cannot name a stored event.
async fn find_event(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
) -> Result<Event, AppError> {
    let raw_id = match path {
        Ok(Path(raw_id)) => raw_id,
        Err(rejection) => return Err(AppError::NotFound(rejection.body_text())),
    };
    Span::current().record("id", raw_id.as_str());

    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return Err(AppError::NotFound(raw_id));
    };

    state
        .events
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(raw_id))
}

/// An unreadable body is validated as if every field were missing.
fn read_payload(payload: Result<Json<EventPayload>, JsonRejection>) -> EventPayload {
    match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable request body");
            EventPayload::default()
        }
    }
}
