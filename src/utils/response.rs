use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::Event;

// Every body repeats the HTTP status code in a `status` field.

#[derive(Serialize)]
pub struct EventsEnvelope {
    pub events: Vec<Event>,
    pub status: u16,
}

#[derive(Serialize)]
pub struct EventEnvelope {
    pub evento: Event,
    pub status: u16,
}

#[derive(Serialize)]
pub struct MessageEnvelope {
    pub message: String,
    pub status: u16,
}

pub fn events(events: Vec<Event>) -> Response {
    let body = EventsEnvelope {
        events,
        status: StatusCode::OK.as_u16(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn event(event: Event, status: StatusCode) -> Response {
    let body = EventEnvelope {
        evento: event,
        status: status.as_u16(),
    };
    (status, Json(body)).into_response()
}

pub fn message(message: impl Into<String>, status: StatusCode) -> Response {
    let body = MessageEnvelope {
        message: message.into(),
        status: status.as_u16(),
    };
    (status, Json(body)).into_response()
}
