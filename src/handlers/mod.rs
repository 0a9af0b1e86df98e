use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::utils::response::message;

pub mod events;

#[derive(Serialize)]
struct HealthPayload {
    message: &'static str,
    service: &'static str,
    status: u16,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        message: "ok",
        service: "evento-api",
        status: StatusCode::OK.as_u16(),
    };

    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn route_not_found() -> Response {
    message("route not found", StatusCode::NOT_FOUND)
}

pub async fn method_not_allowed() -> Response {
    message("method not allowed", StatusCode::METHOD_NOT_ALLOWED)
}
