use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config, SecurityHeaders};
use crate::handlers::events::{
    create_event, destroy_event, list_events, show_event, update_event,
};
use crate::handlers::{health_check, method_not_allowed, route_not_found};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/events",
            get(list_events)
                .post(create_event)
                .fallback(method_not_allowed),
        )
        .route(
            "/events/:id",
            get(show_event)
                .put(update_event)
                .patch(update_event)
                .delete(destroy_event)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(state);

    SecurityHeaders::new(config.production)
        .apply(router)
        .layer(create_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
