//! Axum router assembly for the kiosk server

use axum::routing::get;
use axum::{Router, middleware};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;
use crate::web::{handlers, session};

/// Builds the complete router: screens, JSON endpoints, session cookie
/// middleware, and the `public/` static asset fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/destinationSetting", get(handlers::destination_setting))
        .route("/navigation", get(handlers::navigation))
        .route("/operationTime", get(handlers::operation_time))
        .route("/api/destinations/{route_id}", get(handlers::destinations))
        .route("/api/stations", get(handlers::stations))
        .fallback_service(ServeDir::new("public"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::ensure_session,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
