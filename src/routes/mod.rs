//! Route definitions for the widget API.

pub mod health;
pub mod widgets;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/widgets/{resource}", get(widgets::show))
        .route("/credits/{credits}/courses", get(widgets::courses_by_credits))
        .route("/dashboard", get(widgets::dashboard));

    Router::new()
        .route("/health/live", get(health::live))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
