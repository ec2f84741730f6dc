//! HTTP routes for screening endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    check_status, complete_screening, get_profile, update_profile, ScreeningHandlers,
};

/// Creates the screening router with all endpoints.
///
/// Mounted under `/api/screening` by the server.
pub fn screening_routes(handlers: ScreeningHandlers) -> Router {
    Router::new()
        .route("/status", get(check_status))
        .route("/complete", post(complete_screening))
        .route("/profile", get(get_profile))
        .route("/profile", patch(update_profile))
        .with_state(handlers)
}
