//! HTTP handlers for screening endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::screening::{
    CheckScreeningStatusHandler, CheckScreeningStatusQuery, CompleteScreeningCommand,
    CompleteScreeningHandler, GetHealthProfileHandler, GetHealthProfileQuery,
    UpdateHealthProfileCommand, UpdateHealthProfileHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{
    CompleteScreeningRequest, CompleteScreeningResponse, ErrorResponse, HealthProfileResponse,
    ScreeningStatusResponse, UpdateProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScreeningHandlers {
    check_status_handler: Arc<CheckScreeningStatusHandler>,
    complete_handler: Arc<CompleteScreeningHandler>,
    get_profile_handler: Arc<GetHealthProfileHandler>,
    update_profile_handler: Arc<UpdateHealthProfileHandler>,
}

impl ScreeningHandlers {
    pub fn new(
        check_status_handler: Arc<CheckScreeningStatusHandler>,
        complete_handler: Arc<CompleteScreeningHandler>,
        get_profile_handler: Arc<GetHealthProfileHandler>,
        update_profile_handler: Arc<UpdateHealthProfileHandler>,
    ) -> Self {
        Self {
            check_status_handler,
            complete_handler,
            get_profile_handler,
            update_profile_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/screening/status - Does the caller need a full intake?
pub async fn check_status(
    State(handlers): State<ScreeningHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = CheckScreeningStatusQuery { user_id: user.id };

    match handlers.check_status_handler.handle(query).await {
        Ok(status) => {
            let response: ScreeningStatusResponse = status.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_screening_error(e),
    }
}

/// POST /api/screening/complete - Run the safety screening for a session.
pub async fn complete_screening(
    State(handlers): State<ScreeningHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CompleteScreeningRequest>,
) -> Response {
    let cmd = CompleteScreeningCommand {
        user_id: user.id,
        profile: req.profile,
        profile_updates: req.profile_updates,
        session_answers: req.session_answers,
    };

    match handlers.complete_handler.handle(cmd).await {
        Ok(result) => {
            let response: CompleteScreeningResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_screening_error(e),
    }
}

/// GET /api/screening/profile - Fetch the caller's intake profile.
pub async fn get_profile(
    State(handlers): State<ScreeningHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetHealthProfileQuery { user_id: user.id };

    match handlers.get_profile_handler.handle(query).await {
        Ok(Some(profile)) => {
            let response: HealthProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Health profile")),
        )
            .into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// PATCH /api/screening/profile - Partially update the intake profile.
pub async fn update_profile(
    State(handlers): State<ScreeningHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    let cmd = UpdateHealthProfileCommand {
        user_id: user.id,
        updates: req.updates,
    };

    match handlers.update_profile_handler.handle(cmd).await {
        Ok(profile) => {
            let response: HealthProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_screening_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_screening_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ProfileNotFound | ErrorCode::ScreeningNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Health profile")),
        )
            .into_response(),
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ErrorCode::Conflict => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.message())),
        )
            .into_response(),
        ErrorCode::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                code: "UNAUTHORIZED".to_string(),
                message: error.message().to_string(),
                details: None,
            }),
        )
            .into_response(),
        ErrorCode::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                code: "FORBIDDEN".to_string(),
                message: error.message().to_string(),
                details: None,
            }),
        )
            .into_response(),
        ErrorCode::InternalError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(error.message())),
        )
            .into_response(),
    }
}
