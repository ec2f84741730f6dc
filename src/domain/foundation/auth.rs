//! Authentication types shared between middleware and handlers.

use thiserror::Error;

use super::UserId;

/// A user whose bearer token has been validated.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }
}

/// Errors returned by session validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}
