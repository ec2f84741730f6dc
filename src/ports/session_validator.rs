//! SessionValidator port for bearer-token validation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens into authenticated users.
///
/// Keeps the auth middleware provider-agnostic: the gateway in front of
/// this service, a mock, or a full OIDC validator all fit behind it.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token, returning the authenticated user on success.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
