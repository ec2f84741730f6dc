//! Trusted-gateway authentication adapter.
//!
//! This service is deployed behind an identity-aware gateway that has
//! already validated the user's session. The gateway replaces the original
//! credential with an identity assertion of the form:
//!
//! ```text
//! <user_id>|<email>[|<display_name>]
//! ```
//!
//! The validator here only parses that assertion; it performs no
//! cryptographic checks. Never expose this service without the gateway in
//! front of it.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Session validator that trusts gateway-issued identity assertions.
#[derive(Debug, Clone, Default)]
pub struct TrustedGatewayValidator;

impl TrustedGatewayValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionValidator for TrustedGatewayValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut parts = token.splitn(3, '|');

        let user_id = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(AuthError::InvalidToken)?;
        let email = parts
            .next()
            .filter(|s| !s.is_empty() && s.contains('@'))
            .ok_or(AuthError::InvalidToken)?;
        let display_name = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let user_id = UserId::new(user_id).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(user_id, email, display_name))
    }
}
