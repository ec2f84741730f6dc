//! GetHealthProfile - Query handler for fetching a user's intake profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::screening::HealthProfile;
use crate::ports::HealthProfileRepository;

/// Query for a user's health profile.
#[derive(Debug, Clone)]
pub struct GetHealthProfileQuery {
    pub user_id: UserId,
}

/// Handler for profile retrieval.
pub struct GetHealthProfileHandler {
    profiles: Arc<dyn HealthProfileRepository>,
}

impl GetHealthProfileHandler {
    pub fn new(profiles: Arc<dyn HealthProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Returns `None` when the user has never completed an intake.
    pub async fn handle(
        &self,
        query: GetHealthProfileQuery,
    ) -> Result<Option<HealthProfile>, DomainError> {
        self.profiles.find_by_user(&query.user_id).await
    }
}
