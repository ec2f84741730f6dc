//! HealthProfileRepository port for profile persistence operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HealthProfileId, UserId};
use crate::domain::screening::HealthProfile;

/// Repository for managing health/safety intake profiles.
///
/// One profile per user; profiles are never deleted while the owning user
/// exists.
#[async_trait]
pub trait HealthProfileRepository: Send + Sync {
    /// Create a new profile.
    async fn create(&self, profile: &HealthProfile) -> Result<(), DomainError>;

    /// Update an existing profile.
    async fn update(&self, profile: &HealthProfile) -> Result<(), DomainError>;

    /// Find profile by user ID.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<HealthProfile>, DomainError>;

    /// Find profile by profile ID.
    async fn find_by_id(
        &self,
        profile_id: HealthProfileId,
    ) -> Result<Option<HealthProfile>, DomainError>;
}
