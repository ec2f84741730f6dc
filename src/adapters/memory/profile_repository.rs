//! In-memory health profile repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, HealthProfileId, UserId};
use crate::domain::screening::HealthProfile;
use crate::ports::HealthProfileRepository;

/// In-memory storage for health profiles, keyed by profile ID.
///
/// One profile per user; `create` rejects a second profile for the same
/// user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<HealthProfileId, HealthProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored profiles (useful for tests).
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }

    /// Returns the number of stored profiles.
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl HealthProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: &HealthProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.values().any(|p| p.user_id() == profile.user_id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "A health profile already exists for this user",
            ));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &HealthProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if !profiles.contains_key(&profile.id()) {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                "Health profile not found",
            ));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<HealthProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.user_id() == user_id).cloned())
    }

    async fn find_by_id(
        &self,
        profile_id: HealthProfileId,
    ) -> Result<Option<HealthProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&profile_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::screening::ProfileAnswers;

    fn test_profile(user: &str) -> HealthProfile {
        HealthProfile::new(
            UserId::new(user).unwrap(),
            ProfileAnswers::default(),
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn create_and_find_by_user() {
        let repo = InMemoryProfileRepository::new();
        let profile = test_profile("user-1");

        repo.create(&profile).await.unwrap();

        let found = repo
            .find_by_user(&UserId::new("user-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), profile.id());
    }

    #[tokio::test]
    async fn create_rejects_second_profile_for_same_user() {
        let repo = InMemoryProfileRepository::new();
        repo.create(&test_profile("user-1")).await.unwrap();

        let result = repo.create(&test_profile("user-1")).await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::Conflict);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_stored_profile() {
        let repo = InMemoryProfileRepository::new();
        let mut profile = test_profile("user-1");
        repo.create(&profile).await.unwrap();

        profile.mark_needs_update();
        repo.update(&profile).await.unwrap();

        let found = repo.find_by_id(profile.id()).await.unwrap().unwrap();
        assert!(found.needs_update());
    }

    #[tokio::test]
    async fn update_unknown_profile_is_not_found() {
        let repo = InMemoryProfileRepository::new();

        let result = repo.update(&test_profile("user-1")).await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryProfileRepository::new();

        assert!(repo
            .find_by_user(&UserId::new("nobody").unwrap())
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_id(HealthProfileId::new())
            .await
            .unwrap()
            .is_none());
    }
}
