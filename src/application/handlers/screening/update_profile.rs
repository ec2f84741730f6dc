//! UpdateHealthProfile - Command handler for partial profile updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::screening::{HealthProfile, ProfileAnswersPatch};
use crate::ports::HealthProfileRepository;

/// Command to apply a partial update to a user's intake answers.
#[derive(Debug, Clone)]
pub struct UpdateHealthProfileCommand {
    pub user_id: UserId,
    pub updates: ProfileAnswersPatch,
}

/// Handler for profile updates. Every applied patch re-runs the
/// baseline classifier before persisting.
pub struct UpdateHealthProfileHandler {
    profiles: Arc<dyn HealthProfileRepository>,
}

impl UpdateHealthProfileHandler {
    pub fn new(profiles: Arc<dyn HealthProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        cmd: UpdateHealthProfileCommand,
    ) -> Result<HealthProfile, DomainError> {
        if cmd.updates.is_empty() {
            return Err(DomainError::validation(
                "updates",
                "No profile fields provided to update",
            ));
        }

        let mut profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    "No health profile exists for this user",
                )
            })?;

        let previous_level = profile.baseline_risk_level();
        profile.apply_patch(&cmd.updates, Timestamp::now());
        self.profiles.update(&profile).await?;

        if profile.baseline_risk_level() != previous_level {
            tracing::info!(
                user_id = %cmd.user_id,
                from = %previous_level,
                to = %profile.baseline_risk_level(),
                "baseline risk level changed after profile update"
            );
        }

        Ok(profile)
    }
}
