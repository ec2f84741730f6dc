//! CheckScreeningStatus - Query handler for the pre-session status check.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, HealthProfileId, Timestamp, UserId};
use crate::domain::screening::BaselineRiskLevel;
use crate::ports::HealthProfileRepository;

/// Query for a user's screening status.
#[derive(Debug, Clone)]
pub struct CheckScreeningStatusQuery {
    pub user_id: UserId,
}

/// Whether a full profile (re-)screening is required before a session.
#[derive(Debug, Clone)]
pub struct ScreeningStatus {
    pub has_profile: bool,
    pub needs_full_profile: bool,
    pub profile_id: Option<HealthProfileId>,
    pub baseline_risk_level: Option<BaselineRiskLevel>,
    pub last_full_screening: Option<Timestamp>,
}

/// Handler for the status check.
pub struct CheckScreeningStatusHandler {
    profiles: Arc<dyn HealthProfileRepository>,
}

impl CheckScreeningStatusHandler {
    pub fn new(profiles: Arc<dyn HealthProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        query: CheckScreeningStatusQuery,
    ) -> Result<ScreeningStatus, DomainError> {
        let now = Timestamp::now();

        match self.profiles.find_by_user(&query.user_id).await? {
            Some(profile) => Ok(ScreeningStatus {
                has_profile: true,
                needs_full_profile: profile.needs_rescreen(now),
                profile_id: Some(profile.id()),
                baseline_risk_level: Some(profile.baseline_risk_level()),
                last_full_screening: Some(profile.last_full_screening()),
            }),
            None => Ok(ScreeningStatus {
                has_profile: false,
                needs_full_profile: true,
                profile_id: None,
                baseline_risk_level: None,
                last_full_screening: None,
            }),
        }
    }
}
