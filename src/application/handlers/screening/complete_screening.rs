//! CompleteScreening - Command handler gating entry to a mediation session.
//!
//! Creates or updates the health profile (re-running the baseline
//! classifier), runs the session classifier and the selectors, and
//! persists the immutable screening record.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, HealthProfileId, SessionScreeningId, Timestamp, UserId,
};
use crate::domain::screening::{
    advisory_message, classify_session, select_resources, BaselineRiskLevel, GatingAction,
    HealthProfile, ProfileAnswers, ProfileAnswersPatch, RiskFactor, SessionAnswers,
    SessionRiskLevel, SessionScreening, SupportResource,
};
use crate::ports::{HealthProfileRepository, ScreeningRepository};

/// Command to complete a safety screening for one mediation attempt.
///
/// First-time users must provide full `profile` answers; returning users
/// may provide `profile_updates` or nothing.
#[derive(Debug, Clone)]
pub struct CompleteScreeningCommand {
    pub user_id: UserId,
    pub profile: Option<ProfileAnswers>,
    pub profile_updates: Option<ProfileAnswersPatch>,
    pub session_answers: SessionAnswers,
}

/// Outcome of a completed screening.
#[derive(Debug, Clone)]
pub struct CompleteScreeningResult {
    pub screening_passed: bool,
    pub session_risk_level: SessionRiskLevel,
    pub baseline_risk_level: BaselineRiskLevel,
    pub risk_reasons: Vec<RiskFactor>,
    pub action_taken: GatingAction,
    pub warning_message: Option<String>,
    pub resources: Vec<SupportResource>,
    pub can_proceed: bool,
    pub session_screening_id: SessionScreeningId,
    pub profile_id: HealthProfileId,
}

/// Handler for completing screenings.
pub struct CompleteScreeningHandler {
    profiles: Arc<dyn HealthProfileRepository>,
    screenings: Arc<dyn ScreeningRepository>,
}

impl CompleteScreeningHandler {
    pub fn new(
        profiles: Arc<dyn HealthProfileRepository>,
        screenings: Arc<dyn ScreeningRepository>,
    ) -> Self {
        Self {
            profiles,
            screenings,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteScreeningCommand,
    ) -> Result<CompleteScreeningResult, DomainError> {
        let now = Timestamp::now();

        // 1. Create or update the profile; any answer change re-scores it.
        let profile = match self.profiles.find_by_user(&cmd.user_id).await? {
            Some(mut existing) => {
                if let Some(answers) = cmd.profile {
                    existing.replace_answers(answers, now);
                    self.profiles.update(&existing).await?;
                } else if let Some(patch) = &cmd.profile_updates {
                    if !patch.is_empty() {
                        existing.apply_patch(patch, now);
                        self.profiles.update(&existing).await?;
                    }
                }
                existing
            }
            None => {
                let answers = cmd.profile.ok_or_else(|| {
                    DomainError::validation(
                        "profile",
                        "No profile data provided for a new user",
                    )
                })?;
                let profile = HealthProfile::new(cmd.user_id.clone(), answers, now);
                self.profiles.create(&profile).await?;
                profile
            }
        };

        // 2. Score the session against the stored baseline.
        let assessment = classify_session(
            &cmd.session_answers,
            profile.baseline_risk_level(),
            profile.risk_factors(),
        );

        // 3. Render the outcome.
        let resources = select_resources(&assessment.risk_reasons);
        let warning_message =
            advisory_message(assessment.risk_level).map(str::to_string);
        let resource_names: Vec<String> =
            resources.iter().map(|r| r.name.clone()).collect();

        let session_risk_level = assessment.risk_level;
        let action_taken = assessment.action;
        let risk_reasons = assessment.risk_reasons.clone();

        // 4. Persist the immutable screening record.
        let screening = SessionScreening::new(
            cmd.user_id.clone(),
            Some(profile.id()),
            cmd.session_answers,
            assessment,
            resource_names,
            now,
        );
        self.screenings.create(&screening).await?;

        let screening_passed = screening.screening_passed();
        if screening_passed {
            tracing::info!(
                user_id = %cmd.user_id,
                risk_level = %session_risk_level,
                action = %action_taken,
                "screening completed"
            );
        } else {
            tracing::warn!(
                user_id = %cmd.user_id,
                risk_level = %session_risk_level,
                "screening blocked mediation session"
            );
        }

        Ok(CompleteScreeningResult {
            screening_passed,
            session_risk_level,
            baseline_risk_level: profile.baseline_risk_level(),
            risk_reasons,
            action_taken,
            warning_message,
            resources,
            can_proceed: screening_passed,
            session_screening_id: screening.id(),
            profile_id: profile.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::{AggressionHistory, FeelingState};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileRepository {
        profiles: Mutex<Vec<HealthProfile>>,
    }

    impl MockProfileRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
            }
        }

        fn with_profile(self, profile: HealthProfile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }
    }

    #[async_trait]
    impl HealthProfileRepository for MockProfileRepository {
        async fn create(&self, profile: &HealthProfile) -> Result<(), DomainError> {
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(())
        }

        async fn update(&self, profile: &HealthProfile) -> Result<(), DomainError> {
            let mut profiles = self.profiles.lock().unwrap();
            if let Some(pos) = profiles.iter().position(|p| p.id() == profile.id()) {
                profiles[pos] = profile.clone();
            }
            Ok(())
        }

        async fn find_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<HealthProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id() == user_id)
                .cloned())
        }

        async fn find_by_id(
            &self,
            profile_id: HealthProfileId,
        ) -> Result<Option<HealthProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id() == profile_id)
                .cloned())
        }
    }

    struct MockScreeningRepository {
        screenings: Mutex<Vec<SessionScreening>>,
    }

    impl MockScreeningRepository {
        fn new() -> Self {
            Self {
                screenings: Mutex::new(Vec::new()),
            }
        }

        fn count(&self) -> usize {
            self.screenings.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ScreeningRepository for MockScreeningRepository {
        async fn create(&self, screening: &SessionScreening) -> Result<(), DomainError> {
            self.screenings.lock().unwrap().push(screening.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            screening_id: SessionScreeningId,
        ) -> Result<Option<SessionScreening>, DomainError> {
            Ok(self
                .screenings
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id() == screening_id)
                .cloned())
        }

        async fn list_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<SessionScreening>, DomainError> {
            Ok(self
                .screenings
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.user_id() == user_id)
                .cloned()
                .collect())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn handler(
        profiles: Arc<MockProfileRepository>,
        screenings: Arc<MockScreeningRepository>,
    ) -> CompleteScreeningHandler {
        CompleteScreeningHandler::new(profiles, screenings)
    }

    #[tokio::test]
    async fn new_user_without_profile_data_is_rejected() {
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings.clone());

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: None,
                profile_updates: None,
                session_answers: SessionAnswers::default(),
            })
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .message()
            .contains("No profile data provided"));
        assert_eq!(screenings.count(), 0);
    }

    #[tokio::test]
    async fn new_user_with_clean_answers_is_approved() {
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles.clone(), screenings.clone());

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: Some(ProfileAnswers::default()),
                profile_updates: None,
                session_answers: SessionAnswers::default(),
            })
            .await
            .unwrap();

        assert!(result.screening_passed);
        assert!(result.can_proceed);
        assert_eq!(result.session_risk_level, SessionRiskLevel::Low);
        assert_eq!(result.baseline_risk_level, BaselineRiskLevel::Low);
        assert_eq!(result.action_taken, GatingAction::Approved);
        assert!(result.warning_message.is_none());
        assert!(result.risk_reasons.is_empty());
        // Hotline first, directory last, nothing else for a clean screen.
        assert_eq!(result.resources.len(), 2);

        // Profile and screening were persisted.
        let stored = profiles.find_by_user(&test_user_id()).await.unwrap();
        assert!(stored.is_some());
        assert_eq!(screenings.count(), 1);
    }

    #[tokio::test]
    async fn high_baseline_with_crisis_and_influence_is_blocked() {
        // End-to-end scenario B: baseline high (score >= 6), then
        // seed 6 + crisis 4 + influence 5 = 15 -> critical, blocked.
        let baseline_answers = ProfileAnswers {
            physical_aggression: AggressionHistory::Ongoing,
            verbal_aggression: AggressionHistory::Ongoing,
            last_aggression_incident: Some(Timestamp::now().minus_days(2)),
            ..Default::default()
        };
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings.clone());

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: Some(baseline_answers),
                profile_updates: None,
                session_answers: SessionAnswers {
                    under_substance_influence: true,
                    recent_crisis: true,
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(result.baseline_risk_level, BaselineRiskLevel::High);
        assert_eq!(result.session_risk_level, SessionRiskLevel::Critical);
        assert_eq!(result.action_taken, GatingAction::Blocked);
        assert!(!result.screening_passed);
        assert!(!result.can_proceed);
        assert!(result.warning_message.is_some());

        // Baseline reasons come before session reasons.
        assert_eq!(
            result.risk_reasons,
            vec![
                RiskFactor::RecentPhysicalAggression,
                RiskFactor::OngoingVerbalAggression,
                RiskFactor::VeryRecentAggression,
                RiskFactor::CurrentlyUnderInfluence,
                RiskFactor::RecentCrisis48h,
            ]
        );
    }

    #[tokio::test]
    async fn angry_feeling_on_low_baseline_is_approved() {
        // End-to-end scenario C: seed 0 + 1 = 1 -> low, approved.
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings);

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: Some(ProfileAnswers::default()),
                profile_updates: None,
                session_answers: SessionAnswers {
                    feeling_state: FeelingState::Angry,
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(result.session_risk_level, SessionRiskLevel::Low);
        assert_eq!(result.action_taken, GatingAction::Approved);
        assert_eq!(result.risk_reasons, vec![RiskFactor::FeelingAngry]);
    }

    #[tokio::test]
    async fn returning_user_patch_rescores_baseline() {
        let profile = HealthProfile::new(
            test_user_id(),
            ProfileAnswers::default(),
            Timestamp::now().minus_days(10),
        );
        let profiles = Arc::new(MockProfileRepository::new().with_profile(profile));
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles.clone(), screenings);

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: None,
                profile_updates: Some(ProfileAnswersPatch {
                    feels_generally_safe: Some(false),
                    ..Default::default()
                }),
                session_answers: SessionAnswers::default(),
            })
            .await
            .unwrap();

        // Safety concern + no plan scores 3 -> medium baseline, which
        // seeds the session at 3 -> warned.
        assert_eq!(result.baseline_risk_level, BaselineRiskLevel::Medium);
        assert_eq!(result.action_taken, GatingAction::WarnedAndApproved);
        assert!(result.warning_message.is_some());

        let stored = profiles
            .find_by_user(&test_user_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.baseline_risk_level(), BaselineRiskLevel::Medium);
    }

    #[tokio::test]
    async fn returning_user_without_updates_uses_stored_baseline() {
        let profile = HealthProfile::new(
            test_user_id(),
            ProfileAnswers {
                feels_generally_safe: false,
                ..Default::default()
            },
            Timestamp::now().minus_days(5),
        );
        let profiles = Arc::new(MockProfileRepository::new().with_profile(profile));
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings);

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: None,
                profile_updates: None,
                session_answers: SessionAnswers::default(),
            })
            .await
            .unwrap();

        assert_eq!(result.baseline_risk_level, BaselineRiskLevel::Medium);
        assert_eq!(
            result.risk_reasons,
            vec![RiskFactor::SafetyConcerns, RiskFactor::UnsafeWithoutPlan]
        );
    }

    #[tokio::test]
    async fn resources_track_reason_categories() {
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings);

        let result = handler
            .handle(CompleteScreeningCommand {
                user_id: test_user_id(),
                profile: Some(ProfileAnswers::default()),
                profile_updates: None,
                session_answers: SessionAnswers {
                    under_substance_influence: true,
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let names: Vec<&str> = result.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"988 Suicide & Crisis Lifeline"));
        assert_eq!(
            names.last(),
            Some(&"Psychology Today Therapist Directory")
        );
        assert!(names.contains(&"SAMHSA National Helpline"));
    }

    #[tokio::test]
    async fn each_attempt_creates_a_new_screening() {
        let profiles = Arc::new(MockProfileRepository::new());
        let screenings = Arc::new(MockScreeningRepository::new());
        let handler = handler(profiles, screenings.clone());

        let cmd = CompleteScreeningCommand {
            user_id: test_user_id(),
            profile: Some(ProfileAnswers::default()),
            profile_updates: None,
            session_answers: SessionAnswers::default(),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(screenings.count(), 2);
        assert_ne!(first.session_screening_id, second.session_screening_id);
        assert_eq!(first.profile_id, second.profile_id);
    }
}
