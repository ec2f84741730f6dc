//! Per-session safety check answers and the immutable screening record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HealthProfileId, SessionScreeningId, Timestamp, UserId};

use super::risk_factor::RiskFactor;
use super::risk_level::{GatingAction, SessionRiskLevel};
use super::session_risk::SessionAssessment;

/// How the user reports feeling right before the session.
///
/// Only `overwhelmed` and `angry` contribute to session scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelingState {
    Calm,
    Hopeful,
    Anxious,
    Overwhelmed,
    Angry,
}

impl Default for FeelingState {
    fn default() -> Self {
        Self::Calm
    }
}

/// Same-day situational answers collected before each mediation attempt.
///
/// Defaults are the no-concern values, so absent answers can only lower
/// the computed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionAnswers {
    pub feeling_state: FeelingState,
    pub feels_safe_today: bool,
    pub under_substance_influence: bool,
    pub influence_detail: Option<String>,
    pub recent_crisis: bool,
    pub crisis_detail: Option<String>,
    pub recent_aggression: bool,
    pub aggression_detail: Option<String>,
    pub concern_about_other_party: bool,
    pub concern_detail: Option<String>,
    pub willing_to_proceed: bool,
}

impl Default for SessionAnswers {
    fn default() -> Self {
        Self {
            feeling_state: FeelingState::Calm,
            feels_safe_today: true,
            under_substance_influence: false,
            influence_detail: None,
            recent_crisis: false,
            crisis_detail: None,
            recent_aggression: false,
            aggression_detail: None,
            concern_about_other_party: false,
            concern_detail: None,
            willing_to_proceed: true,
        }
    }
}

/// One safety check, created at the start of each mediation attempt.
///
/// Immutable after creation: the risk fields are never recomputed. A new
/// record is created for each attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScreening {
    id: SessionScreeningId,
    user_id: UserId,
    /// First-time users are screened before a profile exists.
    profile_id: Option<HealthProfileId>,
    answers: SessionAnswers,
    session_risk_level: SessionRiskLevel,
    risk_reasons: Vec<RiskFactor>,
    action_taken: GatingAction,
    resources_provided: Vec<String>,
    screening_passed: bool,
    created_at: Timestamp,
}

impl SessionScreening {
    /// Records a completed session classification.
    pub fn new(
        user_id: UserId,
        profile_id: Option<HealthProfileId>,
        answers: SessionAnswers,
        assessment: SessionAssessment,
        resources_provided: Vec<String>,
        now: Timestamp,
    ) -> Self {
        let screening_passed = assessment.action.passes();
        Self {
            id: SessionScreeningId::new(),
            user_id,
            profile_id,
            answers,
            session_risk_level: assessment.risk_level,
            risk_reasons: assessment.risk_reasons,
            action_taken: assessment.action,
            resources_provided,
            screening_passed,
            created_at: now,
        }
    }

    pub fn id(&self) -> SessionScreeningId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn profile_id(&self) -> Option<HealthProfileId> {
        self.profile_id
    }

    pub fn answers(&self) -> &SessionAnswers {
        &self.answers
    }

    pub fn session_risk_level(&self) -> SessionRiskLevel {
        self.session_risk_level
    }

    pub fn risk_reasons(&self) -> &[RiskFactor] {
        &self.risk_reasons
    }

    pub fn action_taken(&self) -> GatingAction {
        self.action_taken
    }

    pub fn resources_provided(&self) -> &[String] {
        &self.resources_provided
    }

    pub fn screening_passed(&self) -> bool {
        self.screening_passed
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::risk_level::BaselineRiskLevel;
    use crate::domain::screening::session_risk::classify_session;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn test_now() -> Timestamp {
        Timestamp::from_unix_secs(1705276800)
    }

    #[test]
    fn screening_passed_mirrors_action() {
        let blocked_answers = SessionAnswers {
            under_substance_influence: true,
            recent_crisis: true,
            feels_safe_today: false,
            ..Default::default()
        };
        let assessment = classify_session(&blocked_answers, BaselineRiskLevel::Low, &[]);
        assert_eq!(assessment.action, GatingAction::Blocked);

        let screening = SessionScreening::new(
            test_user_id(),
            None,
            blocked_answers,
            assessment,
            vec![],
            test_now(),
        );
        assert!(!screening.screening_passed());

        let clean = classify_session(&SessionAnswers::default(), BaselineRiskLevel::Low, &[]);
        let screening = SessionScreening::new(
            test_user_id(),
            None,
            SessionAnswers::default(),
            clean,
            vec![],
            test_now(),
        );
        assert!(screening.screening_passed());
        assert_eq!(screening.action_taken(), GatingAction::Approved);
    }

    #[test]
    fn first_time_user_has_no_profile_reference() {
        let assessment = classify_session(&SessionAnswers::default(), BaselineRiskLevel::Low, &[]);
        let screening = SessionScreening::new(
            test_user_id(),
            None,
            SessionAnswers::default(),
            assessment,
            vec![],
            test_now(),
        );
        assert!(screening.profile_id().is_none());
    }

    #[test]
    fn screening_round_trips_through_json() {
        let assessment = classify_session(&SessionAnswers::default(), BaselineRiskLevel::Low, &[]);
        let screening = SessionScreening::new(
            test_user_id(),
            Some(HealthProfileId::new()),
            SessionAnswers::default(),
            assessment,
            vec!["988 Suicide & Crisis Lifeline".to_string()],
            test_now(),
        );
        let json = serde_json::to_string(&screening).unwrap();
        let restored: SessionScreening = serde_json::from_str(&json).unwrap();
        assert_eq!(screening, restored);
    }
}
