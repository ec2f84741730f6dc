//! HTTP DTOs for screening endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::screening::{CompleteScreeningResult, ScreeningStatus};
use crate::domain::foundation::Timestamp;
use crate::domain::screening::{
    BaselineRiskLevel, GatingAction, HealthProfile, ProfileAnswers, ProfileAnswersPatch,
    RiskFactor, SessionAnswers, SessionRiskLevel, SupportResource,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to complete a safety screening.
///
/// `profile` carries a full intake (required for first-time users),
/// `profile_updates` a partial one; `session_answers` fields default to
/// their no-concern values when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteScreeningRequest {
    #[serde(default)]
    pub profile: Option<ProfileAnswers>,
    #[serde(default)]
    pub profile_updates: Option<ProfileAnswersPatch>,
    #[serde(default)]
    pub session_answers: SessionAnswers,
}

/// Request to update the intake profile. All fields optional; at least
/// one must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(flatten)]
    pub updates: ProfileAnswersPatch,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Whether the caller must complete a full intake before a session.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningStatusResponse {
    pub has_profile: bool,
    pub needs_full_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_risk_level: Option<BaselineRiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_full_screening: Option<Timestamp>,
}

impl From<ScreeningStatus> for ScreeningStatusResponse {
    fn from(status: ScreeningStatus) -> Self {
        Self {
            has_profile: status.has_profile,
            needs_full_profile: status.needs_full_profile,
            profile_id: status.profile_id.map(|id| id.to_string()),
            baseline_risk_level: status.baseline_risk_level,
            last_full_screening: status.last_full_screening,
        }
    }
}

/// Outcome of a completed screening.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteScreeningResponse {
    pub screening_passed: bool,
    pub can_proceed: bool,
    pub session_risk_level: SessionRiskLevel,
    pub baseline_risk_level: BaselineRiskLevel,
    pub action_taken: GatingAction,
    pub risk_reasons: Vec<RiskFactor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
    pub resources: Vec<SupportResource>,
    pub session_screening_id: String,
    pub profile_id: String,
}

impl From<CompleteScreeningResult> for CompleteScreeningResponse {
    fn from(result: CompleteScreeningResult) -> Self {
        Self {
            screening_passed: result.screening_passed,
            can_proceed: result.can_proceed,
            session_risk_level: result.session_risk_level,
            baseline_risk_level: result.baseline_risk_level,
            action_taken: result.action_taken,
            risk_reasons: result.risk_reasons,
            warning_message: result.warning_message,
            resources: result.resources,
            session_screening_id: result.session_screening_id.to_string(),
            profile_id: result.profile_id.to_string(),
        }
    }
}

/// The caller's intake profile and its current baseline classification.
#[derive(Debug, Clone, Serialize)]
pub struct HealthProfileResponse {
    pub profile_id: String,
    pub answers: ProfileAnswers,
    pub baseline_risk_level: BaselineRiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub last_full_screening: Timestamp,
    pub needs_update: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<HealthProfile> for HealthProfileResponse {
    fn from(profile: HealthProfile) -> Self {
        Self {
            profile_id: profile.id().to_string(),
            answers: profile.answers().clone(),
            baseline_risk_level: profile.baseline_risk_level(),
            risk_factors: profile.risk_factors().to_vec(),
            last_full_screening: profile.last_full_screening(),
            needs_update: profile.needs_update(),
            created_at: profile.created_at(),
            updated_at: profile.updated_at(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found", resource_type),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
