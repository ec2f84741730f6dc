//! Integration tests for screening HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring for screening operations:
//! 1. Request DTOs deserialize correctly
//! 2. Response DTOs serialize correctly
//! 3. Handlers can be created and wired together against the in-memory
//!    adapters

use serde_json::json;
use std::sync::Arc;

use clear_accord::adapters::http::screening::dto::{
    CompleteScreeningRequest, CompleteScreeningResponse, ScreeningStatusResponse,
    UpdateProfileRequest,
};
use clear_accord::adapters::http::ScreeningHandlers;
use clear_accord::adapters::memory::{InMemoryProfileRepository, InMemoryScreeningRepository};
use clear_accord::application::handlers::screening::{
    CheckScreeningStatusHandler, CheckScreeningStatusQuery, CompleteScreeningCommand,
    CompleteScreeningHandler, GetHealthProfileHandler, GetHealthProfileQuery,
    UpdateHealthProfileCommand, UpdateHealthProfileHandler,
};
use clear_accord::domain::foundation::UserId;
use clear_accord::domain::screening::{
    BaselineRiskLevel, GatingAction, ProfileAnswers, ProfileAnswersPatch, SessionAnswers,
    SessionRiskLevel,
};
use clear_accord::ports::{HealthProfileRepository, ScreeningRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    check_status: CheckScreeningStatusHandler,
    complete: CompleteScreeningHandler,
    get_profile: GetHealthProfileHandler,
    update_profile: UpdateHealthProfileHandler,
    screenings: Arc<InMemoryScreeningRepository>,
}

fn test_app() -> TestApp {
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let screenings = Arc::new(InMemoryScreeningRepository::new());
    let profiles_dyn: Arc<dyn HealthProfileRepository> = profiles;
    let screenings_dyn: Arc<dyn ScreeningRepository> = screenings.clone();

    TestApp {
        check_status: CheckScreeningStatusHandler::new(profiles_dyn.clone()),
        complete: CompleteScreeningHandler::new(profiles_dyn.clone(), screenings_dyn),
        get_profile: GetHealthProfileHandler::new(profiles_dyn.clone()),
        update_profile: UpdateHealthProfileHandler::new(profiles_dyn),
        screenings,
    }
}

fn test_user_id() -> UserId {
    UserId::new("user-123").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_handler_wiring() {
    // Verify all handlers can be created and wired together
    let profiles: Arc<dyn HealthProfileRepository> = Arc::new(InMemoryProfileRepository::new());
    let screenings: Arc<dyn ScreeningRepository> = Arc::new(InMemoryScreeningRepository::new());

    let _handlers = ScreeningHandlers::new(
        Arc::new(CheckScreeningStatusHandler::new(profiles.clone())),
        Arc::new(CompleteScreeningHandler::new(
            profiles.clone(),
            screenings,
        )),
        Arc::new(GetHealthProfileHandler::new(profiles.clone())),
        Arc::new(UpdateHealthProfileHandler::new(profiles)),
    );
}

#[test]
fn test_complete_request_deserializes_full_payload() {
    let json = json!({
        "profile": {
            "has_mental_health_condition": true,
            "conditions": ["anxiety"],
            "currently_in_treatment": true,
            "treatment_frequency": "weekly",
            "has_crisis_plan": true,
            "feels_generally_safe": true
        },
        "session_answers": {
            "feeling_state": "anxious",
            "willing_to_proceed": true
        }
    });

    let req: CompleteScreeningRequest = serde_json::from_value(json).unwrap();
    let profile = req.profile.unwrap();
    assert!(profile.has_mental_health_condition);
    assert!(profile.currently_in_treatment);
    // Absent intake fields default to the no-concern values.
    assert!(!profile.substances_affect_behavior);
    assert!(req.session_answers.willing_to_proceed);
}

#[test]
fn test_update_request_deserializes_flat_patch() {
    let json = json!({
        "alcohol_use": "concerned",
        "has_safety_plan": true
    });

    let req: UpdateProfileRequest = serde_json::from_value(json).unwrap();
    assert!(!req.updates.is_empty());
    assert_eq!(req.updates.has_safety_plan, Some(true));
}

#[tokio::test]
async fn test_first_screening_flow() {
    let app = test_app();
    let user_id = test_user_id();

    // Status before any screening: full profile required.
    let status = app
        .check_status
        .handle(CheckScreeningStatusQuery {
            user_id: user_id.clone(),
        })
        .await
        .unwrap();
    assert!(!status.has_profile);
    assert!(status.needs_full_profile);

    // Complete a first screening with clean answers.
    let result = app
        .complete
        .handle(CompleteScreeningCommand {
            user_id: user_id.clone(),
            profile: Some(ProfileAnswers::default()),
            profile_updates: None,
            session_answers: SessionAnswers::default(),
        })
        .await
        .unwrap();
    assert!(result.screening_passed);
    assert_eq!(result.action_taken, GatingAction::Approved);

    // Status now reports a fresh profile.
    let status = app
        .check_status
        .handle(CheckScreeningStatusQuery {
            user_id: user_id.clone(),
        })
        .await
        .unwrap();
    assert!(status.has_profile);
    assert!(!status.needs_full_profile);
    assert_eq!(status.baseline_risk_level, Some(BaselineRiskLevel::Low));

    // The screening record was persisted.
    let records = app.screenings.list_for_user(&user_id).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), result.session_screening_id);
}

#[tokio::test]
async fn test_blocked_screening_flow() {
    let app = test_app();
    let user_id = test_user_id();

    let result = app
        .complete
        .handle(CompleteScreeningCommand {
            user_id: user_id.clone(),
            profile: Some(ProfileAnswers::default()),
            profile_updates: None,
            session_answers: SessionAnswers {
                under_substance_influence: true,
                recent_crisis: true,
                feels_safe_today: false,
                ..Default::default()
            },
        })
        .await
        .unwrap();

    // 5 + 4 + 3 = 12 on a low baseline.
    assert_eq!(result.session_risk_level, SessionRiskLevel::Critical);
    assert_eq!(result.action_taken, GatingAction::Blocked);
    assert!(!result.can_proceed);
    assert!(result.warning_message.is_some());
    assert!(result.resources.len() > 2);

    let response: CompleteScreeningResponse = result.into();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["screening_passed"], false);
    assert_eq!(json["session_risk_level"], "critical");
    assert_eq!(json["action_taken"], "blocked");
    assert_eq!(json["resources"][0]["name"], "988 Suicide & Crisis Lifeline");
}

#[tokio::test]
async fn test_profile_update_flow() {
    let app = test_app();
    let user_id = test_user_id();

    app.complete
        .handle(CompleteScreeningCommand {
            user_id: user_id.clone(),
            profile: Some(ProfileAnswers::default()),
            profile_updates: None,
            session_answers: SessionAnswers::default(),
        })
        .await
        .unwrap();

    // Patch the profile into medium baseline.
    let updated = app
        .update_profile
        .handle(UpdateHealthProfileCommand {
            user_id: user_id.clone(),
            updates: ProfileAnswersPatch {
                feels_generally_safe: Some(false),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(updated.baseline_risk_level(), BaselineRiskLevel::Medium);

    // GET reflects the rescored profile.
    let profile = app
        .get_profile
        .handle(GetHealthProfileQuery {
            user_id: user_id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.baseline_risk_level(), BaselineRiskLevel::Medium);
    assert!(!profile.answers().feels_generally_safe);
}

#[tokio::test]
async fn test_status_response_serializes() {
    let app = test_app();
    let user_id = test_user_id();

    app.complete
        .handle(CompleteScreeningCommand {
            user_id: user_id.clone(),
            profile: Some(ProfileAnswers::default()),
            profile_updates: None,
            session_answers: SessionAnswers::default(),
        })
        .await
        .unwrap();

    let status = app
        .check_status
        .handle(CheckScreeningStatusQuery { user_id })
        .await
        .unwrap();

    let response: ScreeningStatusResponse = status.into();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["has_profile"], true);
    assert_eq!(json["needs_full_profile"], false);
    assert_eq!(json["baseline_risk_level"], "low");
    assert!(json.get("profile_id").is_some());
}
