//! Screening module - the session risk-assessment engine.
//!
//! Pure scoring functions that combine a user's standing intake profile
//! with per-session answers to decide whether a mediation session may
//! proceed, and which support resources and advisory message to show.

mod baseline;
mod health_profile;
mod messages;
mod resources;
mod risk_factor;
mod risk_level;
mod session_risk;
mod session_screening;

pub use baseline::{classify_baseline, BaselineAssessment};
pub use health_profile::{
    AggressionHistory, HealthProfile, MentalHealthCondition, ProfileAnswers, ProfileAnswersPatch,
    SubstanceUseLevel, TreatmentFrequency, RESCREEN_AFTER_DAYS,
};
pub use messages::advisory_message;
pub use resources::{select_resources, ResourceType, SupportResource};
pub use risk_factor::{ResourceCategory, RiskFactor};
pub use risk_level::{BaselineRiskLevel, GatingAction, SessionRiskLevel};
pub use session_risk::{classify_session, SessionAssessment};
pub use session_screening::{FeelingState, SessionAnswers, SessionScreening};
