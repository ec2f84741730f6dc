//! Session risk classification: baseline output plus same-day answers.
//!
//! The baseline level is re-injected as a flat score seed (not re-summed
//! from baseline factor points), and every session rule is evaluated
//! independently on top of it. Banding then picks the risk level and the
//! gating action together, highest threshold first.

use super::risk_factor::RiskFactor;
use super::risk_level::{BaselineRiskLevel, GatingAction, SessionRiskLevel};
use super::session_screening::{FeelingState, SessionAnswers};

/// Score at or above which the session is critical and blocked.
const CRITICAL_THRESHOLD: u32 = 10;
/// Score at or above which resources are provided.
const HIGH_THRESHOLD: u32 = 6;
/// Score at or above which a warning is shown.
const MEDIUM_THRESHOLD: u32 = 3;

/// One session scoring rule: if `applies`, add `points` and record `factor`.
struct SessionRule {
    factor: RiskFactor,
    points: u32,
    applies: fn(&SessionAnswers) -> bool,
}

/// Evaluated in order; all rules are independent and may fire together.
/// The two feeling rules split the interpolated `feeling_<state>` tag and
/// are mutually exclusive through the enum.
static SESSION_RULES: &[SessionRule] = &[
    SessionRule {
        factor: RiskFactor::CurrentlyUnderInfluence,
        points: 5,
        applies: |a| a.under_substance_influence,
    },
    SessionRule {
        factor: RiskFactor::RecentCrisis48h,
        points: 4,
        applies: |a| a.recent_crisis,
    },
    SessionRule {
        factor: RiskFactor::RecentAggression7d,
        points: 3,
        applies: |a| a.recent_aggression,
    },
    SessionRule {
        factor: RiskFactor::DoesntFeelSafeToday,
        points: 3,
        applies: |a| !a.feels_safe_today,
    },
    SessionRule {
        factor: RiskFactor::ConcernsAboutOtherPerson,
        points: 2,
        applies: |a| a.concern_about_other_party,
    },
    SessionRule {
        factor: RiskFactor::FeelingOverwhelmed,
        points: 1,
        applies: |a| a.feeling_state == FeelingState::Overwhelmed,
    },
    SessionRule {
        factor: RiskFactor::FeelingAngry,
        points: 1,
        applies: |a| a.feeling_state == FeelingState::Angry,
    },
    SessionRule {
        factor: RiskFactor::NotWillingToProceed,
        points: 2,
        applies: |a| !a.willing_to_proceed,
    },
];

/// Output of a session classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAssessment {
    pub score: u32,
    pub risk_level: SessionRiskLevel,
    /// Baseline factors first, then session factors in rule order.
    pub risk_reasons: Vec<RiskFactor>,
    pub action: GatingAction,
}

impl SessionAssessment {
    /// A screening passes unless the session was blocked.
    pub fn screening_passed(&self) -> bool {
        self.action.passes()
    }
}

/// Classifies a session. Pure and total.
///
/// An absent profile contributes a `low` baseline with no factors, so a
/// first-time user is scored on session answers alone.
pub fn classify_session(
    answers: &SessionAnswers,
    baseline_risk_level: BaselineRiskLevel,
    baseline_factors: &[RiskFactor],
) -> SessionAssessment {
    let mut score = baseline_risk_level.seed_score();
    let mut risk_reasons = baseline_factors.to_vec();

    for rule in SESSION_RULES {
        if (rule.applies)(answers) {
            score += rule.points;
            risk_reasons.push(rule.factor);
        }
    }

    let (risk_level, action) = if score >= CRITICAL_THRESHOLD {
        (SessionRiskLevel::Critical, GatingAction::Blocked)
    } else if score >= HIGH_THRESHOLD {
        (SessionRiskLevel::High, GatingAction::ResourcesProvided)
    } else if score >= MEDIUM_THRESHOLD {
        (SessionRiskLevel::Medium, GatingAction::WarnedAndApproved)
    } else {
        (SessionRiskLevel::Low, GatingAction::Approved)
    };

    SessionAssessment {
        score,
        risk_level,
        risk_reasons,
        action,
    }
}
