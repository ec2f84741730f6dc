//! Baseline risk classification over the intake profile.
//!
//! Additive point scoring expressed as an ordered rule table, evaluated in
//! a fixed sequence so the emitted factor list is reproducible downstream.

use crate::domain::foundation::Timestamp;

use super::health_profile::{AggressionHistory, ProfileAnswers, SubstanceUseLevel};
use super::risk_factor::RiskFactor;
use super::risk_level::BaselineRiskLevel;

/// Days after an aggression incident during which it still scores as
/// "very recent".
const VERY_RECENT_AGGRESSION_DAYS: i64 = 30;

/// Score at or above which the baseline is `high`.
const HIGH_THRESHOLD: u32 = 6;
/// Score at or above which the baseline is at least `medium`.
const MEDIUM_THRESHOLD: u32 = 3;

/// One scoring rule: if `applies`, add `points` and record `factor`.
struct BaselineRule {
    factor: RiskFactor,
    points: u32,
    applies: fn(&ProfileAnswers, Timestamp) -> bool,
}

/// Evaluated in order; the emitted factor list preserves this order.
/// The treatment rules and the two alcohol rules are mutually exclusive
/// through their predicates; everything else is additive.
static BASELINE_RULES: &[BaselineRule] = &[
    // Mental health
    BaselineRule {
        factor: RiskFactor::UntreatedMentalHealth,
        points: 2,
        applies: |a, _| a.has_mental_health_condition && !a.currently_in_treatment,
    },
    BaselineRule {
        factor: RiskFactor::MentalHealthInTreatment,
        points: 1,
        applies: |a, _| a.has_mental_health_condition && a.currently_in_treatment,
    },
    BaselineRule {
        factor: RiskFactor::HighRiskMentalHealthCondition,
        points: 1,
        applies: |a, _| {
            a.has_mental_health_condition && a.conditions.iter().any(|c| c.is_high_risk())
        },
    },
    BaselineRule {
        factor: RiskFactor::NoCrisisSupport,
        points: 2,
        applies: |a, _| {
            a.has_mental_health_condition && !a.has_crisis_plan && !a.has_emergency_contact
        },
    },
    // Aggression
    BaselineRule {
        factor: RiskFactor::RecentPhysicalAggression,
        points: 3,
        applies: |a, _| {
            matches!(
                a.physical_aggression,
                AggressionHistory::Recent | AggressionHistory::Ongoing
            )
        },
    },
    BaselineRule {
        factor: RiskFactor::OngoingVerbalAggression,
        points: 1,
        applies: |a, _| a.verbal_aggression == AggressionHistory::Ongoing,
    },
    BaselineRule {
        factor: RiskFactor::VeryRecentAggression,
        points: 2,
        applies: |a, now| {
            a.last_aggression_incident
                .is_some_and(|incident| now.days_since(&incident) <= VERY_RECENT_AGGRESSION_DAYS)
        },
    },
    // Substance use
    BaselineRule {
        factor: RiskFactor::ProblematicAlcoholUse,
        points: 2,
        applies: |a, _| {
            matches!(
                a.alcohol_use,
                SubstanceUseLevel::Daily | SubstanceUseLevel::Concerned
            )
        },
    },
    BaselineRule {
        factor: RiskFactor::RegularAlcoholUse,
        points: 1,
        applies: |a, _| a.alcohol_use == SubstanceUseLevel::Regular,
    },
    BaselineRule {
        factor: RiskFactor::ProblematicDrugUse,
        points: 2,
        applies: |a, _| {
            matches!(
                a.drug_use,
                SubstanceUseLevel::Regular | SubstanceUseLevel::Daily | SubstanceUseLevel::Concerned
            )
        },
    },
    BaselineRule {
        factor: RiskFactor::SubstanceAffectsBehavior,
        points: 1,
        applies: |a, _| a.substances_affect_behavior,
    },
    // Safety
    BaselineRule {
        factor: RiskFactor::SafetyConcerns,
        points: 2,
        applies: |a, _| !a.feels_generally_safe,
    },
    BaselineRule {
        factor: RiskFactor::UnsafeWithoutPlan,
        points: 1,
        applies: |a, _| !a.feels_generally_safe && !a.has_safety_plan,
    },
];

/// Output of a baseline classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineAssessment {
    pub score: u32,
    pub risk_level: BaselineRiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

/// Classifies the intake answers. Pure and total: never fails for any
/// combination of answer values.
///
/// `now` is the evaluation time, used only for the 30-day aggression
/// incident window.
pub fn classify_baseline(answers: &ProfileAnswers, now: Timestamp) -> BaselineAssessment {
    let mut score = 0;
    let mut risk_factors = Vec::new();

    for rule in BASELINE_RULES {
        if (rule.applies)(answers, now) {
            score += rule.points;
            risk_factors.push(rule.factor);
        }
    }

    let risk_level = if score >= HIGH_THRESHOLD {
        BaselineRiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        BaselineRiskLevel::Medium
    } else {
        BaselineRiskLevel::Low
    };

    BaselineAssessment {
        score,
        risk_level,
        risk_factors,
    }
}
