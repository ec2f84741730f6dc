//! Closed vocabulary of risk factor tags.
//!
//! A tag names one contributing concern. The same vocabulary is shared by
//! baseline scoring, session scoring, resource selection, and the audit
//! trail, so tags accumulate across the pipeline without collision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contributing concern identified during screening.
///
/// Wire form is the snake_case tag string (e.g. `untreated_mental_health`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    // Baseline factors (intake profile)
    UntreatedMentalHealth,
    MentalHealthInTreatment,
    HighRiskMentalHealthCondition,
    NoCrisisSupport,
    RecentPhysicalAggression,
    OngoingVerbalAggression,
    VeryRecentAggression,
    ProblematicAlcoholUse,
    RegularAlcoholUse,
    ProblematicDrugUse,
    SubstanceAffectsBehavior,
    SafetyConcerns,
    UnsafeWithoutPlan,

    // Session factors (same-day answers)
    CurrentlyUnderInfluence,
    #[serde(rename = "recent_crisis_48h")]
    RecentCrisis48h,
    #[serde(rename = "recent_aggression_7d")]
    RecentAggression7d,
    DoesntFeelSafeToday,
    ConcernsAboutOtherPerson,
    FeelingOverwhelmed,
    FeelingAngry,
    NotWillingToProceed,
}

/// Resource category a factor maps to. Each factor belongs to exactly one
/// category, so resource selection never has to substring-match tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    MentalHealth,
    Crisis,
    Safety,
    Substance,
    General,
}

impl RiskFactor {
    /// The stable tag string used in persisted records and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UntreatedMentalHealth => "untreated_mental_health",
            Self::MentalHealthInTreatment => "mental_health_in_treatment",
            Self::HighRiskMentalHealthCondition => "high_risk_mental_health_condition",
            Self::NoCrisisSupport => "no_crisis_support",
            Self::RecentPhysicalAggression => "recent_physical_aggression",
            Self::OngoingVerbalAggression => "ongoing_verbal_aggression",
            Self::VeryRecentAggression => "very_recent_aggression",
            Self::ProblematicAlcoholUse => "problematic_alcohol_use",
            Self::RegularAlcoholUse => "regular_alcohol_use",
            Self::ProblematicDrugUse => "problematic_drug_use",
            Self::SubstanceAffectsBehavior => "substance_affects_behavior",
            Self::SafetyConcerns => "safety_concerns",
            Self::UnsafeWithoutPlan => "unsafe_without_plan",
            Self::CurrentlyUnderInfluence => "currently_under_influence",
            Self::RecentCrisis48h => "recent_crisis_48h",
            Self::RecentAggression7d => "recent_aggression_7d",
            Self::DoesntFeelSafeToday => "doesnt_feel_safe_today",
            Self::ConcernsAboutOtherPerson => "concerns_about_other_person",
            Self::FeelingOverwhelmed => "feeling_overwhelmed",
            Self::FeelingAngry => "feeling_angry",
            Self::NotWillingToProceed => "not_willing_to_proceed",
        }
    }

    /// The single resource category this factor belongs to.
    pub fn category(&self) -> ResourceCategory {
        match self {
            Self::UntreatedMentalHealth
            | Self::MentalHealthInTreatment
            | Self::HighRiskMentalHealthCondition => ResourceCategory::MentalHealth,

            Self::NoCrisisSupport | Self::RecentCrisis48h => ResourceCategory::Crisis,

            Self::RecentPhysicalAggression
            | Self::OngoingVerbalAggression
            | Self::VeryRecentAggression
            | Self::RecentAggression7d
            | Self::SafetyConcerns
            | Self::UnsafeWithoutPlan
            | Self::DoesntFeelSafeToday
            | Self::ConcernsAboutOtherPerson => ResourceCategory::Safety,

            Self::ProblematicAlcoholUse
            | Self::RegularAlcoholUse
            | Self::ProblematicDrugUse
            | Self::SubstanceAffectsBehavior
            | Self::CurrentlyUnderInfluence => ResourceCategory::Substance,

            Self::FeelingOverwhelmed | Self::FeelingAngry | Self::NotWillingToProceed => {
                ResourceCategory::General
            }
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
