//! Health/safety intake profile - one per user, long-lived.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HealthProfileId, Timestamp, UserId};

use super::baseline::classify_baseline;
use super::risk_factor::RiskFactor;
use super::risk_level::BaselineRiskLevel;

/// A profile older than this requires a full re-screening.
pub const RESCREEN_AFTER_DAYS: i64 = 90;

/// Disclosed mental-health condition categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentalHealthCondition {
    Anxiety,
    Depression,
    Bipolar,
    Ptsd,
    Psychosis,
    Schizophrenia,
    Other,
}

impl MentalHealthCondition {
    /// Conditions that add an extra point on top of the treatment rules.
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self,
            Self::Bipolar | Self::Ptsd | Self::Psychosis | Self::Schizophrenia
        )
    }
}

/// How often the user attends treatment, when in treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentFrequency {
    Weekly,
    Biweekly,
    Monthly,
    AsNeeded,
}

/// Aggression history, asked separately for verbal and physical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggressionHistory {
    Never,
    Past,
    Recent,
    Ongoing,
}

impl Default for AggressionHistory {
    fn default() -> Self {
        Self::Never
    }
}

/// Self-reported use level, asked separately for alcohol and drugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstanceUseLevel {
    None,
    Occasional,
    Regular,
    Daily,
    Concerned,
}

impl Default for SubstanceUseLevel {
    fn default() -> Self {
        Self::None
    }
}

/// The intake answers a baseline classification is computed from.
///
/// Defaults are the no-concern values, so an absent answer can only lower
/// the computed score, never raise it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileAnswers {
    pub has_mental_health_condition: bool,
    pub conditions: Vec<MentalHealthCondition>,
    pub currently_in_treatment: bool,
    pub treatment_frequency: Option<TreatmentFrequency>,
    pub has_crisis_plan: bool,
    pub has_emergency_contact: bool,
    pub verbal_aggression: AggressionHistory,
    pub physical_aggression: AggressionHistory,
    pub last_aggression_incident: Option<Timestamp>,
    pub alcohol_use: SubstanceUseLevel,
    pub drug_use: SubstanceUseLevel,
    pub substances_affect_behavior: bool,
    pub feels_generally_safe: bool,
    pub has_safety_plan: bool,
}

impl Default for ProfileAnswers {
    fn default() -> Self {
        Self {
            has_mental_health_condition: false,
            conditions: Vec::new(),
            currently_in_treatment: false,
            treatment_frequency: None,
            has_crisis_plan: false,
            has_emergency_contact: false,
            verbal_aggression: AggressionHistory::Never,
            physical_aggression: AggressionHistory::Never,
            last_aggression_incident: None,
            alcohol_use: SubstanceUseLevel::None,
            drug_use: SubstanceUseLevel::None,
            substances_affect_behavior: false,
            feels_generally_safe: true,
            has_safety_plan: false,
        }
    }
}

/// Partial update to intake answers. Every field optional; only provided
/// fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileAnswersPatch {
    pub has_mental_health_condition: Option<bool>,
    pub conditions: Option<Vec<MentalHealthCondition>>,
    pub currently_in_treatment: Option<bool>,
    pub treatment_frequency: Option<Option<TreatmentFrequency>>,
    pub has_crisis_plan: Option<bool>,
    pub has_emergency_contact: Option<bool>,
    pub verbal_aggression: Option<AggressionHistory>,
    pub physical_aggression: Option<AggressionHistory>,
    pub last_aggression_incident: Option<Option<Timestamp>>,
    pub alcohol_use: Option<SubstanceUseLevel>,
    pub drug_use: Option<SubstanceUseLevel>,
    pub substances_affect_behavior: Option<bool>,
    pub feels_generally_safe: Option<bool>,
    pub has_safety_plan: Option<bool>,
}

impl ProfileAnswersPatch {
    /// Applies the provided fields onto existing answers.
    pub fn apply_to(&self, answers: &mut ProfileAnswers) {
        if let Some(v) = self.has_mental_health_condition {
            answers.has_mental_health_condition = v;
        }
        if let Some(v) = &self.conditions {
            answers.conditions = v.clone();
        }
        if let Some(v) = self.currently_in_treatment {
            answers.currently_in_treatment = v;
        }
        if let Some(v) = self.treatment_frequency {
            answers.treatment_frequency = v;
        }
        if let Some(v) = self.has_crisis_plan {
            answers.has_crisis_plan = v;
        }
        if let Some(v) = self.has_emergency_contact {
            answers.has_emergency_contact = v;
        }
        if let Some(v) = self.verbal_aggression {
            answers.verbal_aggression = v;
        }
        if let Some(v) = self.physical_aggression {
            answers.physical_aggression = v;
        }
        if let Some(v) = self.last_aggression_incident {
            answers.last_aggression_incident = v;
        }
        if let Some(v) = self.alcohol_use {
            answers.alcohol_use = v;
        }
        if let Some(v) = self.drug_use {
            answers.drug_use = v;
        }
        if let Some(v) = self.substances_affect_behavior {
            answers.substances_affect_behavior = v;
        }
        if let Some(v) = self.feels_generally_safe {
            answers.feels_generally_safe = v;
        }
        if let Some(v) = self.has_safety_plan {
            answers.has_safety_plan = v;
        }
    }

    /// True if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.has_mental_health_condition.is_none()
            && self.conditions.is_none()
            && self.currently_in_treatment.is_none()
            && self.treatment_frequency.is_none()
            && self.has_crisis_plan.is_none()
            && self.has_emergency_contact.is_none()
            && self.verbal_aggression.is_none()
            && self.physical_aggression.is_none()
            && self.last_aggression_incident.is_none()
            && self.alcohol_use.is_none()
            && self.drug_use.is_none()
            && self.substances_affect_behavior.is_none()
            && self.feels_generally_safe.is_none()
            && self.has_safety_plan.is_none()
    }
}

/// A user's standing health/safety intake profile.
///
/// Invariant: `baseline_risk_level` and `risk_factors` are always the
/// output of the most recent baseline classification over `answers`.
/// All mutation paths re-run the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    id: HealthProfileId,
    user_id: UserId,
    answers: ProfileAnswers,
    baseline_risk_level: BaselineRiskLevel,
    risk_factors: Vec<RiskFactor>,
    last_full_screening: Timestamp,
    needs_update: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl HealthProfile {
    /// Creates a profile from a first full screening, scoring it immediately.
    pub fn new(user_id: UserId, answers: ProfileAnswers, now: Timestamp) -> Self {
        let assessment = classify_baseline(&answers, now);
        Self {
            id: HealthProfileId::new(),
            user_id,
            answers,
            baseline_risk_level: assessment.risk_level,
            risk_factors: assessment.risk_factors,
            last_full_screening: now,
            needs_update: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> HealthProfileId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn answers(&self) -> &ProfileAnswers {
        &self.answers
    }

    pub fn baseline_risk_level(&self) -> BaselineRiskLevel {
        self.baseline_risk_level
    }

    pub fn risk_factors(&self) -> &[RiskFactor] {
        &self.risk_factors
    }

    pub fn last_full_screening(&self) -> Timestamp {
        self.last_full_screening
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Replaces all answers with a fresh full screening and re-scores.
    pub fn replace_answers(&mut self, answers: ProfileAnswers, now: Timestamp) {
        self.answers = answers;
        self.last_full_screening = now;
        self.rescore(now);
    }

    /// Applies a partial update and re-scores.
    pub fn apply_patch(&mut self, patch: &ProfileAnswersPatch, now: Timestamp) {
        patch.apply_to(&mut self.answers);
        self.rescore(now);
    }

    /// Flags the profile so the next status check demands a re-screen.
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }

    /// Staleness policy: a re-screen is required if the profile was
    /// explicitly flagged, or the last full screening is more than
    /// [`RESCREEN_AFTER_DAYS`] days old. No other conditions.
    pub fn needs_rescreen(&self, now: Timestamp) -> bool {
        self.needs_update || now.days_since(&self.last_full_screening) > RESCREEN_AFTER_DAYS
    }

    fn rescore(&mut self, now: Timestamp) {
        let assessment = classify_baseline(&self.answers, now);
        self.baseline_risk_level = assessment.risk_level;
        self.risk_factors = assessment.risk_factors;
        self.needs_update = false;
        self.updated_at = now;
    }
}
