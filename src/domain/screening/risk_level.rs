//! Risk level and gating action enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk computed once per user from the standing intake profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineRiskLevel {
    Low,
    Medium,
    High,
}

impl BaselineRiskLevel {
    /// Score offset the session classifier seeds from this level.
    ///
    /// The baseline level is re-injected as a flat offset rather than
    /// re-summing the baseline factor points. Overlapping baseline and
    /// session observations are intentionally not deduplicated; the
    /// session thresholds were tuned against this behavior.
    pub fn seed_score(&self) -> u32 {
        match self {
            BaselineRiskLevel::Low => 0,
            BaselineRiskLevel::Medium => 3,
            BaselineRiskLevel::High => 6,
        }
    }
}

impl Default for BaselineRiskLevel {
    fn default() -> Self {
        Self::Low
    }
}

impl fmt::Display for BaselineRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Risk computed per mediation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for SessionRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// The outcome that gates whether a mediation session may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatingAction {
    Approved,
    WarnedAndApproved,
    ResourcesProvided,
    Blocked,
}

impl GatingAction {
    /// A screening passes unless the session was blocked.
    pub fn passes(&self) -> bool {
        *self != GatingAction::Blocked
    }
}

impl fmt::Display for GatingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Approved => "approved",
            Self::WarnedAndApproved => "warned_and_approved",
            Self::ResourcesProvided => "resources_provided",
            Self::Blocked => "blocked",
        };
        write!(f, "{}", s)
    }
}
