//! Support resource catalog and selection.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::risk_factor::{ResourceCategory, RiskFactor};

/// Kind of support resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Hotline,
    TextLine,
    Helpline,
    Directory,
}

/// One support resource surfaced alongside a screening outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportResource {
    pub resource_type: ResourceType,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_number: Option<String>,
    pub url: String,
    pub availability: String,
    pub languages: Vec<String>,
}

fn resource(
    resource_type: ResourceType,
    name: &str,
    description: &str,
    phone: Option<&str>,
    text_number: Option<&str>,
    url: &str,
    availability: &str,
    languages: &[&str],
) -> SupportResource {
    SupportResource {
        resource_type,
        name: name.to_string(),
        description: description.to_string(),
        phone: phone.map(str::to_string),
        text_number: text_number.map(str::to_string),
        url: url.to_string(),
        availability: availability.to_string(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

/// Always first: general 24/7 crisis support.
static CRISIS_HOTLINE: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::Hotline,
        "988 Suicide & Crisis Lifeline",
        "Free, confidential support for people in distress, 24/7.",
        Some("988"),
        None,
        "https://988lifeline.org",
        "24/7",
        &["en", "es"],
    )
});

static MENTAL_HEALTH_HELPLINE: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::Helpline,
        "NAMI HelpLine",
        "Information, resource referrals and support for people living with a mental health condition.",
        Some("1-800-950-6264"),
        None,
        "https://www.nami.org/help",
        "Mon-Fri 10am-10pm ET",
        &["en", "es"],
    )
});

static CRISIS_TEXT_LINE: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::TextLine,
        "Crisis Text Line",
        "Text-based crisis counseling with a trained volunteer.",
        None,
        Some("Text HOME to 741741"),
        "https://www.crisistextline.org",
        "24/7",
        &["en", "es"],
    )
});

static DOMESTIC_VIOLENCE_HOTLINE: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::Hotline,
        "National Domestic Violence Hotline",
        "Safety planning and support for anyone affected by relationship abuse.",
        Some("1-800-799-7233"),
        Some("Text START to 88788"),
        "https://www.thehotline.org",
        "24/7",
        &["en", "es"],
    )
});

static SUBSTANCE_HELPLINE: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::Helpline,
        "SAMHSA National Helpline",
        "Treatment referral and information service for substance use disorders.",
        Some("1-800-662-4357"),
        None,
        "https://www.samhsa.gov/find-help/national-helpline",
        "24/7",
        &["en", "es"],
    )
});

/// Always last: general referral directory.
static THERAPIST_DIRECTORY: Lazy<SupportResource> = Lazy::new(|| {
    resource(
        ResourceType::Directory,
        "Psychology Today Therapist Directory",
        "Searchable directory of licensed therapists, by specialty and location.",
        None,
        None,
        "https://www.psychologytoday.com/us/therapists",
        "Online",
        &["en"],
    )
});

/// Maps the reason tags of a screening to an ordered resource list.
///
/// The general crisis hotline is always first and the therapist directory
/// always last. In between, each matching category contributes at most one
/// entry; a reason belongs to exactly one category, so no deduplication is
/// needed.
pub fn select_resources(risk_reasons: &[RiskFactor]) -> Vec<SupportResource> {
    let has_category =
        |category: ResourceCategory| risk_reasons.iter().any(|r| r.category() == category);

    let mut resources = vec![CRISIS_HOTLINE.clone()];

    if has_category(ResourceCategory::MentalHealth) {
        resources.push(MENTAL_HEALTH_HELPLINE.clone());
    }
    if has_category(ResourceCategory::Crisis) {
        resources.push(CRISIS_TEXT_LINE.clone());
    }
    if has_category(ResourceCategory::Safety) {
        resources.push(DOMESTIC_VIOLENCE_HOTLINE.clone());
    }
    if has_category(ResourceCategory::Substance) {
        resources.push(SUBSTANCE_HELPLINE.clone());
    }

    resources.push(THERAPIST_DIRECTORY.clone());
    resources
}
