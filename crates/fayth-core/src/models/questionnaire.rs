use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::user::UserData;
use crate::error::CoreError;

/// Likert responses keyed by item id (`dsm5_a1`, `asrs_7`, ...). Values 0–4.
pub type Responses = HashMap<String, u8>;

/// Context answers keyed by question id, values are option strings.
pub type ContextResponses = HashMap<String, String>;

pub const LIKERT_MAX: u8 = 4;

pub const LIKERT_LABELS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very Often"];

/// Reject any response outside the 0–4 Likert scale.
pub fn validate_responses(responses: &Responses) -> Result<(), CoreError> {
    match responses.iter().find(|(_, value)| **value > LIKERT_MAX) {
        Some((item_id, value)) => Err(CoreError::LikertOutOfRange {
            item_id: item_id.clone(),
            value: *value,
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Domain {
    /// Inattention.
    A,
    /// Hyperactivity / impulsivity.
    B,
}

impl Domain {
    pub fn name(self) -> &'static str {
        match self {
            Domain::A => "Inattention",
            Domain::B => "Hyperactivity/Impulsivity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    High,
    Moderate,
    Mild,
    Low,
}

impl Severity {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            75.. => Severity::High,
            50.. => Severity::Moderate,
            25.. => Severity::Mild,
            _ => Severity::Low,
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, Severity::High | Severity::Moderate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PresentationType {
    Combined,
    Inattentive,
    Hyperactive,
    Subthreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AsrsRiskLevel {
    HighRisk,
    LowRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Elevated,
    Low,
}

// ── Question banks ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dsm5Question {
    pub id: String,
    pub domain: Domain,
    pub domain_name: String,
    pub question_number: u32,
    pub text: String,
    pub help_text: String,
    pub clinical_threshold: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AsrsPart {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AsrsDomain {
    Inattention,
    Hyperactivity,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AsrsQuestion {
    pub id: String,
    pub question_number: u32,
    pub part: AsrsPart,
    pub domain: AsrsDomain,
    pub text: String,
    /// Likert values that fall in this item's shaded box.
    pub shaded_threshold: Vec<u8>,
}

impl AsrsQuestion {
    /// Missing responses are never shaded.
    pub fn is_shaded(&self, response: Option<u8>) -> bool {
        response.is_some_and(|value| self.shaded_threshold.contains(&value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContextOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContextQuestion {
    pub id: String,
    pub question_number: u32,
    pub text: String,
    pub help_text: String,
    pub options: Vec<ContextOption>,
    pub criteria_key: String,
}

/// A follow-up fires when any trigger item is at or above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FollowUpQuestion {
    pub id: String,
    pub trigger_questions: Vec<String>,
    pub trigger_threshold: u8,
    pub text: String,
    pub category: String,
}

// ── Results ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DomainScore {
    pub domain: Domain,
    pub domain_name: String,
    pub clinical_count: u32,
    pub total_questions: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub meets_criteria: bool,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PresentationResult {
    #[serde(rename = "type")]
    pub kind: PresentationType,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsrsPresentationResult {
    #[serde(rename = "type")]
    pub kind: AsrsRiskLevel,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dsm5Criteria {
    pub meets_symptom_threshold: bool,
    pub multiple_settings: bool,
    pub before_age12: bool,
    pub significant_impact: bool,
}

impl Dsm5Criteria {
    pub fn met_count(&self) -> u32 {
        [
            self.meets_symptom_threshold,
            self.multiple_settings,
            self.before_age12,
            self.significant_impact,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Interpretation {
    pub risk_level: RiskLevel,
    pub presentation_type: PresentationType,
    pub criteria_met_count: u32,
    pub gender_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub clinical_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AsrsScores {
    pub part_a_shaded_count: u32,
    pub part_a_high_risk: bool,
    pub inattention: DomainScore,
    pub hyperactivity: DomainScore,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dsm5Result {
    pub assessment_id: Uuid,
    pub user_data: UserData,
    pub domain_a: DomainScore,
    pub domain_b: DomainScore,
    pub presentation_type: PresentationResult,
    pub dsm5_criteria: Dsm5Criteria,
    pub interpretation: Interpretation,
    pub responses: Responses,
    pub context_responses: ContextResponses,
    pub follow_up_responses: Responses,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AsrsResult {
    pub assessment_id: Uuid,
    pub user_data: UserData,
    /// Inattention.
    pub domain_a: DomainScore,
    /// Hyperactivity.
    pub domain_b: DomainScore,
    pub presentation_type: AsrsPresentationResult,
    pub dsm5_criteria: Dsm5Criteria,
    pub interpretation: Interpretation,
    pub part_a_shaded_count: u32,
    pub part_a_high_risk: bool,
    pub responses: Responses,
    pub context_responses: ContextResponses,
    pub follow_up_responses: Responses,
    pub completed_at: jiff::Timestamp,
}

/// A completed questionnaire, tagged by instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "instrument")]
#[ts(export)]
pub enum QuestionnaireResult {
    #[serde(rename = "dsm5")]
    Dsm5(Dsm5Result),
    #[serde(rename = "asrs")]
    Asrs(AsrsResult),
}

impl QuestionnaireResult {
    pub fn instrument(&self) -> &'static str {
        match self {
            QuestionnaireResult::Dsm5(_) => "dsm5",
            QuestionnaireResult::Asrs(_) => "asrs",
        }
    }
}
