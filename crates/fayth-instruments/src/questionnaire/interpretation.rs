//! Interpretation payloads: gender insights, clinical notes and
//! recommendations. These are fixed text tables selected by presentation,
//! domain severity, gender and a single follow-up answer.

use fayth_core::models::questionnaire::{
    AsrsPresentationResult, AsrsRiskLevel, AsrsScores, DomainScore, Dsm5Criteria,
    Interpretation, PresentationResult, PresentationType, Responses, RiskLevel,
};
use fayth_core::models::user::Gender;

use super::followups::MASKING_BURNOUT;

const FEMALE_INATTENTION: [&str; 2] = [
    "Your inattention scores align with common female ADHD presentation",
    "Women often experience more internal symptoms that may not be immediately visible to others",
];

const MALE_HYPERACTIVITY: [&str; 2] = [
    "Your hyperactivity/impulsivity scores suggest an external symptom presentation",
    "This pattern is commonly seen in male ADHD presentation",
];

const MASKING_EXHAUSTION: &str =
    "You report significant exhaustion from masking symptoms - this is common in women with ADHD";

const DSM5_ELEVATED_RECOMMENDATIONS: [&str; 5] = [
    "Consult with a healthcare provider or psychiatrist for comprehensive evaluation",
    "Bring these screening results to your appointment",
    "Consider keeping a symptom diary to track patterns across settings",
    "Learn about ADHD-focused organizational strategies and accommodations",
    "Explore support groups for adults with ADHD",
];

const DSM5_LOW_RECOMMENDATIONS: [&str; 4] = [
    "If symptoms are impacting your daily life, consider professional evaluation",
    "Many conditions can present with ADHD-like symptoms (anxiety, depression, sleep disorders)",
    "Focus on areas where you scored higher for targeted support strategies",
    "Practice good sleep hygiene, exercise, and stress management",
];

const ASRS_HIGH_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Consult with a healthcare provider or psychiatrist for comprehensive evaluation",
    "Bring these ASRS v1.1 screening results to your appointment",
    "Consider keeping a symptom diary to track patterns",
    "Explore ADHD-focused strategies and support groups",
];

const ASRS_LOW_RISK_RECOMMENDATIONS: [&str; 4] = [
    "If symptoms impact your life, consider professional evaluation",
    "Many conditions can present with ADHD-like symptoms (anxiety, depression, sleep disorders)",
    "Focus on areas where you scored higher for targeted strategies",
    "Practice good sleep hygiene, exercise, and stress management",
];

const DSM5_FULL_CRITERIA_NOTE: &str = "Your responses meet the symptom threshold and context criteria consistent with DSM-5 ADHD. Professional evaluation is strongly recommended.";

const DSM5_SUBTHRESHOLD_NOTE: &str = "Your responses do not meet the DSM-5 symptom threshold (5+ symptoms rated Often/Very Often in at least one domain). However, if symptoms are impacting your life, professional evaluation may still be helpful.";

const ASRS_HIGH_RISK_NOTE: &str = "Your Part A screener score (4+ items in shaded boxes) suggests possible adult ADHD. This is a screening tool only; a qualified healthcare professional can provide a full evaluation.";

const ASRS_LOW_RISK_NOTE: &str = "Your Part A score is below the high-risk threshold. If symptoms are still impacting your daily life, professional evaluation may be helpful.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reports_masking_exhaustion(follow_up_responses: &Responses) -> bool {
    follow_up_responses
        .get(MASKING_BURNOUT)
        .is_some_and(|value| *value >= 3)
}

pub fn interpret_dsm5_results(
    domain_a: &DomainScore,
    domain_b: &DomainScore,
    presentation: &PresentationResult,
    criteria: &Dsm5Criteria,
    gender: Option<Gender>,
    follow_up_responses: &Responses,
) -> Interpretation {
    let elevated = presentation.kind != PresentationType::Subthreshold;

    let mut gender_insights = Vec::new();
    match gender {
        Some(Gender::Female) => {
            if domain_a.severity.is_elevated() {
                gender_insights.extend(strings(&FEMALE_INATTENTION));
            }
            if reports_masking_exhaustion(follow_up_responses) {
                gender_insights.push(MASKING_EXHAUSTION.to_string());
            }
        }
        Some(Gender::Male) if domain_b.severity.is_elevated() => {
            gender_insights.extend(strings(&MALE_HYPERACTIVITY));
        }
        _ => {}
    }

    let clinical_note = if !elevated {
        DSM5_SUBTHRESHOLD_NOTE.to_string()
    } else if criteria.multiple_settings && criteria.before_age12 && criteria.significant_impact {
        DSM5_FULL_CRITERIA_NOTE.to_string()
    } else {
        let missing: Vec<&str> = [
            (criteria.multiple_settings, "symptoms in multiple settings"),
            (criteria.before_age12, "symptom onset before age 12"),
            (criteria.significant_impact, "significant functional impairment"),
        ]
        .into_iter()
        .filter(|(met, _)| !met)
        .map(|(_, label)| label)
        .collect();
        format!(
            "Your responses meet the symptom threshold, but some DSM-5 context criteria were not fully met: {}. Professional evaluation can clarify this.",
            missing.join(", ")
        )
    };

    Interpretation {
        risk_level: if elevated { RiskLevel::Elevated } else { RiskLevel::Low },
        presentation_type: presentation.kind,
        criteria_met_count: criteria.met_count(),
        gender_insights,
        recommendations: if elevated {
            strings(&DSM5_ELEVATED_RECOMMENDATIONS)
        } else {
            strings(&DSM5_LOW_RECOMMENDATIONS)
        },
        clinical_note,
    }
}

/// ASRS reports a high-risk screen as `combined` and everything else as
/// `subthreshold`. The masking insight is not gated on gender here.
pub fn interpret_asrs_results(
    scores: &AsrsScores,
    presentation: &AsrsPresentationResult,
    gender: Option<Gender>,
    follow_up_responses: &Responses,
) -> Interpretation {
    let high_risk = presentation.kind == AsrsRiskLevel::HighRisk;

    let mut gender_insights = Vec::new();
    if gender == Some(Gender::Female) && scores.inattention.severity.is_elevated() {
        gender_insights.extend(FEMALE_INATTENTION.iter().map(|s| format!("{s}.")));
    }
    if gender == Some(Gender::Male) && scores.hyperactivity.severity.is_elevated() {
        gender_insights.extend(MALE_HYPERACTIVITY.iter().map(|s| format!("{s}.")));
    }
    if reports_masking_exhaustion(follow_up_responses) {
        gender_insights.push(format!("{MASKING_EXHAUSTION}."));
    }

    let (clinical_note, recommendations) = if high_risk {
        (ASRS_HIGH_RISK_NOTE, strings(&ASRS_HIGH_RISK_RECOMMENDATIONS))
    } else {
        (ASRS_LOW_RISK_NOTE, strings(&ASRS_LOW_RISK_RECOMMENDATIONS))
    };

    Interpretation {
        risk_level: if high_risk { RiskLevel::Elevated } else { RiskLevel::Low },
        presentation_type: if high_risk {
            PresentationType::Combined
        } else {
            PresentationType::Subthreshold
        },
        criteria_met_count: u32::from(high_risk),
        gender_insights,
        recommendations,
        clinical_note: clinical_note.to_string(),
    }
}
