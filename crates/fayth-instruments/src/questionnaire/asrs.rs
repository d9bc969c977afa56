use std::sync::LazyLock;

use fayth_core::models::questionnaire::{
    AsrsDomain, AsrsPart, AsrsPresentationResult, AsrsQuestion, AsrsResult, AsrsRiskLevel,
    AsrsScores, ContextResponses, Domain, DomainScore, Dsm5Criteria, Responses, Severity,
    validate_responses,
};
use fayth_core::models::user::UserData;
use uuid::Uuid;

use super::context;
use super::interpretation::interpret_asrs_results;
use super::{likert_totals, percentage};
use crate::error::InstrumentError;

/// Shaded Part A items needed for a high-risk screen.
pub const ASRS_PART_A_HIGH_RISK_THRESHOLD: u32 = 4;

/// Items shaded from "Sometimes" (2) upward; the rest shade from "Often" (3).
const SHADED_FROM_SOMETIMES: [u32; 7] = [1, 2, 3, 9, 12, 16, 18];

const ITEMS: [(AsrsDomain, &str); 18] = [
    (
        AsrsDomain::Inattention,
        "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you have problems remembering appointments or obligations?",
    ),
    (
        AsrsDomain::Inattention,
        "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you make careless mistakes when you have to work on a boring or difficult project?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
    ),
    (
        AsrsDomain::Inattention,
        "How often do you misplace or have difficulty finding things at home or at work?",
    ),
    (
        AsrsDomain::Inattention,
        "How often are you distracted by activity or noise around you?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you leave your seat in meetings or other situations in which you are expected to remain seated?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you feel restless or fidgety?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you find yourself talking too much when you are in social situations?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you have difficulty waiting your turn in situations when turn taking is required?",
    ),
    (
        AsrsDomain::Hyperactivity,
        "How often do you interrupt others when they are busy?",
    ),
];

/// The 18-item ASRS v1.1 checklist, `asrs_1..asrs_18`. Items 1-6 form the
/// Part A screener.
pub fn questions() -> &'static [AsrsQuestion] {
    static QUESTIONS: LazyLock<Vec<AsrsQuestion>> = LazyLock::new(|| {
        ITEMS
            .iter()
            .zip(1u32..)
            .map(|((domain, text), n)| AsrsQuestion {
                id: format!("asrs_{n}"),
                question_number: n,
                part: if n <= 6 { AsrsPart::A } else { AsrsPart::B },
                domain: *domain,
                text: text.to_string(),
                shaded_threshold: if SHADED_FROM_SOMETIMES.contains(&n) {
                    vec![2, 3, 4]
                } else {
                    vec![3, 4]
                },
            })
            .collect()
    });
    &QUESTIONS
}

/// Part A screen plus the two domain summaries. A domain's clinical count is
/// its number of shaded items; both domains report `meets_criteria` from the
/// Part A gate, not from their own counts.
pub fn calculate_asrs_scores(responses: &Responses, questions: &[AsrsQuestion]) -> AsrsScores {
    let shaded = |q: &&AsrsQuestion| q.is_shaded(responses.get(&q.id).copied());

    let part_a_shaded_count = questions
        .iter()
        .filter(|q| q.part == AsrsPart::A)
        .filter(shaded)
        .count() as u32;
    let part_a_high_risk = part_a_shaded_count >= ASRS_PART_A_HIGH_RISK_THRESHOLD;

    let domain_score = |asrs_domain: AsrsDomain, domain: Domain| {
        let items: Vec<&AsrsQuestion> =
            questions.iter().filter(|q| q.domain == asrs_domain).collect();
        let (total_score, max_score) =
            likert_totals(responses, items.iter().map(|q| q.id.as_str()));
        let percentage = percentage(total_score, max_score);
        DomainScore {
            domain,
            domain_name: domain.name().to_string(),
            clinical_count: items.iter().copied().filter(shaded).count() as u32,
            total_questions: items.len() as u32,
            total_score,
            max_score,
            percentage,
            meets_criteria: part_a_high_risk,
            severity: Severity::from_percentage(percentage),
        }
    };

    AsrsScores {
        part_a_shaded_count,
        part_a_high_risk,
        inattention: domain_score(AsrsDomain::Inattention, Domain::A),
        hyperactivity: domain_score(AsrsDomain::Hyperactivity, Domain::B),
    }
}

pub fn determine_asrs_presentation(part_a_high_risk: bool) -> AsrsPresentationResult {
    let (kind, label, description) = if part_a_high_risk {
        (
            AsrsRiskLevel::HighRisk,
            "Part A: High risk",
            "4+ items in the Part A screener (shaded boxes). Professional evaluation is recommended.",
        )
    } else {
        (
            AsrsRiskLevel::LowRisk,
            "Part A: Below high-risk threshold",
            "Fewer than 4 items in the Part A screener. If symptoms still impact your life, consider professional evaluation.",
        )
    };

    AsrsPresentationResult {
        kind,
        label: label.to_string(),
        description: description.to_string(),
    }
}

pub fn evaluate_asrs_criteria(
    part_a_high_risk: bool,
    context_responses: &ContextResponses,
) -> Dsm5Criteria {
    context::criteria(part_a_high_risk, context_responses)
}

/// Run the full ASRS pipeline over a completed questionnaire.
pub fn score_asrs(
    user_data: UserData,
    responses: Responses,
    context_responses: ContextResponses,
    follow_up_responses: Responses,
) -> Result<AsrsResult, InstrumentError> {
    validate_responses(&responses)?;
    validate_responses(&follow_up_responses)?;

    let scores = calculate_asrs_scores(&responses, questions());
    let presentation_type = determine_asrs_presentation(scores.part_a_high_risk);
    let dsm5_criteria = evaluate_asrs_criteria(scores.part_a_high_risk, &context_responses);
    let interpretation = interpret_asrs_results(
        &scores,
        &presentation_type,
        user_data.gender,
        &follow_up_responses,
    );

    Ok(AsrsResult {
        assessment_id: Uuid::new_v4(),
        user_data,
        domain_a: scores.inattention,
        domain_b: scores.hyperactivity,
        presentation_type,
        dsm5_criteria,
        interpretation,
        part_a_shaded_count: scores.part_a_shaded_count,
        part_a_high_risk: scores.part_a_high_risk,
        responses,
        context_responses,
        follow_up_responses,
        completed_at: jiff::Timestamp::now(),
    })
}
