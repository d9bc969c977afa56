use std::sync::LazyLock;

use fayth_core::models::questionnaire::{
    ContextResponses, Domain, DomainScore, Dsm5Criteria, Dsm5Question, Dsm5Result,
    PresentationResult, PresentationType, Responses, Severity, validate_responses,
};
use fayth_core::models::user::UserData;
use uuid::Uuid;

use super::context;
use super::interpretation::interpret_dsm5_results;
use super::{likert_totals, percentage};
use crate::error::InstrumentError;

/// Likert value at or above which an item counts as clinically significant
/// ("Often" or "Very Often").
pub const CLINICAL_THRESHOLD: u8 = 3;

/// Clinically significant items needed in a domain to meet criteria.
pub const SYMPTOM_COUNT_THRESHOLD: u32 = 5;

const INATTENTION: [(&str, &str); 15] = [
    (
        "How often do you make careless mistakes or overlook details at work, in school, or during other activities?",
        "For example, missing typos, skipping steps, or submitting work with avoidable errors.",
    ),
    (
        "How often do you have trouble keeping your attention on tasks or activities, such as long readings, lectures, or conversations?",
        "Think about whether your focus fades even when you want to keep going.",
    ),
    (
        "How often does it seem like you are not listening when someone speaks to you directly?",
        "Others may say your mind seems elsewhere even without an obvious distraction.",
    ),
    (
        "How often do you start tasks but lose focus and leave them unfinished?",
        "Chores, work assignments, or personal projects that get started and abandoned.",
    ),
    (
        "How often do you have difficulty organizing tasks and activities?",
        "Keeping materials in order, managing sequential steps, or keeping a tidy workspace.",
    ),
    (
        "How often do you avoid or put off tasks that require sustained mental effort?",
        "Reports, forms, or long documents you keep delaying.",
    ),
    (
        "How often do you lose things you need, such as keys, wallet, phone, or paperwork?",
        "Count everyday items that go missing, not one-off losses.",
    ),
    (
        "How often are you easily distracted by things around you or by unrelated thoughts?",
        "Noises, movement, notifications, or your own wandering thoughts.",
    ),
    (
        "How often are you forgetful in daily activities, such as chores, errands, returning calls, or paying bills?",
        "Routine obligations that slip your mind.",
    ),
    (
        "How often do you struggle to manage your time or meet deadlines?",
        "Running late, underestimating how long things take, or last-minute rushes.",
    ),
    (
        "How often does your mind drift while reading, so you have to re-read passages?",
        "Reaching the end of a page without knowing what it said.",
    ),
    (
        "How often do you find it hard to get started on tasks, even ones that matter to you?",
        "Knowing what needs doing but being unable to begin.",
    ),
    (
        "How often do you have trouble deciding what to do first when several things need doing?",
        "Prioritizing between competing tasks.",
    ),
    (
        "How often do you lose track of instructions that involve several steps?",
        "Forgetting what comes next partway through a procedure.",
    ),
    (
        "How often do you lose your train of thought in the middle of a task or conversation?",
        "Forgetting what you were about to say or do.",
    ),
];

const HYPERACTIVITY: [(&str, &str); 15] = [
    (
        "How often do you fidget, tap your hands or feet, or squirm in your seat?",
        "Small movements you make without noticing.",
    ),
    (
        "How often do you leave your seat in situations where you are expected to stay seated?",
        "Meetings, classes, meals, or appointments.",
    ),
    (
        "How often do you feel restless inside, even when you appear calm?",
        "An internal urge to move or do something.",
    ),
    (
        "How often do you find it difficult to do leisure activities quietly?",
        "Relaxing hobbies, reading, or watching something without getting up.",
    ),
    (
        "How often do you feel \"on the go\", as if driven by a motor?",
        "Others may find it hard to keep up with you.",
    ),
    (
        "How often do you talk excessively?",
        "People may comment that you talk a lot or dominate conversations.",
    ),
    (
        "How often do you blurt out answers before a question has been completed?",
        "Answering or commenting before others finish.",
    ),
    (
        "How often do you have difficulty waiting your turn?",
        "Queues, traffic, or conversations where you need to wait.",
    ),
    (
        "How often do you interrupt or intrude on others?",
        "Butting into conversations or taking over what others are doing.",
    ),
    (
        "How often do you make impulsive decisions or take risks without thinking them through?",
        "Sudden purchases, risky driving, or snap commitments.",
    ),
    (
        "How often do you feel impatient or frustrated when things move slowly?",
        "Slow conversations, processes, or people.",
    ),
    (
        "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
        "Feeling unable to switch off even when nothing needs doing.",
    ),
    (
        "How often do you say things without thinking and regret them later?",
        "Remarks that slip out before you consider them.",
    ),
    (
        "How often do you take on more commitments than you can realistically manage?",
        "Saying yes to things on impulse.",
    ),
    (
        "How often do you finish other people's sentences for them?",
        "Jumping in before they can finish their thought.",
    ),
];

/// The 30-item DSM-5 symptom checklist: `dsm5_a1..a15` then `dsm5_b1..b15`.
pub fn questions() -> &'static [Dsm5Question] {
    static QUESTIONS: LazyLock<Vec<Dsm5Question>> = LazyLock::new(|| {
        let mut questions = domain_items(Domain::A, "a", 0, &INATTENTION);
        questions.extend(domain_items(Domain::B, "b", 15, &HYPERACTIVITY));
        questions
    });
    &QUESTIONS
}

fn domain_items(
    domain: Domain,
    prefix: &str,
    offset: u32,
    items: &[(&str, &str)],
) -> Vec<Dsm5Question> {
    items
        .iter()
        .zip(1u32..)
        .map(|((text, help), n)| Dsm5Question {
            id: format!("dsm5_{prefix}{n}"),
            domain,
            domain_name: domain.name().to_string(),
            question_number: offset + n,
            text: text.to_string(),
            help_text: help.to_string(),
            clinical_threshold: CLINICAL_THRESHOLD,
        })
        .collect()
}

/// Score one DSM-5 domain. Missing responses count as 0.
pub fn calculate_domain_score(responses: &Responses, domain: Domain) -> DomainScore {
    let items: Vec<&Dsm5Question> = questions().iter().filter(|q| q.domain == domain).collect();

    let (total_score, max_score) = likert_totals(responses, items.iter().map(|q| q.id.as_str()));
    let clinical_count = items
        .iter()
        .filter(|q| responses.get(&q.id).copied().unwrap_or(0) >= CLINICAL_THRESHOLD)
        .count() as u32;
    let percentage = percentage(total_score, max_score);

    DomainScore {
        domain,
        domain_name: domain.name().to_string(),
        clinical_count,
        total_questions: items.len() as u32,
        total_score,
        max_score,
        percentage,
        meets_criteria: clinical_count >= SYMPTOM_COUNT_THRESHOLD,
        severity: Severity::from_percentage(percentage),
    }
}

pub fn determine_presentation_type(
    domain_a: &DomainScore,
    domain_b: &DomainScore,
) -> PresentationResult {
    let (kind, label, description) = match (domain_a.meets_criteria, domain_b.meets_criteria) {
        (true, true) => (
            PresentationType::Combined,
            "Combined Presentation",
            "5+ symptoms in both Inattention AND Hyperactivity/Impulsivity domains",
        ),
        (true, false) => (
            PresentationType::Inattentive,
            "Predominantly Inattentive",
            "5+ symptoms in Inattention domain only",
        ),
        (false, true) => (
            PresentationType::Hyperactive,
            "Predominantly Hyperactive/Impulsive",
            "5+ symptoms in Hyperactivity/Impulsivity domain only",
        ),
        (false, false) => (
            PresentationType::Subthreshold,
            "Below Clinical Threshold",
            "Fewer than 5 clinically significant symptoms in either domain",
        ),
    };

    PresentationResult {
        kind,
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Symptom threshold from the domains; the other three criteria come
/// straight from the context answers.
pub fn evaluate_dsm5_criteria(
    domain_a: &DomainScore,
    domain_b: &DomainScore,
    context_responses: &ContextResponses,
) -> Dsm5Criteria {
    context::criteria(
        domain_a.meets_criteria || domain_b.meets_criteria,
        context_responses,
    )
}

/// Run the full DSM-5 pipeline over a completed questionnaire.
pub fn score_dsm5(
    user_data: UserData,
    responses: Responses,
    context_responses: ContextResponses,
    follow_up_responses: Responses,
) -> Result<Dsm5Result, InstrumentError> {
    validate_responses(&responses)?;
    validate_responses(&follow_up_responses)?;

    let domain_a = calculate_domain_score(&responses, Domain::A);
    let domain_b = calculate_domain_score(&responses, Domain::B);
    let presentation_type = determine_presentation_type(&domain_a, &domain_b);
    let dsm5_criteria = evaluate_dsm5_criteria(&domain_a, &domain_b, &context_responses);
    let interpretation = interpret_dsm5_results(
        &domain_a,
        &domain_b,
        &presentation_type,
        &dsm5_criteria,
        user_data.gender,
        &follow_up_responses,
    );

    Ok(Dsm5Result {
        assessment_id: Uuid::new_v4(),
        user_data,
        domain_a,
        domain_b,
        presentation_type,
        dsm5_criteria,
        interpretation,
        responses,
        context_responses,
        follow_up_responses,
        completed_at: jiff::Timestamp::now(),
    })
}
