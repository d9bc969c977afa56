use fayth_core::error::CoreError;
use fayth_core::models::questionnaire::{
    AsrsPart, AsrsRiskLevel, ContextResponses, Domain, PresentationType, Responses, RiskLevel,
    Severity,
};
use fayth_core::models::user::{Gender, UserData};
use fayth_instruments::error::InstrumentError;
use fayth_instruments::questionnaire::asrs::{self, calculate_asrs_scores, score_asrs};
use fayth_instruments::questionnaire::context;
use fayth_instruments::questionnaire::dsm5::{
    self, calculate_domain_score, determine_presentation_type, evaluate_dsm5_criteria, score_dsm5,
};

fn responses(items: &[(&str, u8)]) -> Responses {
    items.iter().map(|(id, v)| (id.to_string(), *v)).collect()
}

fn inattention(n: usize, value: u8) -> Responses {
    (1..=n).map(|i| (format!("dsm5_a{i}"), value)).collect()
}

fn full_context() -> ContextResponses {
    [
        (context::SETTINGS, "yes"),
        (context::AGE_12, "yes"),
        (context::IMPACT, "moderate"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn user(gender: Option<Gender>) -> UserData {
    UserData {
        name: "Sam".to_string(),
        gender,
        ..UserData::default()
    }
}

#[test]
fn dsm5_bank_has_thirty_items_split_by_domain() {
    let questions = dsm5::questions();
    assert_eq!(questions.len(), 30);
    assert_eq!(questions[0].id, "dsm5_a1");
    assert_eq!(questions[14].id, "dsm5_a15");
    assert_eq!(questions[15].id, "dsm5_b1");
    assert_eq!(questions[15].question_number, 16);
    assert!(questions[..15].iter().all(|q| q.domain == Domain::A));
    assert!(questions[15..].iter().all(|q| q.domain == Domain::B));
}

#[test]
fn five_clinical_items_meet_domain_criteria() {
    let score = calculate_domain_score(&inattention(5, 3), Domain::A);
    assert_eq!(score.clinical_count, 5);
    assert_eq!(score.total_score, 15);
    assert_eq!(score.max_score, 60);
    assert_eq!(score.percentage, 25);
    assert_eq!(score.severity, Severity::Mild);
    assert!(score.meets_criteria);
}

#[test]
fn four_clinical_items_do_not_meet_domain_criteria() {
    let score = calculate_domain_score(&inattention(4, 4), Domain::A);
    assert_eq!(score.clinical_count, 4);
    assert!(!score.meets_criteria);

    // Rated "Sometimes" everywhere: high total, no clinical items.
    let score = calculate_domain_score(&inattention(15, 2), Domain::A);
    assert_eq!(score.clinical_count, 0);
    assert_eq!(score.percentage, 50);
    assert_eq!(score.severity, Severity::Moderate);
    assert!(!score.meets_criteria);
}

#[test]
fn missing_responses_count_as_zero() {
    let score = calculate_domain_score(&Responses::new(), Domain::B);
    assert_eq!(score.total_score, 0);
    assert_eq!(score.percentage, 0);
    assert_eq!(score.severity, Severity::Low);
}

#[test]
fn presentation_follows_domain_criteria() {
    let mut both = inattention(5, 3);
    both.extend((1..=5).map(|i| (format!("dsm5_b{i}"), 4)));

    let cases = [
        (Responses::new(), PresentationType::Subthreshold),
        (inattention(5, 3), PresentationType::Inattentive),
        (responses(&[("dsm5_b1", 3), ("dsm5_b2", 3), ("dsm5_b3", 3), ("dsm5_b4", 3), ("dsm5_b5", 3)]), PresentationType::Hyperactive),
        (both, PresentationType::Combined),
    ];
    for (responses, expected) in cases {
        let a = calculate_domain_score(&responses, Domain::A);
        let b = calculate_domain_score(&responses, Domain::B);
        assert_eq!(determine_presentation_type(&a, &b).kind, expected);
    }
}

#[test]
fn moderate_impact_counts_as_significant() {
    let a = calculate_domain_score(&inattention(5, 3), Domain::A);
    let b = calculate_domain_score(&Responses::new(), Domain::B);

    let criteria = evaluate_dsm5_criteria(&a, &b, &full_context());
    assert!(criteria.meets_symptom_threshold);
    assert!(criteria.significant_impact);
    assert_eq!(criteria.met_count(), 4);

    let mut minimal = full_context();
    minimal.insert(context::IMPACT.to_string(), "minimal".to_string());
    minimal.insert(context::SETTINGS.to_string(), "unsure".to_string());
    let criteria = evaluate_dsm5_criteria(&a, &b, &minimal);
    assert!(!criteria.significant_impact);
    assert!(!criteria.multiple_settings);
    assert_eq!(criteria.met_count(), 2);
}

#[test]
fn score_dsm5_rejects_out_of_range_likert() {
    let err = score_dsm5(
        user(None),
        responses(&[("dsm5_a1", 5)]),
        ContextResponses::new(),
        Responses::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::Core(CoreError::LikertOutOfRange { value: 5, .. })
    ));
}

#[test]
fn score_dsm5_full_criteria_for_female_with_masking() {
    let result = score_dsm5(
        user(Some(Gender::Female)),
        inattention(15, 4),
        full_context(),
        responses(&[("female_f6", 3)]),
    )
    .unwrap();

    assert_eq!(result.presentation_type.kind, PresentationType::Inattentive);
    assert_eq!(result.domain_a.severity, Severity::High);

    let interpretation = &result.interpretation;
    assert_eq!(interpretation.risk_level, RiskLevel::Elevated);
    assert_eq!(interpretation.criteria_met_count, 4);
    assert_eq!(interpretation.gender_insights.len(), 3);
    assert!(interpretation.gender_insights[2].contains("masking"));
    assert!(interpretation.clinical_note.contains("context criteria consistent with DSM-5"));
    assert_eq!(interpretation.recommendations.len(), 5);
}

#[test]
fn score_dsm5_lists_missing_context_criteria() {
    let result = score_dsm5(
        user(Some(Gender::Male)),
        inattention(6, 3),
        ContextResponses::new(),
        Responses::new(),
    )
    .unwrap();

    let note = &result.interpretation.clinical_note;
    assert!(note.contains("symptoms in multiple settings"));
    assert!(note.contains("symptom onset before age 12"));
    assert!(note.contains("significant functional impairment"));
    // Domain B is low, so no male insight.
    assert!(result.interpretation.gender_insights.is_empty());
}

#[test]
fn subthreshold_dsm5_gets_low_risk_guidance() {
    let result = score_dsm5(
        user(Some(Gender::NonBinary)),
        inattention(4, 4),
        full_context(),
        Responses::new(),
    )
    .unwrap();

    assert_eq!(result.interpretation.risk_level, RiskLevel::Low);
    assert_eq!(
        result.interpretation.presentation_type,
        PresentationType::Subthreshold
    );
    assert_eq!(result.interpretation.recommendations.len(), 4);
    assert_eq!(result.interpretation.criteria_met_count, 3);
}

#[test]
fn asrs_bank_layout() {
    let questions = asrs::questions();
    assert_eq!(questions.len(), 18);
    assert_eq!(questions.iter().filter(|q| q.part == AsrsPart::A).count(), 6);
    assert_eq!(questions[0].shaded_threshold, vec![2, 3, 4]);
    assert_eq!(questions[3].shaded_threshold, vec![3, 4]);
    assert_eq!(questions[17].shaded_threshold, vec![2, 3, 4]);
}

#[test]
fn asrs_part_a_gate_is_four_shaded_items() {
    // Items 1-3 shade at "Sometimes"; item 4 needs "Often".
    let mut r = responses(&[("asrs_1", 2), ("asrs_2", 2), ("asrs_3", 2), ("asrs_4", 2)]);
    let scores = calculate_asrs_scores(&r, asrs::questions());
    assert_eq!(scores.part_a_shaded_count, 3);
    assert!(!scores.part_a_high_risk);
    assert!(!scores.inattention.meets_criteria);

    r.insert("asrs_4".to_string(), 3);
    let scores = calculate_asrs_scores(&r, asrs::questions());
    assert_eq!(scores.part_a_shaded_count, 4);
    assert!(scores.part_a_high_risk);
    assert!(scores.inattention.meets_criteria);
    // Tied to Part A even with no hyperactivity items answered.
    assert!(scores.hyperactivity.meets_criteria);
    assert_eq!(scores.hyperactivity.clinical_count, 0);
}

#[test]
fn asrs_domains_partition_all_items() {
    let all: Responses = (1..=18).map(|i| (format!("asrs_{i}"), 4)).collect();
    let scores = calculate_asrs_scores(&all, asrs::questions());
    assert_eq!(scores.inattention.total_questions, 9);
    assert_eq!(scores.hyperactivity.total_questions, 9);
    assert_eq!(scores.inattention.clinical_count, 9);
    assert_eq!(scores.inattention.percentage, 100);
    assert_eq!(scores.part_a_shaded_count, 6);
}

#[test]
fn asrs_empty_question_list_is_safe() {
    let scores = calculate_asrs_scores(&Responses::new(), &[]);
    assert_eq!(scores.part_a_shaded_count, 0);
    assert_eq!(scores.inattention.percentage, 0);
    assert_eq!(scores.inattention.max_score, 0);
}

#[test]
fn score_asrs_high_risk() {
    let r: Responses = (1..=6).map(|i| (format!("asrs_{i}"), 3)).collect();
    let result = score_asrs(
        user(Some(Gender::Male)),
        r,
        full_context(),
        responses(&[("female_f6", 4)]),
    )
    .unwrap();

    assert_eq!(result.presentation_type.kind, AsrsRiskLevel::HighRisk);
    assert_eq!(result.presentation_type.label, "Part A: High risk");
    assert!(result.part_a_high_risk);
    assert!(result.dsm5_criteria.meets_symptom_threshold);
    assert_eq!(result.interpretation.presentation_type, PresentationType::Combined);
    assert_eq!(result.interpretation.criteria_met_count, 1);
    // The masking insight is not gated on gender for ASRS.
    assert!(result.interpretation.gender_insights.iter().any(|s| s.contains("masking")));
}

#[test]
fn score_asrs_low_risk() {
    let result = score_asrs(
        user(None),
        Responses::new(),
        ContextResponses::new(),
        Responses::new(),
    )
    .unwrap();

    assert_eq!(result.presentation_type.kind, AsrsRiskLevel::LowRisk);
    assert_eq!(result.interpretation.risk_level, RiskLevel::Low);
    assert_eq!(result.interpretation.criteria_met_count, 0);
    assert!(result.interpretation.gender_insights.is_empty());
}
