use std::sync::LazyLock;

use fayth_core::models::questionnaire::{
    ContextOption, ContextQuestion, ContextResponses, Dsm5Criteria,
};

pub const SETTINGS: &str = "context_settings";
pub const AGE_12: &str = "context_age12";
pub const IMPACT: &str = "context_impact";

/// The three DSM-5 context questions asked after the symptom items.
pub fn questions() -> &'static [ContextQuestion] {
    static QUESTIONS: LazyLock<Vec<ContextQuestion>> = LazyLock::new(|| {
        vec![
            question(
                SETTINGS,
                31,
                "Did these types of difficulties occur in multiple settings, such as both at work/school AND at home or in social situations?",
                "DSM-5 requires symptoms present in 2+ settings for diagnosis",
                &[
                    ("yes", "Yes, two or more settings"),
                    ("no", "No, mainly one setting"),
                    ("unsure", "Unsure"),
                ],
                "multipleSettings",
            ),
            question(
                AGE_12,
                32,
                "Were some of these symptoms present and noticeable before age 12?",
                "DSM-5 requires several symptoms to have been present before age 12",
                &[
                    ("yes", "Yes, before age 12"),
                    ("no", "No, appeared later"),
                    ("unsure", "Unsure / can't recall"),
                ],
                "beforeAge12",
            ),
            question(
                IMPACT,
                33,
                "Do these symptoms cause significant difficulty in your daily life (work performance, relationships, managing responsibilities)?",
                "DSM-5 requires symptoms to significantly impair functioning",
                &[
                    ("significant", "Yes, significant impact"),
                    ("moderate", "Moderate impact"),
                    ("minimal", "Minimal impact"),
                ],
                "significantImpact",
            ),
        ]
    });
    &QUESTIONS
}

fn question(
    id: &str,
    question_number: u32,
    text: &str,
    help_text: &str,
    options: &[(&str, &str)],
    criteria_key: &str,
) -> ContextQuestion {
    ContextQuestion {
        id: id.to_string(),
        question_number,
        text: text.to_string(),
        help_text: help_text.to_string(),
        options: options
            .iter()
            .map(|(value, label)| ContextOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        criteria_key: criteria_key.to_string(),
    }
}

/// Combine a symptom-threshold verdict with the context answers. Moderate
/// impact counts as significant.
pub(crate) fn criteria(meets_symptom_threshold: bool, responses: &ContextResponses) -> Dsm5Criteria {
    let answer = |id: &str| responses.get(id).map(String::as_str);
    Dsm5Criteria {
        meets_symptom_threshold,
        multiple_settings: answer(SETTINGS) == Some("yes"),
        before_age12: answer(AGE_12) == Some("yes"),
        significant_impact: matches!(answer(IMPACT), Some("significant" | "moderate")),
    }
}
