use fayth_core::models::questionnaire::{AsrsResult, LIKERT_LABELS};

use super::{domain_entries, domain_group};
use crate::Instrument;
use crate::scoring::{IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, index};

/// ASRS v1.1: 18-item adult self-report scale. The six Part A items are the
/// screener; 4+ shaded Part A items is a high-risk screen.
pub struct AsrsScreener;

impl Instrument for AsrsScreener {
    fn id(&self) -> &str {
        "asrs"
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn response_scale(&self) -> Option<&'static [&'static str]> {
        Some(&LIKERT_LABELS)
    }

    fn indices(&self) -> &[IndexGroup] {
        static GROUPS: std::sync::LazyLock<Vec<IndexGroup>> = std::sync::LazyLock::new(|| {
            vec![
                IndexGroup {
                    id: "part_a".to_string(),
                    name: "Part A Screener".to_string(),
                    indices: vec![index(
                        "partAShadedCount",
                        "Shaded Part A Items",
                        ScoreType::Count,
                        ScoreRange {
                            max: Some(6.0),
                            ..ScoreRange::COUNT
                        },
                    )],
                    description: Some("4 or more is a high-risk screen".to_string()),
                },
                domain_group("inattention", "Inattention", 9, "Shaded Items"),
                domain_group("hyperactivity", "Hyperactivity/Impulsivity", 9, "Shaded Items"),
            ]
        });
        &GROUPS
    }
}

impl ScoreSheet for AsrsResult {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        let mut entries = vec![ScoreEntry::new("partAShadedCount", self.part_a_shaded_count)];
        entries.extend(domain_entries("inattention", &self.domain_a));
        entries.extend(domain_entries("hyperactivity", &self.domain_b));
        entries
    }
}
