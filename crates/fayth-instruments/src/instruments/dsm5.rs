use fayth_core::models::questionnaire::{Dsm5Result, LIKERT_LABELS};

use super::{domain_entries, domain_group};
use crate::Instrument;
use crate::scoring::{IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, index};

/// DSM-5 symptom checklist: 15 inattention and 15 hyperactivity/impulsivity
/// items on a 0-4 scale. A domain meets criteria at 5+ items rated 3 or 4.
pub struct Dsm5Checklist;

impl Instrument for Dsm5Checklist {
    fn id(&self) -> &str {
        "dsm5"
    }

    fn name(&self) -> &str {
        "DSM-5 ADHD Symptom Checklist"
    }

    fn response_scale(&self) -> Option<&'static [&'static str]> {
        Some(&LIKERT_LABELS)
    }

    fn indices(&self) -> &[IndexGroup] {
        static GROUPS: std::sync::LazyLock<Vec<IndexGroup>> = std::sync::LazyLock::new(|| {
            vec![
                domain_group("inattention", "Inattention", 15, "Clinically Significant Symptoms"),
                domain_group(
                    "hyperactivity",
                    "Hyperactivity/Impulsivity",
                    15,
                    "Clinically Significant Symptoms",
                ),
                IndexGroup {
                    id: "criteria".to_string(),
                    name: "DSM-5 Criteria".to_string(),
                    indices: vec![index(
                        "criteriaMetCount",
                        "Criteria Met",
                        ScoreType::Count,
                        ScoreRange {
                            max: Some(4.0),
                            ..ScoreRange::COUNT
                        },
                    )],
                    description: Some(
                        "Symptom threshold, multiple settings, onset before 12, significant impact"
                            .to_string(),
                    ),
                },
            ]
        });
        &GROUPS
    }
}

impl ScoreSheet for Dsm5Result {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        let mut entries = Vec::new();
        entries.extend(domain_entries("inattention", &self.domain_a));
        entries.extend(domain_entries("hyperactivity", &self.domain_b));
        entries.push(ScoreEntry::new(
            "criteriaMetCount",
            self.dsm5_criteria.met_count(),
        ));
        entries
    }
}
