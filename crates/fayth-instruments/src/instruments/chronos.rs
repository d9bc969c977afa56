use fayth_core::models::scores::ChronosScores;

use crate::Instrument;
use crate::scoring::{
    IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, composite, index,
};

/// Chronos Sort: time-estimation task with a rule shift between phases.
pub struct ChronosSort;

impl Instrument for ChronosSort {
    fn id(&self) -> &str {
        "chronos"
    }

    fn name(&self) -> &str {
        "Chronos Sort"
    }

    fn indices(&self) -> &[IndexGroup] {
        static GROUPS: std::sync::LazyLock<Vec<IndexGroup>> = std::sync::LazyLock::new(|| {
            vec![
                IndexGroup {
                    id: "composites".to_string(),
                    name: "Composites".to_string(),
                    indices: vec![
                        composite("cIM", "Temporal Memory (cIM)", "100 - meanError x 100"),
                        composite("cHR", "Patience (cHR)", "100 - prematureRate x 150"),
                        composite(
                            "cIE",
                            "Adaptation (cIE)",
                            "50 + (phase 1 error - phase 2 error) x 100; 50 means no change",
                        ),
                    ],
                    description: None,
                },
                IndexGroup {
                    id: "timing".to_string(),
                    name: "Timing".to_string(),
                    indices: vec![
                        index("meanErrorPct", "Mean Relative Error", ScoreType::Percentage, ScoreRange::NON_NEGATIVE),
                        index("prematureRate", "Premature Rate", ScoreType::Percentage, ScoreRange::PERCENTAGE),
                        index("phase1MeanError", "Phase 1 Mean Error", ScoreType::Percentage, ScoreRange::NON_NEGATIVE),
                        index("phase2MeanError", "Phase 2 Mean Error", ScoreType::Percentage, ScoreRange::NON_NEGATIVE),
                        index("totalTrials", "Trials", ScoreType::Count, ScoreRange::COUNT),
                    ],
                    description: Some("Relative error is capped at 200% per trial".to_string()),
                },
            ]
        });
        &GROUPS
    }
}

impl ScoreSheet for ChronosScores {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        vec![
            ScoreEntry::new("cIM", self.c_im),
            ScoreEntry::new("cHR", self.c_hr),
            ScoreEntry::new("cIE", self.c_ie),
            ScoreEntry::new("meanErrorPct", self.mean_error_pct),
            ScoreEntry::new("prematureRate", self.premature_rate),
            ScoreEntry::new("phase1MeanError", self.phase1_mean_error),
            ScoreEntry::new("phase2MeanError", self.phase2_mean_error),
            ScoreEntry::new("totalTrials", self.total_trials),
        ]
    }
}
