use fayth_core::models::scores::GoNoGoScores;

use crate::Instrument;
use crate::scoring::{
    IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, composite, index,
};

/// Go/No-Go: 160-trial response-inhibition task (70% go).
/// Composites are 0-100, higher is better.
pub struct GoNoGo;

impl Instrument for GoNoGo {
    fn id(&self) -> &str {
        "gonogo"
    }

    fn name(&self) -> &str {
        "Go/No-Go"
    }

    fn indices(&self) -> &[IndexGroup] {
        static GROUPS: std::sync::LazyLock<Vec<IndexGroup>> = std::sync::LazyLock::new(|| {
            vec![
                IndexGroup {
                    id: "composites".to_string(),
                    name: "Composites".to_string(),
                    indices: vec![
                        composite(
                            "aqvis",
                            "Attention (AQvis)",
                            "100 - omission% x 2 - ICV / 2",
                        ),
                        composite(
                            "rcqvis",
                            "Response Control (RCQvis)",
                            "100 - commission% x 3",
                        ),
                    ],
                    description: None,
                },
                IndexGroup {
                    id: "reaction_time".to_string(),
                    name: "Reaction Time".to_string(),
                    indices: vec![
                        index("meanRT", "Mean RT", ScoreType::Milliseconds, ScoreRange::NON_NEGATIVE),
                        index("sdRT", "RT Standard Deviation", ScoreType::Milliseconds, ScoreRange::NON_NEGATIVE),
                        index("icv", "Intra-individual Coefficient of Variation", ScoreType::Percentage, ScoreRange::NON_NEGATIVE),
                        index("vigSlope", "Vigilance Slope", ScoreType::Slope, ScoreRange::UNBOUNDED),
                    ],
                    description: Some("Go trials with 0 < RT < 3000 ms".to_string()),
                },
                IndexGroup {
                    id: "errors".to_string(),
                    name: "Errors".to_string(),
                    indices: vec![
                        index("omissionPct", "Omission Rate", ScoreType::Percentage, ScoreRange::PERCENTAGE),
                        index("commissionPct", "Commission Rate", ScoreType::Percentage, ScoreRange::PERCENTAGE),
                        index("omissions", "Omissions", ScoreType::Count, ScoreRange::COUNT),
                        index("falseAlarms", "False Alarms", ScoreType::Count, ScoreRange::COUNT),
                        index("hits", "Hits", ScoreType::Count, ScoreRange::COUNT),
                        index("correctRejections", "Correct Rejections", ScoreType::Count, ScoreRange::COUNT),
                    ],
                    description: None,
                },
            ]
        });
        &GROUPS
    }
}

impl ScoreSheet for GoNoGoScores {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        vec![
            ScoreEntry::new("aqvis", self.aqvis),
            ScoreEntry::new("rcqvis", self.rcqvis),
            ScoreEntry::new("meanRT", self.mean_rt),
            ScoreEntry::new("sdRT", self.sd_rt),
            ScoreEntry::new("icv", self.icv),
            ScoreEntry::new("vigSlope", self.vig_slope),
            ScoreEntry::new("omissionPct", self.omission_pct),
            ScoreEntry::new("commissionPct", self.commission_pct),
            ScoreEntry::new("omissions", self.omissions),
            ScoreEntry::new("falseAlarms", self.false_alarms),
            ScoreEntry::new("hits", self.hits),
            ScoreEntry::new("correctRejections", self.correct_rejections),
        ]
    }
}
