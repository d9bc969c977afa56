use fayth_core::models::scores::FocusQuestScores;

use crate::Instrument;
use crate::scoring::{
    IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, composite, index,
};

/// Focus Quest: an X-Test continuous-performance block followed by an
/// AX-Test cued-sequence block.
pub struct FocusQuest;

impl Instrument for FocusQuest {
    fn id(&self) -> &str {
        "focus_quest"
    }

    fn name(&self) -> &str {
        "Focus Quest"
    }

    fn indices(&self) -> &[IndexGroup] {
        static GROUPS: std::sync::LazyLock<Vec<IndexGroup>> = std::sync::LazyLock::new(|| {
            let count = |id: &str, name: &str| index(id, name, ScoreType::Count, ScoreRange::COUNT);
            let rate =
                |id: &str, name: &str| index(id, name, ScoreType::Percentage, ScoreRange::PERCENTAGE);
            let millis = |id: &str, name: &str| {
                index(id, name, ScoreType::Milliseconds, ScoreRange::NON_NEGATIVE)
            };

            vec![
                IndexGroup {
                    id: "x_test".to_string(),
                    name: "X-Test".to_string(),
                    indices: vec![
                        count("xHits", "Hits"),
                        count("xOmissions", "Omissions"),
                        count("xFalseAlarms", "False Alarms"),
                        count("xCorrectRejections", "Correct Rejections"),
                        rate("xOmissionPct", "Omission Rate"),
                        rate("xCommissionPct", "Commission Rate"),
                        millis("xMeanRT", "Mean RT"),
                        millis("xSdRT", "RT Standard Deviation"),
                        index("xICV", "Coefficient of Variation", ScoreType::Percentage, ScoreRange::NON_NEGATIVE),
                        index("xVigSlope", "Vigilance Slope", ScoreType::Slope, ScoreRange::UNBOUNDED),
                        composite("cCPT_X", "X-Test Composite", "100 - omission% x 1.5 - commission% x 2 - ICV / 2"),
                    ],
                    description: Some("Respond to every creature except the jellyfish".to_string()),
                },
                IndexGroup {
                    id: "ax_test".to_string(),
                    name: "AX-Test".to_string(),
                    indices: vec![
                        count("axHits", "AX Hits"),
                        count("axOmissions", "AX Omissions"),
                        count("bxErrors", "BX Errors"),
                        count("ayErrors", "AY Errors"),
                        count("axTotalAX", "AX Trials"),
                        count("axTotalNonAX", "Non-AX Trials"),
                        millis("axMeanRT", "AX Mean RT"),
                        millis("axSdRT", "AX RT Standard Deviation"),
                        index("dPrime", "d-prime", ScoreType::DPrime, ScoreRange::UNBOUNDED),
                        composite("cCPT_AX", "AX-Test Composite", "50 + d' x 15"),
                    ],
                    description: Some("Respond to the coin only when the star came first".to_string()),
                },
                IndexGroup {
                    id: "clinical".to_string(),
                    name: "Clinical Indices".to_string(),
                    indices: vec![
                        composite("cIA", "Inattention (cIA)", "Omissions across both tests plus vigilance decline"),
                        composite("cHI", "Hyperactivity/Impulsivity (cHI)", "X-Test commissions plus BX errors"),
                    ],
                    description: None,
                },
            ]
        });
        &GROUPS
    }
}

impl ScoreSheet for FocusQuestScores {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        vec![
            ScoreEntry::new("xHits", self.x_hits),
            ScoreEntry::new("xOmissions", self.x_omissions),
            ScoreEntry::new("xFalseAlarms", self.x_false_alarms),
            ScoreEntry::new("xCorrectRejections", self.x_correct_rejections),
            ScoreEntry::new("xOmissionPct", self.x_omission_pct),
            ScoreEntry::new("xCommissionPct", self.x_commission_pct),
            ScoreEntry::new("xMeanRT", self.x_mean_rt),
            ScoreEntry::new("xSdRT", self.x_sd_rt),
            ScoreEntry::new("xICV", self.x_icv),
            ScoreEntry::new("xVigSlope", self.x_vig_slope),
            ScoreEntry::new("cCPT_X", self.c_cpt_x),
            ScoreEntry::new("axHits", self.ax_hits),
            ScoreEntry::new("axOmissions", self.ax_omissions),
            ScoreEntry::new("bxErrors", self.bx_errors),
            ScoreEntry::new("ayErrors", self.ay_errors),
            ScoreEntry::new("axTotalAX", self.ax_total_ax),
            ScoreEntry::new("axTotalNonAX", self.ax_total_non_ax),
            ScoreEntry::new("axMeanRT", self.ax_mean_rt),
            ScoreEntry::new("axSdRT", self.ax_sd_rt),
            ScoreEntry::new("dPrime", self.d_prime),
            ScoreEntry::new("cCPT_AX", self.c_cpt_ax),
            ScoreEntry::new("cIA", self.c_ia),
            ScoreEntry::new("cHI", self.c_hi),
        ]
    }
}
