use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Go/No-Go result. Composites are 0–100; rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GoNoGoScores {
    /// Attention composite.
    pub aqvis: u8,
    /// Inhibitory-control composite.
    pub rcqvis: u8,
    pub icv: f64,
    #[serde(rename = "meanRT")]
    pub mean_rt: f64,
    #[serde(rename = "sdRT")]
    pub sd_rt: f64,
    pub vig_slope: f64,
    pub omissions: u32,
    pub false_alarms: u32,
    pub hits: u32,
    pub correct_rejections: u32,
    pub omission_pct: f64,
    pub commission_pct: f64,
    pub go_total: u32,
    pub nogo_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChronosScores {
    /// Temporal memory index.
    #[serde(rename = "cIM")]
    pub c_im: u8,
    /// Patience / restraint index.
    #[serde(rename = "cHR")]
    pub c_hr: u8,
    /// Adaptation index; 50 is no change across the rule shift.
    #[serde(rename = "cIE")]
    pub c_ie: u8,
    pub mean_error_pct: f64,
    pub premature_rate: f64,
    pub phase1_mean_error: f64,
    pub phase2_mean_error: f64,
    pub total_trials: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FocusQuestScores {
    // X-Test
    pub x_hits: u32,
    pub x_omissions: u32,
    pub x_false_alarms: u32,
    pub x_correct_rejections: u32,
    pub x_omission_pct: f64,
    pub x_commission_pct: f64,
    #[serde(rename = "xMeanRT")]
    pub x_mean_rt: f64,
    #[serde(rename = "xSdRT")]
    pub x_sd_rt: f64,
    #[serde(rename = "xICV")]
    pub x_icv: f64,
    /// Positive = slowing over the block.
    pub x_vig_slope: f64,
    #[serde(rename = "cCPT_X")]
    pub c_cpt_x: u8,

    // AX-Test
    pub ax_hits: u32,
    pub ax_omissions: u32,
    pub bx_errors: u32,
    pub ay_errors: u32,
    #[serde(rename = "axTotalAX")]
    pub ax_total_ax: u32,
    #[serde(rename = "axTotalNonAX")]
    pub ax_total_non_ax: u32,
    #[serde(rename = "axMeanRT")]
    pub ax_mean_rt: f64,
    #[serde(rename = "axSdRT")]
    pub ax_sd_rt: f64,
    pub d_prime: f64,
    #[serde(rename = "cCPT_AX")]
    pub c_cpt_ax: u8,

    // Combined
    /// Inattention.
    #[serde(rename = "cIA")]
    pub c_ia: u8,
    /// Hyperactivity / impulsivity.
    #[serde(rename = "cHI")]
    pub c_hi: u8,
    pub total_trials: u32,
}

/// Scores from any one game, tagged by game for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "game", content = "scores")]
#[ts(export)]
pub enum GameScores {
    #[serde(rename = "gonogo")]
    GoNoGo(GoNoGoScores),
    #[serde(rename = "chronos")]
    Chronos(ChronosScores),
    #[serde(rename = "focusQuest")]
    FocusQuest(FocusQuestScores),
}

impl GameScores {
    pub fn game(&self) -> &'static str {
        match self {
            GameScores::GoNoGo(_) => "gonogo",
            GameScores::Chronos(_) => "chronos",
            GameScores::FocusQuest(_) => "focusQuest",
        }
    }
}
