use fayth_core::models::scores::GoNoGoScores;
use fayth_core::models::trial::{GoNoGoTrial, StimulusKind};
use fayth_core::protocol::gonogo::{OMISSION_RT_MS, RT_CEILING_MS};

use super::{RtSummary, SignalCounts, vigilance_series};
use crate::stats::{clamp_composite, linear_slope, round_to};

/// Score a completed Go/No-Go block.
///
/// `aqvis = 100 - omission% * 2 - icv / 2` and
/// `rcqvis = 100 - commission% * 3`, both rounded and clamped to [0, 100].
pub fn calc_gonogo_scores(trials: &[GoNoGoTrial]) -> GoNoGoScores {
    let (go, nogo): (Vec<&GoNoGoTrial>, Vec<&GoNoGoTrial>) = trials
        .iter()
        .partition(|t| t.trial_type == StimulusKind::Go);

    let counts = SignalCounts::tally(&go, &nogo);
    let omission_pct = counts.omission_pct();
    let commission_pct = counts.commission_pct();

    let rt = RtSummary::of(&go, RT_CEILING_MS);
    let vig_slope = round_to(linear_slope(&vigilance_series(&go, OMISSION_RT_MS)), 3);

    GoNoGoScores {
        aqvis: clamp_composite(100.0 - omission_pct * 2.0 - rt.icv / 2.0),
        rcqvis: clamp_composite(100.0 - commission_pct * 3.0),
        icv: rt.icv,
        mean_rt: rt.mean,
        sd_rt: rt.sd,
        vig_slope,
        omissions: counts.omissions,
        false_alarms: counts.false_alarms,
        hits: counts.hits,
        correct_rejections: counts.correct_rejections,
        omission_pct: round_to(omission_pct, 1),
        commission_pct: round_to(commission_pct, 1),
        go_total: counts.go_total,
        nogo_total: counts.nogo_total,
    }
}
