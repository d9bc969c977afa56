use fayth_core::models::scores::FocusQuestScores;
use fayth_core::models::trial::{AxTrial, AxTrialType, XTrial};
use fayth_core::protocol::focus_quest::{OMISSION_RT_MS, RT_CEILING_MS};

use super::{RtSummary, SignalCounts, count, responded, vigilance_series};
use crate::stats::{clamp_composite, linear_slope, logit, ratio, round_to};

/// Score a completed Focus Quest run: the X-Test go/no-go stream and the
/// AX-Test cued-sequence stream, plus the two combined clinical indices.
pub fn calc_focus_quest_scores(x_trials: &[XTrial], ax_trials: &[AxTrial]) -> FocusQuestScores {
    let x = score_x_test(x_trials);
    let ax = score_ax_test(ax_trials);

    // Only slowing over the block is penalized.
    let c_ia = clamp_composite(
        100.0
            - x.omission_pct * 1.2
            - ratio(ax.omissions, ax.total_ax) * 80.0
            - x.vig_slope.max(0.0) * 30.0,
    );
    let c_hi = clamp_composite(
        100.0 - x.commission_pct * 2.0 - ratio(ax.bx_errors, ax.total_bx) * 100.0,
    );

    FocusQuestScores {
        x_hits: x.counts.hits,
        x_omissions: x.counts.omissions,
        x_false_alarms: x.counts.false_alarms,
        x_correct_rejections: x.counts.correct_rejections,
        x_omission_pct: round_to(x.omission_pct, 1),
        x_commission_pct: round_to(x.commission_pct, 1),
        x_mean_rt: x.rt.mean,
        x_sd_rt: x.rt.sd,
        x_icv: x.rt.icv,
        x_vig_slope: x.vig_slope,
        c_cpt_x: x.composite,
        ax_hits: ax.hits,
        ax_omissions: ax.omissions,
        bx_errors: ax.bx_errors,
        ay_errors: ax.ay_errors,
        ax_total_ax: ax.total_ax,
        ax_total_non_ax: ax.total_non_ax,
        ax_mean_rt: ax.rt.mean,
        ax_sd_rt: ax.rt.sd,
        d_prime: ax.d_prime,
        c_cpt_ax: ax.composite,
        c_ia,
        c_hi,
        total_trials: count(x_trials.len() + ax_trials.len()),
    }
}

struct XTest {
    counts: SignalCounts,
    omission_pct: f64,
    commission_pct: f64,
    rt: RtSummary,
    vig_slope: f64,
    composite: u8,
}

fn score_x_test(trials: &[XTrial]) -> XTest {
    let (nogo, go): (Vec<&XTrial>, Vec<&XTrial>) = trials.iter().partition(|t| t.is_nogo);

    let counts = SignalCounts::tally(&go, &nogo);
    let omission_pct = counts.omission_pct();
    let commission_pct = counts.commission_pct();
    let rt = RtSummary::of(&go, RT_CEILING_MS);
    let vig_slope = round_to(linear_slope(&vigilance_series(&go, OMISSION_RT_MS)), 4);

    XTest {
        counts,
        omission_pct,
        commission_pct,
        rt,
        vig_slope,
        composite: clamp_composite(
            100.0 - omission_pct * 1.5 - commission_pct * 2.0 - rt.icv / 2.0,
        ),
    }
}

struct AxTest {
    hits: u32,
    omissions: u32,
    bx_errors: u32,
    ay_errors: u32,
    total_ax: u32,
    total_bx: u32,
    total_non_ax: u32,
    rt: RtSummary,
    d_prime: f64,
    composite: u8,
}

fn score_ax_test(trials: &[AxTrial]) -> AxTest {
    let of_type = |kind: AxTrialType| {
        trials
            .iter()
            .filter(|t| t.trial_type == kind)
            .collect::<Vec<_>>()
    };
    let ax = of_type(AxTrialType::Ax);
    let bx = of_type(AxTrialType::Bx);
    let ay = of_type(AxTrialType::Ay);
    let non_ax: Vec<&AxTrial> = trials
        .iter()
        .filter(|t| t.trial_type != AxTrialType::Ax)
        .collect();

    let hits = responded(&ax);
    let total_ax = count(ax.len());
    let total_non_ax = count(non_ax.len());

    // Hit rate over AX; false-alarm rate over every non-AX trial.
    let hit_rate = ratio(hits, total_ax);
    let false_alarm_rate = ratio(responded(&non_ax), total_non_ax);
    let sensitivity = d_prime(hit_rate, false_alarm_rate);

    AxTest {
        hits,
        omissions: total_ax - hits,
        bx_errors: responded(&bx),
        ay_errors: responded(&ay),
        total_ax,
        total_bx: count(bx.len()),
        total_non_ax,
        rt: RtSummary::of(&ax, RT_CEILING_MS),
        d_prime: sensitivity,
        composite: clamp_composite(50.0 + sensitivity * 15.0),
    }
}

/// `logit(hitRate) - logit(falseAlarmRate)`, rounded to two decimals.
/// Equal rates give exactly 0.
pub fn d_prime(hit_rate: f64, false_alarm_rate: f64) -> f64 {
    round_to(logit(hit_rate) - logit(false_alarm_rate), 2)
}
