use fayth_core::models::scores::ChronosScores;
use fayth_core::models::trial::ChronosTrial;

use super::count;
use crate::stats::{clamp_composite, mean, ratio, round_to};

/// Score a completed Chronos Sort run (phase 1 and phase 2 trials, practice
/// already removed).
///
/// - `cIM = 100 - meanError * 100`
/// - `cHR = 100 - prematureRate * 150`
/// - `cIE = 50 + (phase1Error - phase2Error) * 100`; 50 means no change
///   across the rule shift.
pub fn calc_chronos_scores(trials: &[ChronosTrial]) -> ChronosScores {
    let errors = |phase: Option<u8>| {
        trials
            .iter()
            .filter(|t| phase.is_none_or(|p| t.phase == p))
            .map(|t| t.error)
            .collect::<Vec<f64>>()
    };

    let mean_error = mean(&errors(None));
    let phase1_error = mean(&errors(Some(1)));
    let phase2_error = mean(&errors(Some(2)));

    let total = count(trials.len());
    let premature = count(trials.iter().filter(|t| t.premature).count());
    let premature_rate = ratio(premature, total);

    ChronosScores {
        c_im: clamp_composite(100.0 - mean_error * 100.0),
        c_hr: clamp_composite(100.0 - premature_rate * 150.0),
        c_ie: adaptation_index(phase1_error, phase2_error),
        mean_error_pct: round_to(mean_error * 100.0, 1),
        premature_rate: round_to(premature_rate * 100.0, 1),
        phase1_mean_error: round_to(phase1_error * 100.0, 1),
        phase2_mean_error: round_to(phase2_error * 100.0, 1),
        total_trials: total,
    }
}

/// Adaptation to the rule change. Lower error after the shift scores above
/// 50; higher error scores below.
pub fn adaptation_index(phase1_mean_error: f64, phase2_mean_error: f64) -> u8 {
    clamp_composite(50.0 + (phase1_mean_error - phase2_mean_error) * 100.0)
}
