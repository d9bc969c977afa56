use fayth_core::models::trial::{AxTrial, AxTrialType, ChronosTrial, GoNoGoTrial, ItemType, StimulusKind, XTrial};
use fayth_core::protocol::focus_quest::{AX_CUE, AX_TARGET, X_NOGO_STIMULUS};
use fayth_instruments::games::chronos::{adaptation_index, calc_chronos_scores};
use fayth_instruments::games::focus_quest::{calc_focus_quest_scores, d_prime};
use fayth_instruments::games::gonogo::calc_gonogo_scores;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn gonogo_block(go_rt: Option<f64>, nogo_rt: Option<f64>) -> Vec<GoNoGoTrial> {
    (1..=160)
        .map(|i| {
            if i % 10 < 7 {
                GoNoGoTrial::new(i, StimulusKind::Go, go_rt)
            } else {
                GoNoGoTrial::new(i, StimulusKind::Nogo, nogo_rt)
            }
        })
        .collect()
}

#[test]
fn gonogo_clean_block_scores_at_ceiling() {
    let scores = calc_gonogo_scores(&gonogo_block(Some(300.0), None));

    assert_eq!(scores.go_total, 112);
    assert_eq!(scores.nogo_total, 48);
    assert_eq!(scores.hits, 112);
    assert_eq!(scores.correct_rejections, 48);
    assert_eq!(scores.omission_pct, 0.0);
    assert_eq!(scores.commission_pct, 0.0);
    assert_eq!(scores.mean_rt, 300.0);
    assert_eq!(scores.icv, 0.0);
    assert_eq!(scores.vig_slope, 0.0);
    assert_eq!(scores.aqvis, 100);
    assert_eq!(scores.rcqvis, 100);
}

#[test]
fn gonogo_total_failure_clamps_to_zero() {
    let scores = calc_gonogo_scores(&gonogo_block(None, Some(250.0)));

    assert_eq!(scores.omissions, 112);
    assert_eq!(scores.false_alarms, 48);
    assert_eq!(scores.omission_pct, 100.0);
    assert_eq!(scores.commission_pct, 100.0);
    assert_eq!(scores.mean_rt, 0.0);
    assert_eq!(scores.aqvis, 0);
    assert_eq!(scores.rcqvis, 0);
}

#[test]
fn gonogo_empty_block_is_safe() {
    let scores = calc_gonogo_scores(&[]);
    assert_eq!(scores.go_total, 0);
    assert_eq!(scores.omission_pct, 0.0);
    assert_eq!(scores.mean_rt, 0.0);
    assert_eq!(scores.aqvis, 100);
    assert_eq!(scores.rcqvis, 100);
}

#[test]
fn gonogo_slowing_gives_positive_slope() {
    let trials: Vec<GoNoGoTrial> = [300.0, 310.0, 320.0, 330.0]
        .into_iter()
        .zip(1..)
        .map(|(rt, i)| GoNoGoTrial::new(i, StimulusKind::Go, Some(rt)))
        .collect();

    let scores = calc_gonogo_scores(&trials);
    assert!(close(scores.vig_slope, 10.0));
    assert_eq!(scores.mean_rt, 315.0);
    assert_eq!(scores.sd_rt, 11.2);
    assert_eq!(scores.icv, 3.6);
}

#[test]
fn gonogo_excludes_implausible_rts_from_summary() {
    let trials = vec![
        GoNoGoTrial::new(1, StimulusKind::Go, Some(400.0)),
        GoNoGoTrial::new(2, StimulusKind::Go, Some(3500.0)),
    ];
    let scores = calc_gonogo_scores(&trials);
    assert_eq!(scores.hits, 2);
    assert_eq!(scores.mean_rt, 400.0);
    assert_eq!(scores.sd_rt, 0.0);
}

fn chronos(trial: u32, phase: u8, target: f64, actual: f64) -> ChronosTrial {
    ChronosTrial::new(trial, phase, ItemType::Quick, target, actual).unwrap()
}

#[test]
fn chronos_exact_timing_is_perfect() {
    let trials = vec![
        chronos(1, 1, 2000.0, 2000.0),
        chronos(2, 1, 5000.0, 5000.0),
        chronos(3, 2, 1500.0, 1500.0),
        chronos(4, 2, 3500.0, 3500.0),
    ];
    let scores = calc_chronos_scores(&trials);
    assert_eq!(scores.c_im, 100);
    assert_eq!(scores.c_hr, 100);
    assert_eq!(scores.c_ie, 50);
    assert_eq!(scores.total_trials, 4);
}

#[test]
fn chronos_improvement_after_rule_shift_raises_adaptation() {
    let trials = vec![
        chronos(1, 1, 2000.0, 2800.0),
        chronos(2, 1, 2000.0, 2800.0),
        chronos(3, 2, 1500.0, 1650.0),
        chronos(4, 2, 1500.0, 1650.0),
    ];
    let scores = calc_chronos_scores(&trials);
    assert_eq!(scores.c_ie, 80);
    assert_eq!(scores.c_im, 75);
    assert!(close(scores.mean_error_pct, 25.0));
    assert!(close(scores.phase1_mean_error, 40.0));
    assert!(close(scores.phase2_mean_error, 10.0));
}

#[test]
fn chronos_worsening_after_rule_shift_lowers_adaptation() {
    let trials = vec![
        chronos(1, 1, 1500.0, 1650.0),
        chronos(2, 2, 2000.0, 2800.0),
    ];
    assert_eq!(calc_chronos_scores(&trials).c_ie, 20);
}

#[test]
fn chronos_premature_releases_cost_patience() {
    let trials = vec![
        chronos(1, 1, 2000.0, 900.0),
        chronos(2, 1, 2000.0, 2000.0),
        chronos(3, 2, 3500.0, 1000.0),
        chronos(4, 2, 3500.0, 3500.0),
    ];
    let scores = calc_chronos_scores(&trials);
    assert!(close(scores.premature_rate, 50.0));
    assert_eq!(scores.c_hr, 25);
}

#[test]
fn chronos_empty_run_is_neutral() {
    let scores = calc_chronos_scores(&[]);
    assert_eq!(scores.c_im, 100);
    assert_eq!(scores.c_hr, 100);
    assert_eq!(scores.c_ie, 50);
    assert_eq!(scores.total_trials, 0);
}

#[test]
fn adaptation_index_is_clamped() {
    assert_eq!(adaptation_index(2.0, 0.0), 100);
    assert_eq!(adaptation_index(0.0, 2.0), 0);
    assert_eq!(adaptation_index(0.3, 0.3), 50);
}

#[test]
fn d_prime_is_zero_for_equal_rates_and_antisymmetric() {
    assert_eq!(d_prime(0.5, 0.5), 0.0);
    assert_eq!(d_prime(0.3, 0.3), 0.0);
    assert_eq!(d_prime(0.9, 0.1), 4.39);
    assert_eq!(d_prime(0.9, 0.1), -d_prime(0.1, 0.9));
    assert_eq!(d_prime(1.0, 0.0), 9.19);
}

#[test]
fn focus_quest_empty_run_is_safe() {
    let scores = calc_focus_quest_scores(&[], &[]);
    assert_eq!(scores.d_prime, 0.0);
    assert_eq!(scores.c_cpt_ax, 50);
    assert_eq!(scores.c_cpt_x, 100);
    assert_eq!(scores.c_ia, 100);
    assert_eq!(scores.c_hi, 100);
    assert_eq!(scores.total_trials, 0);
}

#[test]
fn first_ax_trial_never_counts_as_target_sequence() {
    let trials = vec![
        AxTrial::new(1, None, AX_TARGET, Some(400.0)),
        AxTrial::new(2, Some(AX_TARGET), AX_CUE, None),
        AxTrial::new(3, Some(AX_CUE), AX_TARGET, Some(450.0)),
    ];
    assert_eq!(trials[0].trial_type, AxTrialType::By);

    let scores = calc_focus_quest_scores(&[], &trials);
    assert_eq!(scores.ax_total_ax, 1);
    assert_eq!(scores.ax_total_non_ax, 2);
    assert_eq!(scores.ax_hits, 1);
    assert_eq!(scores.bx_errors, 0);
    assert_eq!(scores.ax_mean_rt, 450.0);
    assert_eq!(scores.c_cpt_ax, 100);
}

#[test]
fn focus_quest_commissions_drive_impulsivity_index() {
    let mut x_trials: Vec<XTrial> = (1..=8).map(|i| XTrial::new(i, "🐟", Some(500.0))).collect();
    x_trials.push(XTrial::new(9, X_NOGO_STIMULUS, Some(350.0)));
    x_trials.push(XTrial::new(10, X_NOGO_STIMULUS, None));

    let scores = calc_focus_quest_scores(&x_trials, &[]);
    assert_eq!(scores.x_hits, 8);
    assert_eq!(scores.x_false_alarms, 1);
    assert_eq!(scores.x_correct_rejections, 1);
    assert_eq!(scores.x_commission_pct, 50.0);
    assert_eq!(scores.x_mean_rt, 500.0);
    assert_eq!(scores.c_cpt_x, 0);
    assert_eq!(scores.c_hi, 0);
    assert_eq!(scores.c_ia, 100);
    assert_eq!(scores.total_trials, 10);
}

#[test]
fn bx_responses_count_as_errors() {
    let trials = vec![
        AxTrial::new(1, None, "🍄", None),
        AxTrial::new(2, Some("🍄"), AX_TARGET, Some(380.0)),
        AxTrial::new(3, Some(AX_TARGET), AX_CUE, None),
        AxTrial::new(4, Some(AX_CUE), AX_TARGET, None),
    ];
    assert_eq!(trials[1].trial_type, AxTrialType::Bx);

    let scores = calc_focus_quest_scores(&[], &trials);
    assert_eq!(scores.bx_errors, 1);
    assert_eq!(scores.ax_omissions, 1);
    // Only BX feeds the impulsivity index: 100 - 1/1 * 100.
    assert_eq!(scores.c_hi, 0);
    // One missed AX out of one: 100 - 80.
    assert_eq!(scores.c_ia, 20);
}

fn x_go_run(rts: &[Option<f64>]) -> Vec<XTrial> {
    rts.iter()
        .zip(1..)
        .map(|(rt, i)| XTrial::new(i, "🐟", *rt))
        .collect()
}

#[test]
fn x_test_slowing_costs_sustained_attention() {
    let rts: Vec<Option<f64>> = (0..10).map(|i| Some(400.0 + f64::from(i) * 0.5)).collect();
    let scores = calc_focus_quest_scores(&x_go_run(&rts), &[]);

    assert!(close(scores.x_vig_slope, 0.5));
    assert_eq!(scores.x_omission_pct, 0.0);
    // 100 - 0.5 * 30.
    assert_eq!(scores.c_ia, 85);
}

#[test]
fn x_test_speeding_up_is_not_rewarded() {
    let rts = [Some(530.0), Some(520.0), Some(510.0), Some(500.0)];
    let scores = calc_focus_quest_scores(&x_go_run(&rts), &[]);

    assert!(close(scores.x_vig_slope, -10.0));
    assert_eq!(scores.c_ia, 100);
}

#[test]
fn x_test_omissions_stand_in_at_one_second_and_slow_rts_are_dropped() {
    let scores = calc_focus_quest_scores(&x_go_run(&[Some(400.0), None, Some(2500.0)]), &[]);

    // Slope over [400, 1000, 2500].
    assert!(close(scores.x_vig_slope, 1050.0));
    // 2500 ms is past the 2000 ms ceiling, so only 400 ms counts.
    assert_eq!(scores.x_mean_rt, 400.0);
    assert_eq!(scores.x_sd_rt, 0.0);
    assert_eq!(scores.x_hits, 2);
    assert_eq!(scores.x_omissions, 1);
    assert_eq!(scores.x_omission_pct, 33.3);
    assert_eq!(scores.c_ia, 0);
}

#[test]
fn ay_responses_are_counted_but_not_penalized() {
    let trials = vec![
        AxTrial::new(1, None, "🐟", None),
        AxTrial::new(2, Some("🐟"), AX_CUE, None),
        AxTrial::new(3, Some(AX_CUE), "🐚", Some(420.0)),
        AxTrial::new(4, Some("🐚"), "🦐", None),
    ];
    assert_eq!(trials[2].trial_type, AxTrialType::Ay);

    let scores = calc_focus_quest_scores(&[], &trials);
    assert_eq!(scores.ay_errors, 1);
    assert_eq!(scores.bx_errors, 0);
    assert_eq!(scores.ax_total_ax, 0);
    assert_eq!(scores.ax_total_non_ax, 4);
    assert_eq!(scores.c_hi, 100);
    assert_eq!(scores.c_ia, 100);
}
