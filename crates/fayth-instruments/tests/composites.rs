use fayth_core::models::trial::{AxTrial, ChronosTrial, GoNoGoTrial, ItemType, StimulusKind, XTrial};
use fayth_core::protocol::focus_quest::{AX_CUE, AX_TARGET, X_NOGO_STIMULUS};
use fayth_instruments::games::chronos::calc_chronos_scores;
use fayth_instruments::games::focus_quest::calc_focus_quest_scores;
use fayth_instruments::games::gonogo::calc_gonogo_scores;
use proptest::prelude::*;

fn rt() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-50.0f64..5000.0)
}

proptest! {
    #[test]
    fn gonogo_outputs_stay_in_range(trials in prop::collection::vec((any::<bool>(), rt()), 0..200)) {
        let trials: Vec<GoNoGoTrial> = trials
            .into_iter()
            .zip(1..)
            .map(|((go, rt), i)| {
                let kind = if go { StimulusKind::Go } else { StimulusKind::Nogo };
                GoNoGoTrial::new(i, kind, rt)
            })
            .collect();

        let scores = calc_gonogo_scores(&trials);
        prop_assert!(scores.aqvis <= 100);
        prop_assert!(scores.rcqvis <= 100);
        prop_assert!((0.0..=100.0).contains(&scores.omission_pct));
        prop_assert!((0.0..=100.0).contains(&scores.commission_pct));
        prop_assert!(scores.icv.is_finite() && scores.vig_slope.is_finite());
    }

    #[test]
    fn chronos_outputs_stay_in_range(
        trials in prop::collection::vec((1u8..=2, 100.0f64..8000.0, 0.0f64..20000.0), 0..60)
    ) {
        let trials: Vec<ChronosTrial> = trials
            .into_iter()
            .zip(1..)
            .map(|((phase, target, actual), i)| {
                ChronosTrial::new(i, phase, ItemType::Slow, target, actual).unwrap()
            })
            .collect();

        let scores = calc_chronos_scores(&trials);
        prop_assert!(scores.c_im <= 100);
        prop_assert!(scores.c_hr <= 100);
        prop_assert!(scores.c_ie <= 100);
        prop_assert!(scores.mean_error_pct <= 200.0);
    }

    #[test]
    fn focus_quest_outputs_stay_in_range(
        x in prop::collection::vec((any::<bool>(), rt()), 0..100),
        ax in prop::collection::vec((0usize..3, rt()), 0..80),
    ) {
        let x_trials: Vec<XTrial> = x
            .into_iter()
            .zip(1..)
            .map(|((nogo, rt), i)| XTrial::new(i, if nogo { X_NOGO_STIMULUS } else { "🐟" }, rt))
            .collect();

        let stimuli = [AX_CUE, AX_TARGET, "🍄"];
        let mut prev: Option<&str> = None;
        let mut ax_trials = Vec::new();
        for ((pick, rt), i) in ax.into_iter().zip(1..) {
            ax_trials.push(AxTrial::new(i, prev, stimuli[pick], rt));
            prev = Some(stimuli[pick]);
        }

        let scores = calc_focus_quest_scores(&x_trials, &ax_trials);
        for composite in [scores.c_cpt_x, scores.c_cpt_ax, scores.c_ia, scores.c_hi] {
            prop_assert!(composite <= 100);
        }
        prop_assert!(scores.d_prime.is_finite());
        prop_assert!(scores.d_prime.abs() <= 9.19);
    }
}
