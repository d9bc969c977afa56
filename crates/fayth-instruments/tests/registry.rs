use fayth_core::models::trial::{GoNoGoTrial, StimulusKind};
use fayth_instruments::error::InstrumentError;
use fayth_instruments::games::gonogo::calc_gonogo_scores;
use fayth_instruments::scoring::{ScoreEntry, ScoreSheet};
use fayth_instruments::{all_instruments, get_instrument, require_instrument};

#[test]
fn registry_lists_the_battery() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["gonogo", "chronos", "focus_quest", "dsm5", "asrs"]);
}

#[test]
fn unknown_instrument() {
    assert!(get_instrument("vineland3").is_none());
    assert!(matches!(
        require_instrument("vineland3"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "vineland3"
    ));
}

#[test]
fn every_index_id_is_unique_per_instrument() {
    for instrument in all_instruments() {
        let mut ids: Vec<&str> = instrument
            .indices()
            .iter()
            .flat_map(|g| &g.indices)
            .map(|i| i.id.as_str())
            .collect();
        let n = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n, "duplicate index in {}", instrument.id());
    }
}

#[test]
fn computed_scores_pass_validation() {
    let trials: Vec<GoNoGoTrial> = (0..20)
        .map(|i| GoNoGoTrial::new(i, StimulusKind::Go, Some(300.0 + f64::from(i))))
        .collect();
    let entries = calc_gonogo_scores(&trials).score_entries();

    let gonogo = require_instrument("gonogo").unwrap();
    assert!(gonogo.validate_scores(&entries).is_empty());
    assert!(gonogo.check_scores(&entries).is_ok());
    for entry in &entries {
        assert!(gonogo.index(&entry.index_id).is_ok(), "{}", entry.index_id);
    }
}

#[test]
fn out_of_range_composite_is_rejected() {
    let gonogo = require_instrument("gonogo").unwrap();
    let entries = [ScoreEntry::new("aqvis", 101.0), ScoreEntry::new("rcqvis", 50.5)];

    let errors = gonogo.validate_scores(&entries);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].index_id, "aqvis");
    assert!(errors[0].message.contains("outside range [0, 100]"));

    assert!(matches!(
        gonogo.check_scores(&entries),
        Err(InstrumentError::Validation(e)) if e.index_id == "aqvis"
    ));
}

#[test]
fn unknown_index_lookup() {
    let chronos = require_instrument("chronos").unwrap();
    assert!(matches!(
        chronos.index("aqvis"),
        Err(InstrumentError::UnknownIndex { instrument_id, .. }) if instrument_id == "chronos"
    ));
}

#[test]
fn structured_input_lists_reported_indices() {
    let scores = calc_gonogo_scores(&[GoNoGoTrial::new(1, StimulusKind::Go, Some(300.0))]);
    let text = require_instrument("gonogo")
        .unwrap()
        .to_structured_input(&scores.score_entries());

    assert!(text.starts_with("## Go/No-Go\n\n"));
    assert!(text.contains("### Composites\n"));
    assert!(text.contains("- Attention (AQvis): 100\n"));
    assert!(text.contains("- Mean RT: 300\n"));
}
