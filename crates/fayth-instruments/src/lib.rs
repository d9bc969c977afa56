//! fayth-instruments
//!
//! Scoring for the ADHD assessment battery: the three behavioral games, the
//! DSM-5 and ASRS v1.1 questionnaires, follow-up selection and
//! interpretation. Pure computation with no I/O.

pub mod error;
pub mod games;
pub mod instruments;
pub mod questionnaire;
pub mod scoring;
pub mod stats;

use error::InstrumentError;
use scoring::{Index, IndexGroup, ScoreEntry, ValidationError};

/// Trait implemented by each scored instrument in the battery.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "gonogo", "asrs").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Go/No-Go", "ASRS v1.1").
    fn name(&self) -> &str;

    /// The index groups this instrument reports.
    fn indices(&self) -> &[IndexGroup];

    /// Answer labels for self-report instruments, indexed by response value.
    fn response_scale(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Look up one index by id.
    fn index(&self, index_id: &str) -> Result<&Index, InstrumentError> {
        self.indices()
            .iter()
            .flat_map(|g| &g.indices)
            .find(|i| i.id == index_id)
            .ok_or_else(|| InstrumentError::UnknownIndex {
                instrument_id: self.id().to_string(),
                index_id: index_id.to_string(),
            })
    }

    /// Validate a set of score entries against this instrument's ranges.
    /// Entries for unknown indices are ignored.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_indices: Vec<_> = self.indices().iter().flat_map(|g| &g.indices).collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(index) = all_indices.iter().find(|i| i.id == entry.index_id)
                && !index.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    index_id: entry.index_id.clone(),
                    value: entry.value,
                    expected_range: index.range,
                    score_type: index.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        index.name,
                        entry.value,
                        bound(index.range.min),
                        bound(index.range.max),
                    ),
                });
            }
        }
        errors
    }

    /// Like [`Instrument::validate_scores`], but fails on the first
    /// out-of-range entry.
    fn check_scores(&self, scores: &[ScoreEntry]) -> Result<(), InstrumentError> {
        match self.validate_scores(scores).into_iter().next() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    /// Format scores as a structured text summary, one section per group.
    fn to_structured_input(&self, scores: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for group in self.indices() {
            output.push_str(&format!("### {}\n", group.name));
            for index in &group.indices {
                if let Some(entry) = scores.iter().find(|e| e.index_id == index.id) {
                    output.push_str(&format!("- {}: {}\n", index.name, entry.value));
                }
            }
            output.push('\n');
        }
        output
    }
}

fn bound(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::gonogo::GoNoGo),
        Box::new(instruments::chronos::ChronosSort),
        Box::new(instruments::focus_quest::FocusQuest),
        Box::new(instruments::dsm5::Dsm5Checklist),
        Box::new(instruments::asrs::AsrsScreener),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with
/// [`InstrumentError::UnknownInstrument`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
