pub mod asrs;
pub mod chronos;
pub mod dsm5;
pub mod focus_quest;
pub mod gonogo;

use fayth_core::models::questionnaire::{DomainScore, LIKERT_MAX, QuestionnaireResult};
use fayth_core::models::scores::GameScores;

use crate::Instrument;
use crate::scoring::{IndexGroup, ScoreEntry, ScoreRange, ScoreSheet, ScoreType, index};

/// The instrument that describes a game's score object.
pub fn for_game(scores: &GameScores) -> Box<dyn Instrument> {
    match scores {
        GameScores::GoNoGo(_) => Box::new(gonogo::GoNoGo),
        GameScores::Chronos(_) => Box::new(chronos::ChronosSort),
        GameScores::FocusQuest(_) => Box::new(focus_quest::FocusQuest),
    }
}

/// The instrument that describes a questionnaire result.
pub fn for_questionnaire(result: &QuestionnaireResult) -> Box<dyn Instrument> {
    match result {
        QuestionnaireResult::Dsm5(_) => Box::new(dsm5::Dsm5Checklist),
        QuestionnaireResult::Asrs(_) => Box::new(asrs::AsrsScreener),
    }
}

impl ScoreSheet for GameScores {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        match self {
            GameScores::GoNoGo(scores) => scores.score_entries(),
            GameScores::Chronos(scores) => scores.score_entries(),
            GameScores::FocusQuest(scores) => scores.score_entries(),
        }
    }
}

impl ScoreSheet for QuestionnaireResult {
    fn score_entries(&self) -> Vec<ScoreEntry> {
        match self {
            QuestionnaireResult::Dsm5(result) => result.score_entries(),
            QuestionnaireResult::Asrs(result) => result.score_entries(),
        }
    }
}

/// Index group for one questionnaire domain. Ids are `{prefix}ClinicalCount`,
/// `{prefix}TotalScore` and `{prefix}Percentage`.
pub(crate) fn domain_group(prefix: &str, name: &str, items: u32, counted: &str) -> IndexGroup {
    let max_score = f64::from(items * u32::from(LIKERT_MAX));
    IndexGroup {
        id: prefix.to_string(),
        name: name.to_string(),
        indices: vec![
            index(
                &format!("{prefix}ClinicalCount"),
                counted,
                ScoreType::Count,
                ScoreRange {
                    max: Some(f64::from(items)),
                    ..ScoreRange::COUNT
                },
            ),
            index(
                &format!("{prefix}TotalScore"),
                "Total Score",
                ScoreType::Raw,
                ScoreRange {
                    max: Some(max_score),
                    ..ScoreRange::COUNT
                },
            ),
            index(
                &format!("{prefix}Percentage"),
                "Percentage of Maximum",
                ScoreType::Percentage,
                ScoreRange::PERCENTAGE,
            ),
        ],
        description: None,
    }
}

pub(crate) fn domain_entries(prefix: &str, score: &DomainScore) -> [ScoreEntry; 3] {
    [
        ScoreEntry::new(&format!("{prefix}ClinicalCount"), score.clinical_count),
        ScoreEntry::new(&format!("{prefix}TotalScore"), score.total_score),
        ScoreEntry::new(&format!("{prefix}Percentage"), score.percentage),
    ]
}
