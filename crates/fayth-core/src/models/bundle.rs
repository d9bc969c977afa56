use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::questionnaire::QuestionnaireResult;
use super::scores::{ChronosScores, FocusQuestScores, GameScores, GoNoGoScores};
use super::user::UserData;

/// Everything one session produced, merged as each task completes.
/// Persisted under [`crate::storage_keys::REPORT_BUNDLE`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportBundle {
    pub session_id: Uuid,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub user_data: UserData,
    #[serde(default)]
    pub questionnaire: Option<QuestionnaireRecord>,
    #[serde(default)]
    pub games: GameRecords,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionnaireRecord {
    pub result: QuestionnaireResult,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameRecord<T> {
    pub scores: T,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameRecords {
    #[serde(default)]
    pub gonogo: Option<GameRecord<GoNoGoScores>>,
    #[serde(default)]
    pub chronos: Option<GameRecord<ChronosScores>>,
    #[serde(default)]
    pub focus_quest: Option<GameRecord<FocusQuestScores>>,
}

impl ReportBundle {
    /// Start a fresh bundle at intake.
    pub fn new(session_id: Uuid, user_data: UserData) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            session_id,
            created_at: now,
            updated_at: now,
            user_data,
            questionnaire: None,
            games: GameRecords::default(),
        }
    }

    /// Replace any earlier questionnaire result.
    pub fn record_questionnaire(&mut self, result: QuestionnaireResult) {
        let now = jiff::Timestamp::now();
        self.questionnaire = Some(QuestionnaireRecord {
            result,
            completed_at: now,
        });
        self.updated_at = now;
    }

    /// Replace any earlier result for the same game.
    pub fn record_game(&mut self, scores: GameScores) {
        let completed_at = jiff::Timestamp::now();
        match scores {
            GameScores::GoNoGo(scores) => {
                self.games.gonogo = Some(GameRecord { scores, completed_at })
            }
            GameScores::Chronos(scores) => {
                self.games.chronos = Some(GameRecord { scores, completed_at })
            }
            GameScores::FocusQuest(scores) => {
                self.games.focus_quest = Some(GameRecord { scores, completed_at })
            }
        }
        self.updated_at = completed_at;
    }

    /// Number of tasks (questionnaire + games) recorded so far.
    pub fn completed_tasks(&self) -> usize {
        usize::from(self.questionnaire.is_some())
            + usize::from(self.games.gonogo.is_some())
            + usize::from(self.games.chronos.is_some())
            + usize::from(self.games.focus_quest.is_some())
    }
}
