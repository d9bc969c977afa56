//! Storage key conventions.
//!
//! Pure string constants with no storage dependency. The presentation layer
//! persists sessions, histories and the report bundle under these keys, and
//! the optional remote sync writes to the named tables.

/// Combined report bundle for the current session.
pub const REPORT_BUNDLE: &str = "fayth-report-bundle";

/// In-progress questionnaire state (session-scoped).
pub const QUESTIONNAIRE_SESSION: &str = "adhd-assessment-v2";

/// Completed questionnaire results, newest first.
pub const QUESTIONNAIRE_HISTORY: &str = "adhd-assessment-history";

pub const GONOGO_HISTORY: &str = "focus-task-history";
pub const CHRONOS_HISTORY: &str = "chronos-sort-history";
pub const FOCUS_QUEST_HISTORY: &str = "focus-quest-history";

/// Remote table names.
pub mod table {
    pub const GAME_SCORES: &str = "game_scores";
    pub const CHRONOS_SCORES: &str = "chronos_scores";
    pub const FOCUS_QUEST_SCORES: &str = "focus_quest_scores";
    pub const QUESTIONNAIRE_RESULTS: &str = "questionnaire_results";
}

/// History key for a game, by its wire name (`gonogo`, `chronos`, `focusQuest`).
pub fn game_history(game: &str) -> Option<&'static str> {
    match game {
        "gonogo" => Some(GONOGO_HISTORY),
        "chronos" => Some(CHRONOS_HISTORY),
        "focusQuest" => Some(FOCUS_QUEST_HISTORY),
        _ => None,
    }
}
