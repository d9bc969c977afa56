use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value an index produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// 0–100 composite, higher is better.
    Composite,
    /// Percentage of a trial or item total (0–100).
    Percentage,
    /// Reaction-time statistic in milliseconds.
    Milliseconds,
    /// Count of trials or items.
    Count,
    /// Regression slope, ms per trial.
    Slope,
    /// Signal-detection sensitivity.
    DPrime,
    /// Summed Likert responses.
    Raw,
}

/// Valid range for an index. An absent bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const COMPOSITE: ScoreRange = ScoreRange {
        min: Some(0.0),
        max: Some(100.0),
        step: Some(1.0),
    };

    pub const PERCENTAGE: ScoreRange = ScoreRange {
        min: Some(0.0),
        max: Some(100.0),
        step: None,
    };

    pub const COUNT: ScoreRange = ScoreRange {
        min: Some(0.0),
        max: None,
        step: Some(1.0),
    };

    pub const NON_NEGATIVE: ScoreRange = ScoreRange {
        min: Some(0.0),
        max: None,
        step: None,
    };

    pub const UNBOUNDED: ScoreRange = ScoreRange {
        min: None,
        max: None,
        step: None,
    };

    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        if self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max) {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min.unwrap_or(0.0);
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One named output of an instrument (e.g. `aqvis`, `dPrime`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Index {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A group of related indices, e.g. the X-Test half of Focus Quest.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexGroup {
    pub id: String,
    pub name: String,
    pub indices: Vec<Index>,
    pub description: Option<String>,
}

/// A single named value taken from a score object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub index_id: String,
    pub value: f64,
}

impl ScoreEntry {
    pub fn new(index_id: &str, value: impl Into<f64>) -> Self {
        Self {
            index_id: index_id.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub index_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

/// A score object that can be flattened into named entries for validation
/// and reporting. Entry ids match the object's JSON field names.
pub trait ScoreSheet {
    fn score_entries(&self) -> Vec<ScoreEntry>;
}

pub(crate) fn index(id: &str, name: &str, score_type: ScoreType, range: ScoreRange) -> Index {
    Index {
        id: id.to_string(),
        name: name.to_string(),
        score_type,
        range,
        description: None,
    }
}

pub(crate) fn composite(id: &str, name: &str, description: &str) -> Index {
    Index {
        description: Some(description.to_string()),
        ..index(id, name, ScoreType::Composite, ScoreRange::COMPOSITE)
    }
}
