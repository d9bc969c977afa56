use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::protocol::{chronos, focus_quest};

/// Reaction-time sentinel recorded when no response occurred.
pub const NO_RESPONSE_RT: f64 = -1.0;

/// A scored trial that either drew a response or didn't.
pub trait ResponseTrial {
    fn responded(&self) -> bool;

    /// Reaction time in ms, or [`NO_RESPONSE_RT`].
    fn rt(&self) -> f64;
}

fn rt_or_sentinel(rt: Option<f64>) -> f64 {
    rt.unwrap_or(NO_RESPONSE_RT)
}

// ── Go/No-Go ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StimulusKind {
    Go,
    Nogo,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GoNoGoTrial {
    pub trial: u32,
    pub trial_type: StimulusKind,
    pub responded: bool,
    pub rt: f64,
    pub correct: bool,
}

impl GoNoGoTrial {
    /// Build a trial record from the response latency, if any.
    pub fn new(trial: u32, trial_type: StimulusKind, rt: Option<f64>) -> Self {
        let responded = rt.is_some();
        Self {
            trial,
            trial_type,
            responded,
            rt: rt_or_sentinel(rt),
            correct: match trial_type {
                StimulusKind::Go => responded,
                StimulusKind::Nogo => !responded,
            },
        }
    }
}

impl ResponseTrial for GoNoGoTrial {
    fn responded(&self) -> bool {
        self.responded
    }

    fn rt(&self) -> f64 {
        self.rt
    }
}

// ── Chronos Sort ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ItemType {
    Quick,
    Slow,
}

impl ItemType {
    /// Target hold duration in ms. Phase 2 shortens both targets.
    pub fn target_ms(self, phase: u8) -> f64 {
        match (self, phase) {
            (ItemType::Quick, 2) => chronos::QUICK_PHASE2_MS,
            (ItemType::Slow, 2) => chronos::SLOW_PHASE2_MS,
            (ItemType::Quick, _) => chronos::QUICK_PHASE1_MS,
            (ItemType::Slow, _) => chronos::SLOW_PHASE1_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChronosTrial {
    pub trial: u32,
    /// 1 or 2; practice trials never reach the scorer.
    pub phase: u8,
    pub item_type: ItemType,
    pub target_duration: f64,
    pub actual_duration: f64,
    /// `|actual - target| / target`, capped at 2.0.
    pub error: f64,
    /// Released before half the target elapsed.
    pub premature: bool,
}

impl ChronosTrial {
    pub fn new(
        trial: u32,
        phase: u8,
        item_type: ItemType,
        target_ms: f64,
        actual_ms: f64,
    ) -> Result<Self, CoreError> {
        check_phase(trial, phase)?;
        check_target(trial, target_ms)?;

        Ok(Self {
            trial,
            phase,
            item_type,
            target_duration: target_ms,
            actual_duration: actual_ms.round(),
            error: ((actual_ms - target_ms).abs() / target_ms).min(chronos::MAX_ERROR),
            premature: actual_ms < target_ms * chronos::PREMATURE_FRACTION,
        })
    }

    /// Check a record that arrived pre-built (e.g. deserialized).
    pub fn validate(&self) -> Result<(), CoreError> {
        check_phase(self.trial, self.phase)?;
        check_target(self.trial, self.target_duration)
    }

    pub fn feedback(&self) -> TimingFeedback {
        let over = self.actual_duration > self.target_duration;
        if self.premature {
            TimingFeedback::TooEarly
        } else if self.error < chronos::EXCELLENT_ERROR {
            TimingFeedback::Excellent
        } else if self.error < chronos::CLOSE_ERROR {
            if over {
                TimingFeedback::SlightlyLong
            } else {
                TimingFeedback::SlightlyShort
            }
        } else if over {
            TimingFeedback::WayTooLong
        } else {
            TimingFeedback::WayTooShort
        }
    }
}

fn check_phase(trial: u32, phase: u8) -> Result<(), CoreError> {
    if matches!(phase, 1 | 2) {
        Ok(())
    } else {
        Err(CoreError::InvalidPhase { trial, phase })
    }
}

fn check_target(trial: u32, target_ms: f64) -> Result<(), CoreError> {
    // Also rejects NaN.
    if target_ms > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidTargetDuration { trial, target_ms })
    }
}

/// Per-trial feedback tier shown after a hold is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimingFeedback {
    TooEarly,
    Excellent,
    SlightlyLong,
    SlightlyShort,
    WayTooLong,
    WayTooShort,
}

// ── Focus Quest ────────────────────────────────────────────────────────────

/// X-Test trial: respond to every creature except the no-go jellyfish.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct XTrial {
    pub trial: u32,
    pub stimulus: String,
    pub is_nogo: bool,
    pub responded: bool,
    pub rt: f64,
    pub correct: bool,
}

impl XTrial {
    pub fn new(trial: u32, stimulus: &str, rt: Option<f64>) -> Self {
        let is_nogo = stimulus == focus_quest::X_NOGO_STIMULUS;
        let responded = rt.is_some();
        Self {
            trial,
            stimulus: stimulus.to_string(),
            is_nogo,
            responded,
            rt: rt_or_sentinel(rt),
            correct: responded != is_nogo,
        }
    }
}

impl ResponseTrial for XTrial {
    fn responded(&self) -> bool {
        self.responded
    }

    fn rt(&self) -> f64 {
        self.rt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum AxTrialType {
    /// Cue then target; the only trial that requires a response.
    Ax,
    /// Cue then non-target.
    Ay,
    /// Non-cue then target.
    Bx,
    /// Neither.
    By,
}

impl AxTrialType {
    /// Classify a trial from its predecessor. The first trial of a block has
    /// no predecessor and is always `BY`, whatever its stimulus.
    pub fn classify(prev: Option<&str>, current: &str, cue: &str, target: &str) -> Self {
        let Some(prev) = prev else {
            return AxTrialType::By;
        };
        match (prev == cue, current == target) {
            (true, true) => AxTrialType::Ax,
            (true, false) => AxTrialType::Ay,
            (false, true) => AxTrialType::Bx,
            (false, false) => AxTrialType::By,
        }
    }
}

/// AX-Test trial: respond to the target only when the cue came just before.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AxTrial {
    pub trial: u32,
    /// Empty on the first trial of a block.
    pub prev_stimulus: String,
    pub stimulus: String,
    pub trial_type: AxTrialType,
    pub responded: bool,
    pub rt: f64,
    pub correct: bool,
}

impl AxTrial {
    /// Build a record using the standard cue/target stimuli.
    pub fn new(trial: u32, prev: Option<&str>, stimulus: &str, rt: Option<f64>) -> Self {
        Self::with_stimuli(
            trial,
            prev,
            stimulus,
            rt,
            focus_quest::AX_CUE,
            focus_quest::AX_TARGET,
        )
    }

    pub fn with_stimuli(
        trial: u32,
        prev: Option<&str>,
        stimulus: &str,
        rt: Option<f64>,
        cue: &str,
        target: &str,
    ) -> Self {
        let trial_type = AxTrialType::classify(prev, stimulus, cue, target);
        let responded = rt.is_some();
        Self {
            trial,
            prev_stimulus: prev.unwrap_or_default().to_string(),
            stimulus: stimulus.to_string(),
            trial_type,
            responded,
            rt: rt_or_sentinel(rt),
            correct: responded == (trial_type == AxTrialType::Ax),
        }
    }
}

impl ResponseTrial for AxTrial {
    fn responded(&self) -> bool {
        self.responded
    }

    fn rt(&self) -> f64 {
        self.rt
    }
}
