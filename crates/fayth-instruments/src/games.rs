//! Trial-based scorers for the three behavioral games.
//!
//! Each scorer is a pure function of a complete, closed trial list and
//! returns a fixed-shape score object.

pub mod chronos;
pub mod focus_quest;
pub mod gonogo;

use fayth_core::models::trial::ResponseTrial;

use crate::stats::{mean, percent, round_to, stddev};

/// Hit / omission / false-alarm / correct-rejection tally over a go and a
/// no-go trial set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SignalCounts {
    pub hits: u32,
    pub omissions: u32,
    pub false_alarms: u32,
    pub correct_rejections: u32,
    pub go_total: u32,
    pub nogo_total: u32,
}

impl SignalCounts {
    pub fn tally<T: ResponseTrial>(go: &[&T], nogo: &[&T]) -> Self {
        let go_total = count(go.len());
        let nogo_total = count(nogo.len());
        let hits = responded(go);
        let false_alarms = responded(nogo);
        Self {
            hits,
            omissions: go_total - hits,
            false_alarms,
            correct_rejections: nogo_total - false_alarms,
            go_total,
            nogo_total,
        }
    }

    pub fn omission_pct(&self) -> f64 {
        percent(self.omissions, self.go_total)
    }

    pub fn commission_pct(&self) -> f64 {
        percent(self.false_alarms, self.nogo_total)
    }
}

/// Reaction-time mean, SD and coefficient of variation, each rounded to one
/// decimal. The ICV is computed from the rounded mean and SD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RtSummary {
    pub mean: f64,
    pub sd: f64,
    pub icv: f64,
}

impl RtSummary {
    /// Only reaction times in `(0, ceiling_ms)` count; this drops the
    /// no-response sentinel and implausible outliers.
    pub fn of<T: ResponseTrial>(trials: &[&T], ceiling_ms: f64) -> Self {
        let rts: Vec<f64> = trials
            .iter()
            .map(|t| t.rt())
            .filter(|rt| *rt > 0.0 && *rt < ceiling_ms)
            .collect();

        let mean = round_to(mean(&rts), 1);
        let sd = round_to(stddev(&rts), 1);
        let icv = if mean > 0.0 {
            round_to(sd / mean * 100.0, 1)
        } else {
            0.0
        };
        Self { mean, sd, icv }
    }
}

/// Reaction times in trial order, with `omission_rt_ms` standing in for
/// every trial that drew no response so the series stays index-aligned.
pub(crate) fn vigilance_series<T: ResponseTrial>(trials: &[&T], omission_rt_ms: f64) -> Vec<f64> {
    trials
        .iter()
        .map(|t| {
            if t.responded() && t.rt() > 0.0 {
                t.rt()
            } else {
                omission_rt_ms
            }
        })
        .collect()
}

pub(crate) fn responded<T: ResponseTrial>(trials: &[&T]) -> u32 {
    count(trials.iter().filter(|t| t.responded()).count())
}

pub(crate) fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
