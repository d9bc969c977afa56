//! Task protocol constants shared by the presentation layer and the
//! scorers. Trial counts and durations are fixed per game.

/// Go/No-Go block layout.
pub mod gonogo {
    pub const PRACTICE_TRIALS: u32 = 20;
    pub const SCORED_TRIALS: u32 = 160;
    pub const GO_PROBABILITY: f64 = 0.7;
    pub const STIMULUS_MS: u32 = 600;

    /// Upper bound (exclusive) of a plausible reaction time.
    pub const RT_CEILING_MS: f64 = 3000.0;
    /// Stand-in reaction time for an omitted go trial in the vigilance slope.
    pub const OMISSION_RT_MS: f64 = 1500.0;
}

/// Chronos Sort duration-reproduction layout.
pub mod chronos {
    pub const PRACTICE_TRIALS: u32 = 8;
    pub const PHASE1_TRIALS: u32 = 20;
    pub const PHASE2_TRIALS: u32 = 20;

    pub const QUICK_PHASE1_MS: f64 = 2000.0;
    pub const SLOW_PHASE1_MS: f64 = 5000.0;
    pub const QUICK_PHASE2_MS: f64 = 1500.0;
    pub const SLOW_PHASE2_MS: f64 = 3500.0;

    /// A release before this fraction of the target counts as premature.
    pub const PREMATURE_FRACTION: f64 = 0.5;
    /// Per-trial relative error is capped here.
    pub const MAX_ERROR: f64 = 2.0;

    pub const EXCELLENT_ERROR: f64 = 0.15;
    pub const CLOSE_ERROR: f64 = 0.35;
}

/// Focus Quest dual-CPT layout.
pub mod focus_quest {
    pub const X_WARMUP_TRIALS: u32 = 10;
    pub const X_TRIALS: u32 = 80;
    pub const AX_PRACTICE_TRIALS: u32 = 5;
    pub const AX_TRIALS: u32 = 60;

    pub const X_NOGO_PROBABILITY: f64 = 0.2;
    pub const AX_PROBABILITY: f64 = 0.3;
    pub const BX_PROBABILITY: f64 = 0.15;

    pub const X_GO_STIMULI: [&str; 5] = ["🐟", "🦀", "🐢", "🐙", "🦑"];
    pub const X_NOGO_STIMULUS: &str = "🪼";

    pub const AX_CUE: &str = "⭐";
    pub const AX_TARGET: &str = "🪙";
    pub const AX_B_STIMULI: [&str; 4] = ["🐟", "🦀", "🐢", "🐙"];
    pub const AX_Y_STIMULI: [&str; 3] = ["🐚", "🦐", "🐡"];

    pub const RT_CEILING_MS: f64 = 2000.0;
    pub const OMISSION_RT_MS: f64 = 1000.0;
}
