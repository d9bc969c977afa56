use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("trial {trial}: target duration must be positive, got {target_ms} ms")]
    InvalidTargetDuration { trial: u32, target_ms: f64 },

    #[error("trial {trial}: phase must be 1 or 2, got {phase}")]
    InvalidPhase { trial: u32, phase: u8 },

    #[error("response '{item_id}' is {value}; Likert responses must be between 0 and 4")]
    LikertOutOfRange { item_id: String, value: u8 },
}
