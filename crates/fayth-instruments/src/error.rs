use thiserror::Error;

use fayth_core::error::CoreError;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown index '{index_id}' for instrument '{instrument_id}'")]
    UnknownIndex {
        instrument_id: String,
        index_id: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
