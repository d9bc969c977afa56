use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use fayth_instruments::scoring::IndexGroup;
use fayth_instruments::{all_instruments, require_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    id: String,
    name: String,
    groups: Vec<IndexGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_scale: Option<&'static [&'static str]>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = require_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        groups: instrument.indices().to_vec(),
        response_scale: instrument.response_scale(),
    }))
}
