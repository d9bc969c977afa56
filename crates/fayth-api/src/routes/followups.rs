use axum::Json;
use serde::Deserialize;

use fayth_core::models::questionnaire::{FollowUpQuestion, Responses, validate_responses};
use fayth_core::models::user::Gender;
use fayth_instruments::questionnaire::followups::determine_follow_ups;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct FollowUpRequest {
    responses: Responses,
    #[serde(default)]
    gender: Option<Gender>,
}

pub async fn select_follow_ups(
    Json(req): Json<FollowUpRequest>,
) -> Result<Json<Vec<FollowUpQuestion>>, ApiError> {
    validate_responses(&req.responses)?;
    Ok(Json(determine_follow_ups(&req.responses, req.gender)))
}
