use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use fayth_core::models::questionnaire::{ContextResponses, QuestionnaireResult, Responses};
use fayth_core::models::scores::{ChronosScores, FocusQuestScores, GoNoGoScores};
use fayth_core::models::trial::{AxTrial, ChronosTrial, GoNoGoTrial, XTrial};
use fayth_core::models::user::UserData;
use fayth_instruments::games::chronos::calc_chronos_scores;
use fayth_instruments::games::focus_quest::calc_focus_quest_scores;
use fayth_instruments::games::gonogo::calc_gonogo_scores;
use fayth_instruments::questionnaire::asrs::score_asrs;
use fayth_instruments::questionnaire::dsm5::score_dsm5;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TrialsRequest<T> {
    trials: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusQuestRequest {
    x_trials: Vec<XTrial>,
    ax_trials: Vec<AxTrial>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireRequest {
    #[serde(default)]
    user_data: UserData,
    responses: Responses,
    #[serde(default)]
    context_responses: ContextResponses,
    #[serde(default)]
    follow_up_responses: Responses,
}

fn check_trial_count(state: &AppState, count: usize) -> Result<(), ApiError> {
    if count > state.config.max_trials {
        return Err(ApiError::BadRequest(format!(
            "{count} trials exceeds the limit of {}",
            state.config.max_trials
        )));
    }
    Ok(())
}

pub async fn score_gonogo(
    State(state): State<AppState>,
    Json(req): Json<TrialsRequest<GoNoGoTrial>>,
) -> Result<Json<GoNoGoScores>, ApiError> {
    check_trial_count(&state, req.trials.len())?;

    let scores = calc_gonogo_scores(&req.trials);
    tracing::debug!(aqvis = scores.aqvis, rcqvis = scores.rcqvis, "scored gonogo");
    Ok(Json(scores))
}

pub async fn score_chronos(
    State(state): State<AppState>,
    Json(req): Json<TrialsRequest<ChronosTrial>>,
) -> Result<Json<ChronosScores>, ApiError> {
    check_trial_count(&state, req.trials.len())?;
    for trial in &req.trials {
        trial.validate()?;
    }

    let scores = calc_chronos_scores(&req.trials);
    tracing::debug!(
        c_im = scores.c_im,
        c_hr = scores.c_hr,
        c_ie = scores.c_ie,
        "scored chronos"
    );
    Ok(Json(scores))
}

pub async fn score_focus_quest(
    State(state): State<AppState>,
    Json(req): Json<FocusQuestRequest>,
) -> Result<Json<FocusQuestScores>, ApiError> {
    check_trial_count(&state, req.x_trials.len() + req.ax_trials.len())?;

    let scores = calc_focus_quest_scores(&req.x_trials, &req.ax_trials);
    tracing::debug!(
        c_ia = scores.c_ia,
        c_hi = scores.c_hi,
        d_prime = scores.d_prime,
        "scored focus quest"
    );
    Ok(Json(scores))
}

pub async fn score_dsm5_questionnaire(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResult>, ApiError> {
    let result = score_dsm5(
        req.user_data,
        req.responses,
        req.context_responses,
        req.follow_up_responses,
    )?;
    tracing::debug!(
        presentation = ?result.presentation_type.kind,
        "scored dsm5 questionnaire"
    );
    Ok(Json(QuestionnaireResult::Dsm5(result)))
}

pub async fn score_asrs_questionnaire(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResult>, ApiError> {
    let result = score_asrs(
        req.user_data,
        req.responses,
        req.context_responses,
        req.follow_up_responses,
    )?;
    tracing::debug!(
        part_a_shaded = result.part_a_shaded_count,
        high_risk = result.part_a_high_risk,
        "scored asrs questionnaire"
    );
    Ok(Json(QuestionnaireResult::Asrs(result)))
}
