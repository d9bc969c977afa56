use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use fayth_core::models::bundle::ReportBundle;
use fayth_core::models::questionnaire::QuestionnaireResult;
use fayth_core::models::scores::GameScores;
use fayth_core::models::user::UserData;
use fayth_instruments::instruments::{for_game, for_questionnaire};
use fayth_instruments::scoring::ScoreSheet;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSession {
    #[serde(default)]
    user_data: UserData,
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session not found: {id}"))
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSession>,
) -> (StatusCode, Json<ReportBundle>) {
    let bundle = ReportBundle::new(Uuid::new_v4(), req.user_data);
    state.insert_bundle(bundle.clone()).await;

    tracing::info!(session_id = %bundle.session_id, "session created");
    (StatusCode::CREATED, Json(bundle))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportBundle>, ApiError> {
    let bundles = state.bundles.lock().await;
    let bundle = bundles.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(bundle.clone()))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .bundles
        .lock()
        .await
        .remove(&id)
        .ok_or_else(|| not_found(id))?;

    tracing::info!(session_id = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn record_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(result): Json<QuestionnaireResult>,
) -> Result<Json<ReportBundle>, ApiError> {
    for_questionnaire(&result).check_scores(&result.score_entries())?;

    let mut bundles = state.bundles.lock().await;
    let bundle = bundles.get_mut(&id).ok_or_else(|| not_found(id))?;

    tracing::info!(session_id = %id, instrument = result.instrument(), "questionnaire recorded");
    bundle.record_questionnaire(result);
    Ok(Json(bundle.clone()))
}

pub async fn record_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(scores): Json<GameScores>,
) -> Result<Json<ReportBundle>, ApiError> {
    for_game(&scores).check_scores(&scores.score_entries())?;

    let mut bundles = state.bundles.lock().await;
    let bundle = bundles.get_mut(&id).ok_or_else(|| not_found(id))?;

    tracing::info!(session_id = %id, game = scores.game(), "game recorded");
    bundle.record_game(scores);
    Ok(Json(bundle.clone()))
}

/// Plain-text summary of everything recorded for a session, one section per
/// instrument.
pub async fn session_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    let bundles = state.bundles.lock().await;
    let bundle = bundles.get(&id).ok_or_else(|| not_found(id))?;

    let mut sections = Vec::new();
    if let Some(record) = &bundle.questionnaire {
        let instrument = for_questionnaire(&record.result);
        sections.push(instrument.to_structured_input(&record.result.score_entries()));
    }

    let games = [
        bundle.games.gonogo.as_ref().map(|r| GameScores::GoNoGo(r.scores.clone())),
        bundle.games.chronos.as_ref().map(|r| GameScores::Chronos(r.scores.clone())),
        bundle
            .games
            .focus_quest
            .as_ref()
            .map(|r| GameScores::FocusQuest(r.scores.clone())),
    ];
    for scores in games.into_iter().flatten() {
        let instrument = for_game(&scores);
        sections.push(instrument.to_structured_input(&scores.score_entries()));
    }

    Ok(sections.concat())
}
