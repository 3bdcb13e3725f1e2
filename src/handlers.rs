use crate::catalog;
use crate::errors::AppError;
use crate::models::{
    CreatePhraseRequest, HistoryResponse, Pack, Phrase, SelectPhraseRequest, SessionView,
    Statistics, TapResponse, TargetRequest, TargetsResponse, UpdatePhraseRequest,
};
use crate::session::{Target, MAX_TARGET, MIN_TARGET, PRESET_TARGETS};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.session.view()))
}

pub async fn get_packs(State(state): State<AppState>) -> Json<Vec<Pack>> {
    let data = state.data.lock().await;
    Json(catalog::packs(data.phrases.phrases()))
}

pub async fn get_targets() -> Json<TargetsResponse> {
    Json(TargetsResponse {
        presets: PRESET_TARGETS,
        min: MIN_TARGET,
        max: MAX_TARGET,
    })
}

pub async fn create_phrase(
    State(state): State<AppState>,
    Json(payload): Json<CreatePhraseRequest>,
) -> Result<(StatusCode, Json<Phrase>), AppError> {
    let phrase = payload.into_phrase()?;
    let mut data = state.data.lock().await;
    if !data.phrases.add(phrase.clone()).await {
        return Err(AppError::bad_request("phrase id already exists"));
    }
    info!(id = %phrase.id, "custom phrase added");
    Ok((StatusCode::CREATED, Json(phrase)))
}

pub async fn update_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePhraseRequest>,
) -> Result<Json<Phrase>, AppError> {
    let update = payload.into_update()?;
    let mut data = state.data.lock().await;
    data.phrases
        .update(&id, &update)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no custom phrase with id '{id}'")))
}

pub async fn delete_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut data = state.data.lock().await;
    if data.phrases.remove(&id).await {
        info!(%id, "custom phrase removed");
    }
    StatusCode::NO_CONTENT
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let data = state.data.lock().await;
    Json(data.session.view())
}

pub async fn tap(State(state): State<AppState>) -> Json<TapResponse> {
    let mut data = state.data.lock().await;
    let recorded = data.tap().await;
    Json(TapResponse {
        session: data.session.view(),
        recorded,
    })
}

pub async fn reset_session(State(state): State<AppState>) -> Json<SessionView> {
    let mut data = state.data.lock().await;
    data.session.reset();
    Json(data.session.view())
}

pub async fn set_target(
    State(state): State<AppState>,
    Json(payload): Json<TargetRequest>,
) -> Result<Json<SessionView>, AppError> {
    let target = Target::new(payload.target)?;
    let mut data = state.data.lock().await;
    data.choose_target(target);
    Ok(Json(data.session.view()))
}

pub async fn select_phrase(
    State(state): State<AppState>,
    Json(payload): Json<SelectPhraseRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut data = state.data.lock().await;
    let phrase = data
        .find_phrase(&payload.phrase_id)
        .ok_or_else(|| AppError::not_found(format!("no phrase with id '{}'", payload.phrase_id)))?;
    data.choose_phrase(phrase);
    Ok(Json(data.session.view()))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let data = state.data.lock().await;
    Json(HistoryResponse {
        entries: data.history.entries().to_vec(),
        days: data.history.group_by_day(),
    })
}

pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    let mut data = state.data.lock().await;
    data.history.clear().await;
    info!("history cleared");
    StatusCode::NO_CONTENT
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Statistics> {
    let data = state.data.lock().await;
    Json(build_stats(data.history.entries()))
}
