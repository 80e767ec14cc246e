use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::models::ResumeDraft;
use crate::resume::validation::{normalize_draft, validate_draft};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpdateResponse {
    pub resume: ResumeDraft,
    /// False when the store rejected the write; the merged record is still returned.
    pub persisted: bool,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDraft> {
    Json(state.records().load().await)
}

/// PATCH /api/v1/resume
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Json(mut patch): Json<ResumeDraft>,
) -> Result<Json<ResumeUpdateResponse>, AppError> {
    normalize_draft(&mut patch);
    validate_draft(&patch)?;

    let saved = state.records().merge(patch).await;
    Ok(Json(ResumeUpdateResponse {
        resume: saved.value,
        persisted: saved.persisted,
    }))
}

/// DELETE /api/v1/resume
///
/// Clears the record and the progress ledger.
pub async fn handle_reset_resume(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.records().reset().await?;
    info!("Resume data and progress reset");
    Ok(StatusCode::NO_CONTENT)
}
