use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::{completion_message, find_badge, motivational_message, AchievementBadge};
use crate::errors::AppError;
use crate::progress::models::{Section, UserProgress};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub progress: UserProgress,
    pub completion_percentage: u8,
    pub motivational_message: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompleteSectionRequest {
    /// Badge id to unlock along with the section.
    pub achievement: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionUpdateResponse {
    pub progress: UserProgress,
    pub persisted: bool,
    pub completion_percentage: u8,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static AchievementBadge>,
}

fn parse_section(raw: &str) -> Result<Section, AppError> {
    raw.parse().map_err(AppError::BadRequest)
}

/// GET /api/v1/progress
pub async fn handle_get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let progress = state.ledger().load_or_new().await;
    Json(ProgressResponse {
        completion_percentage: progress.completion_percentage(),
        motivational_message: motivational_message(progress.current_section),
        progress,
    })
}

/// POST /api/v1/progress/sections/:section/complete
pub async fn handle_complete_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    body: Option<Json<CompleteSectionRequest>>,
) -> Result<Json<SectionUpdateResponse>, AppError> {
    let section = parse_section(&section)?;
    let achievement = body
        .and_then(|Json(req)| req.achievement)
        .filter(|a| !a.trim().is_empty());
    let badge = achievement.as_deref().and_then(find_badge);

    let saved = state.ledger().mark_complete(section, achievement).await;
    Ok(Json(SectionUpdateResponse {
        completion_percentage: saved.value.completion_percentage(),
        persisted: saved.persisted,
        progress: saved.value,
        message: completion_message(section),
        badge,
    }))
}

/// POST /api/v1/progress/sections/:section/visit
pub async fn handle_visit_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionUpdateResponse>, AppError> {
    let section = parse_section(&section)?;

    let saved = state.ledger().visit(section).await;
    Ok(Json(SectionUpdateResponse {
        completion_percentage: saved.value.completion_percentage(),
        persisted: saved.persisted,
        progress: saved.value,
        message: motivational_message(Some(section)),
        badge: None,
    }))
}
