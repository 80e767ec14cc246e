use axum::{extract::Path, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::content::{affirmation_for, find_badge, AchievementBadge};
use crate::errors::AppError;

/// GET /api/v1/content/affirmation
pub async fn handle_daily_affirmation() -> Json<Value> {
    let today = Utc::now().date_naive();
    Json(json!({
        "date": today,
        "affirmation": affirmation_for(today),
    }))
}

/// GET /api/v1/content/badges/:id
pub async fn handle_get_badge(
    Path(id): Path<String>,
) -> Result<Json<&'static AchievementBadge>, AppError> {
    find_badge(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Badge {id} not found")))
}
