pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers as content;
use crate::export::handlers as export;
use crate::progress::handlers as progress;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Record store
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume)
                .patch(resume::handle_update_resume)
                .delete(resume::handle_reset_resume),
        )
        // Progress ledger
        .route("/api/v1/progress", get(progress::handle_get_progress))
        .route(
            "/api/v1/progress/sections/:section/complete",
            post(progress::handle_complete_section),
        )
        .route(
            "/api/v1/progress/sections/:section/visit",
            post(progress::handle_visit_section),
        )
        // Export
        .route("/api/v1/export", post(export::handle_export))
        .route("/api/v1/export/layout", get(export::handle_export_layout))
        // Static content
        .route(
            "/api/v1/content/affirmation",
            get(content::handle_daily_affirmation),
        )
        .route("/api/v1/content/badges/:id", get(content::handle_get_badge))
        .with_state(state)
}
