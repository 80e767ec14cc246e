use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::content::export_success_message;
use crate::errors::AppError;
use crate::export::{export_async, require_identity, ExportError};
use crate::layout::{compose_resume, Document};
use crate::state::AppState;

/// Name of the response header carrying the celebration message.
pub const COMPLETION_MESSAGE_HEADER: &str = "x-completion-message";

/// POST /api/v1/export
///
/// Exports the stored record as a PDF download.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let draft = state.records().load().await;
    let completed = state
        .ledger()
        .load()
        .await
        .map_or(0, |p| p.completed_sections.len());

    let artifact = export_async(draft, state.page_config.clone()).await?;

    let disposition = HeaderValue::from_str(&content_disposition(&artifact.file_name))
        .map_err(|e| ExportError::Composition(format!("invalid file name header: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
            (
                header::HeaderName::from_static(COMPLETION_MESSAGE_HEADER),
                HeaderValue::from_static(export_success_message(completed)),
            ),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// `attachment` disposition with an ASCII-only file name; other characters become `_`.
fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{ascii}\"")
}

/// GET /api/v1/export/layout
///
/// The laid-out document as JSON, for previews.
pub async fn handle_export_layout(State(state): State<AppState>) -> Result<Json<Document>, AppError> {
    let draft = state.records().load().await;
    require_identity(&draft)?;

    let config = state.page_config.clone();
    let doc = tokio::task::spawn_blocking(move || compose_resume(&draft, &config))
        .await
        .map_err(|e| ExportError::Composition(format!("spawn_blocking failed in layout: {e}")))?;
    Ok(Json(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_is_ascii() {
        assert_eq!(
            content_disposition("José_Núñez_Resume.pdf"),
            "attachment; filename=\"Jos__N__ez_Resume.pdf\""
        );
        assert!(HeaderValue::from_str(&content_disposition("a\"b.pdf")).is_ok());
    }
}
