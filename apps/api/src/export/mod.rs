//! Export: checks the identity precondition, lays the record out, and serializes the
//! result to PDF bytes.
//!
//! Layout and serialization are CPU-bound. [`export_async`] runs them on a blocking
//! thread with an owned snapshot of the record, so the caller's record is never touched.

pub mod handlers;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

use crate::layout::{compose_resume, PageConfig};
use crate::resume::models::{PersonalInfo, ResumeDraft};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("First and last name are required to export a resume")]
    MissingIdentity,

    #[error("Failed to compose document: {0}")]
    Composition(String),
}

/// A finished export. Only ever built whole; failures never yield partial bytes.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Bytes,
    pub page_count: usize,
}

/// `<first>_<last>_Resume.pdf`, with each name trimmed and inner whitespace runs
/// replaced by `_`.
pub fn artifact_file_name(info: &PersonalInfo) -> String {
    let part = |s: &str| s.split_whitespace().collect::<Vec<_>>().join("_");
    format!(
        "{}_{}_Resume.pdf",
        part(&info.first_name),
        part(&info.last_name)
    )
}

/// Personal info of a record that has both names, else [`ExportError::MissingIdentity`].
pub fn require_identity(draft: &ResumeDraft) -> Result<&PersonalInfo, ExportError> {
    draft
        .personal_info
        .as_ref()
        .filter(|info| !info.first_name.trim().is_empty() && !info.last_name.trim().is_empty())
        .ok_or(ExportError::MissingIdentity)
}

/// Lays out `draft` and serializes it to a PDF artifact named `file_name`.
pub fn export(
    draft: &ResumeDraft,
    file_name: &str,
    config: &PageConfig,
) -> Result<Artifact, ExportError> {
    require_identity(draft)?;

    let doc = compose_resume(draft, config);
    let mut buf = Vec::new();
    pdf::write_pdf(&doc, &mut buf).map_err(|e| ExportError::Composition(e.to_string()))?;

    debug!(
        pages = doc.pages.len(),
        lines = doc.lines().count(),
        bytes = buf.len(),
        "Resume composed"
    );
    Ok(Artifact {
        file_name: file_name.to_string(),
        bytes: Bytes::from(buf),
        page_count: doc.pages.len(),
    })
}

/// Runs [`export`] on the blocking pool, naming the artifact from the record itself.
pub async fn export_async(draft: ResumeDraft, config: PageConfig) -> Result<Artifact, ExportError> {
    let file_name = artifact_file_name(require_identity(&draft)?);

    let artifact = tokio::task::spawn_blocking(move || export(&draft, &file_name, &config))
        .await
        .map_err(|e| ExportError::Composition(format!("spawn_blocking failed in export: {e}")))??;

    info!(
        file_name = %artifact.file_name,
        pages = artifact.page_count,
        "Resume exported"
    );
    Ok(artifact)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
