use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::skills::JobField;
use crate::extraction::{parse_resume, text};
use crate::models::record::{DisplayRecord, ExtractedRecord};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ParseResumeResponse {
    pub job_field: JobField,
    pub record: ExtractedRecord,
    pub display: DisplayRecord,
}

/// POST /api/v1/resumes/parse
///
/// Multipart form with a `file` part (the PDF) and an optional `job_field`
/// part (category label; unrecognized labels fall back to "general"). On
/// success the record is appended to the ledger and returned alongside its
/// display rendering. An unreadable document aborts before anything is stored.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut pdf_bytes: Option<bytes::Bytes> = None;
    let mut job_field = JobField::General;

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = part.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("file") => {
                pdf_bytes = Some(part.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            Some("job_field") => {
                let label = part
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read job_field: {e}")))?;
                job_field = JobField::from_label(label.trim());
            }
            _ => {}
        }
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("Missing 'file' part in upload".to_string()))?;
    if pdf_bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let resume_text = text::extract_text(&pdf_bytes)?;
    let record = parse_resume(&resume_text, job_field);

    let ledger = state.ledger.lock().await;
    ledger.append(&record)?;
    info!(
        "Parsed resume ({:?}) appended to {}",
        job_field,
        ledger.path().display()
    );
    let display = DisplayRecord::from_record(&record);
    Ok(Json(ParseResumeResponse {
        job_field,
        record,
        display,
    }))
}
