use crate::errors::AppError;

/// Extracts plain text from a PDF byte stream.
///
/// Pages are extracted individually and concatenated in page order with no
/// separator between them; a page with no extractable text contributes an
/// empty string. An unparseable stream is the one propagating failure of the
/// whole extraction core.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        AppError::DocumentUnreadable(format!("Failed to extract text from PDF: {e}"))
    })?;
    Ok(pages.concat())
}
