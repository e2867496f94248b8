use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF held in memory.
///
/// Malformed or non-PDF bytes come back as an extraction error, surfaced to
/// the client as a 500 like every other pipeline failure.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Extraction(e.to_string()))
}
