//! Document text extraction: uploaded PDF bytes in, plain text out.

use anyhow::anyhow;
use bytes::Bytes;

use crate::errors::AppError;

/// Extracts the plain-text contents of an uploaded PDF.
///
/// `pdf-extract` is synchronous and CPU-bound, so the work runs on the
/// blocking pool and is awaited here.
pub async fn pdf_text(data: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task panicked: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}
