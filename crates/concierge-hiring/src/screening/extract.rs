use super::domain::ResumeUpload;

/// Outcome of résumé text extraction. Failure is explicit so the caller
/// decides whether to degrade to a fallback decode or surface the problem.
#[derive(Debug)]
pub enum Extraction {
    Extracted(String),
    Failed(ExtractionError),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("pdf text extraction failed: {0}")]
    Pdf(String),
    #[error("uploaded file was empty")]
    EmptyUpload,
}

/// Best-effort text extraction for a résumé payload.
///
/// Already-extracted text passes through untouched. PDF uploads (detected by
/// magic bytes or file name) go through `pdf-extract`; anything else decodes
/// as lossy UTF-8, which is total.
pub fn extract_resume(upload: &ResumeUpload) -> Extraction {
    match upload {
        ResumeUpload::Text(text) => Extraction::Extracted(text.clone()),
        ResumeUpload::File { name, data } => {
            if data.is_empty() {
                return Extraction::Failed(ExtractionError::EmptyUpload);
            }

            if looks_like_pdf(name, data) {
                match pdf_extract::extract_text_from_mem(data) {
                    Ok(text) => Extraction::Extracted(text),
                    Err(err) => Extraction::Failed(ExtractionError::Pdf(err.to_string())),
                }
            } else {
                Extraction::Extracted(String::from_utf8_lossy(data).into_owned())
            }
        }
    }
}

/// Lossy UTF-8 view of the raw payload, used as the fallback path when PDF
/// extraction fails.
pub fn lossy_text(upload: &ResumeUpload) -> String {
    match upload {
        ResumeUpload::Text(text) => text.clone(),
        ResumeUpload::File { data, .. } => String::from_utf8_lossy(data).into_owned(),
    }
}

fn looks_like_pdf(name: &str, data: &[u8]) -> bool {
    if data.starts_with(b"%PDF") {
        return true;
    }

    mime_guess::from_path(name)
        .first()
        .map(|guess| guess == mime::APPLICATION_PDF)
        .unwrap_or(false)
}
