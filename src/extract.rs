//! Text extraction for uploaded documents.
//!
//! Extraction is a collaborator: the document service hands over raw bytes and receives
//! plain UTF-8 text. The default backend is `pdf-extract`.

use thiserror::Error;

/// Errors raised by text extraction backends.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The PDF parser rejected the input.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Interface implemented by text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from a binary document.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extracts text from PDF files through `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Construct a new PDF extractor.
    pub const fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

/// Whether a client-supplied filename names a PDF (case-insensitive `.pdf` suffix).
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pdf_returns_error() {
        let err = PdfTextExtractor::new()
            .extract_text(b"not a pdf")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn pdf_filename_check_ignores_case() {
        assert!(is_pdf_filename("report.PDF"));
        assert!(is_pdf_filename("a.b.pdf"));
        assert!(!is_pdf_filename("notes.txt"));
        assert!(!is_pdf_filename("pdf"));
        assert!(!is_pdf_filename("archive.pdf.zip"));
    }
}
