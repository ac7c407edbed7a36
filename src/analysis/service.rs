//! Document service coordinating uploads, storage, and the cross-document analyses.

use crate::{
    analysis::{
        chronology, people, phrases, sentiment,
        types::{AnalysisError, AnalysisSettings, PeopleReport, PhraseReport, UploadedFile},
    },
    extract::{PdfTextExtractor, TextExtractor, is_pdf_filename},
    metrics::{MetricsSnapshot, UploadMetrics},
    nlp::{EntityRecognizer, HeuristicRecognizer, LexiconScorer, SentimentScorer},
    store::{DocumentId, DocumentStore, DocumentSummary},
    text::{DateFinder, StrictDateFinder},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Owns the document store and the NLP collaborators used by every analysis.
///
/// Extraction and analysis are CPU-bound, so each runs on the blocking pool against a
/// snapshot of the store. Construct the service once at startup and share it through an `Arc`.
pub struct DocumentService {
    store: DocumentStore,
    extractor: Arc<dyn TextExtractor>,
    recognizer: Arc<dyn EntityRecognizer>,
    scorer: Arc<dyn SentimentScorer>,
    dates: Arc<dyn DateFinder>,
    settings: AnalysisSettings,
    metrics: UploadMetrics,
}

/// Abstraction over the document service used by the HTTP surface.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Extract and store every acceptable file, returning the stored documents in upload order.
    async fn upload(&self, files: Vec<UploadedFile>) -> Result<Vec<DocumentSummary>, AnalysisError>;

    /// Number of documents currently stored.
    async fn document_count(&self) -> usize;

    /// Documents connected by identical sentences.
    async fn shared_phrases(&self) -> Result<PhraseReport, AnalysisError>;

    /// Documents connected by people they both mention.
    async fn shared_people(&self) -> Result<PeopleReport, AnalysisError>;

    /// Sentiment polarity of each stored document.
    async fn sentiment(&self) -> Result<BTreeMap<DocumentId, f64>, AnalysisError>;

    /// Chronology of dated sentences, one event per line.
    async fn chronology(&self) -> Result<String, AnalysisError>;

    /// Retrieve the current upload counters.
    async fn metrics_snapshot(&self) -> MetricsSnapshot;
}

impl DocumentService {
    /// Build a service with the bundled PDF, entity, sentiment, and date backends.
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            store: DocumentStore::new(),
            extractor: Arc::new(PdfTextExtractor::new()),
            recognizer: Arc::new(HeuristicRecognizer::new()),
            scorer: Arc::new(LexiconScorer::new()),
            dates: Arc::new(StrictDateFinder::new()),
            settings,
            metrics: UploadMetrics::new(),
        }
    }

    /// Replace the text extraction backend.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the entity recognition backend.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Replace the sentiment backend.
    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the date parsing backend.
    pub fn with_date_finder(mut self, dates: Arc<dyn DateFinder>) -> Self {
        self.dates = dates;
        self
    }

    /// Extract text from one file, returning `None` when it must be skipped.
    async fn extract(&self, file: UploadedFile) -> Option<(String, String)> {
        let UploadedFile { filename, bytes } = file;
        if !is_pdf_filename(&filename) {
            tracing::warn!(filename = %filename, "Skipping non-PDF file");
            return None;
        }
        tracing::debug!(filename = %filename, bytes = bytes.len(), "Extracting text");
        let extractor = Arc::clone(&self.extractor);
        match tokio::task::spawn_blocking(move || extractor.extract_text(&bytes)).await {
            Ok(Ok(text)) if text.trim().is_empty() => {
                tracing::warn!(filename = %filename, "No text extracted; skipping file");
                None
            }
            Ok(Ok(text)) => Some((filename, text)),
            Ok(Err(err)) => {
                tracing::error!(filename = %filename, error = %err, "Failed to extract text");
                None
            }
            Err(err) => {
                tracing::error!(filename = %filename, error = %err, "Extraction task failed");
                None
            }
        }
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, AnalysisError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(task).await?)
}

#[async_trait]
impl DocumentApi for DocumentService {
    async fn upload(
        &self,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<DocumentSummary>, AnalysisError> {
        if files.is_empty() {
            self.metrics.record_upload(0, 0);
            tracing::warn!("Upload request carried no files");
            return Err(AnalysisError::NoFilesUploaded);
        }

        let received = files.len();
        let mut accepted = Vec::with_capacity(received);
        for file in files {
            if let Some(entry) = self.extract(file).await {
                accepted.push(entry);
            }
        }
        let skipped = (received - accepted.len()) as u64;

        if accepted.is_empty() {
            self.metrics.record_upload(0, skipped);
            tracing::warn!(received, "No valid PDFs in upload");
            return Err(AnalysisError::NoValidPdfs);
        }

        let stored = self.store.insert_all(accepted).await;
        self.metrics.record_upload(stored.len() as u64, skipped);
        for summary in &stored {
            tracing::info!(doc_id = summary.id, filename = %summary.name, "Stored document");
        }
        Ok(stored)
    }

    async fn document_count(&self) -> usize {
        self.store.count().await
    }

    async fn shared_phrases(&self) -> Result<PhraseReport, AnalysisError> {
        let documents = self.store.snapshot().await;
        let min_chars = self.settings.min_sentence_chars;
        let groups = run_blocking(move || phrases::shared_sentences(&documents, min_chars)).await?;
        tracing::debug!(
            shared = groups.shared.len(),
            connections = groups.connections.len(),
            "Computed shared phrases"
        );
        Ok(groups.into())
    }

    async fn shared_people(&self) -> Result<PeopleReport, AnalysisError> {
        let documents = self.store.snapshot().await;
        let recognizer = Arc::clone(&self.recognizer);
        let min_chars = self.settings.min_person_chars;
        let groups = run_blocking(move || {
            people::shared_people(&documents, recognizer.as_ref(), min_chars)
        })
        .await??;
        tracing::debug!(
            shared = groups.shared.len(),
            connections = groups.connections.len(),
            "Computed shared people"
        );
        Ok(groups.into())
    }

    async fn sentiment(&self) -> Result<BTreeMap<DocumentId, f64>, AnalysisError> {
        let documents = self.store.snapshot().await;
        let scorer = Arc::clone(&self.scorer);
        run_blocking(move || sentiment::document_polarities(&documents, scorer.as_ref())).await
    }

    async fn chronology(&self) -> Result<String, AnalysisError> {
        let documents = self.store.snapshot().await;
        let dates = Arc::clone(&self.dates);
        run_blocking(move || {
            let events = chronology::collect_events(&documents, dates.as_ref());
            tracing::debug!(events = events.len(), "Collected dated events");
            chronology::render(&events)
        })
        .await
    }

    async fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot(self.store.count().await)
    }
}
