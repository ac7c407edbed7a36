//! Request, report, and error types for the document analysis service.

use super::connections::{Connection, SharedGroups};
use crate::nlp::RecognitionError;
use crate::store::DocumentId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors emitted by the document analysis service.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The upload request carried no files at all.
    #[error("No files uploaded")]
    NoFilesUploaded,
    /// Every uploaded file was skipped.
    #[error("No valid PDFs processed")]
    NoValidPdfs,
    /// The request body could not be read as a multipart upload.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
    /// Entity recognition failed while analyzing stored documents.
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
    /// A blocking analysis task panicked or was cancelled.
    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AnalysisError {
    /// Whether the error was caused by the client's request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NoFilesUploaded | Self::NoValidPdfs | Self::InvalidUpload(_)
        )
    }
}

/// A file received from a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied filename; empty when the part carried none.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Thresholds applied by the analysis passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Sentences must be longer than this many characters to be compared.
    pub min_sentence_chars: usize,
    /// Person names must be longer than this many characters to be compared.
    pub min_person_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_sentence_chars: crate::config::DEFAULT_MIN_SENTENCE_CHARS,
            min_person_chars: crate::config::DEFAULT_MIN_PERSON_CHARS,
        }
    }
}

impl From<&crate::config::Config> for AnalysisSettings {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            min_sentence_chars: config.min_sentence_chars,
            min_person_chars: config.min_person_chars,
        }
    }
}

/// Documents connected by identical sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhraseReport {
    /// Sorted document pairs sharing at least one sentence.
    pub connections: BTreeSet<Connection>,
    /// Shared sentence → ids of the documents containing it.
    pub shared_sentences: BTreeMap<String, Vec<DocumentId>>,
}

impl From<SharedGroups> for PhraseReport {
    fn from(groups: SharedGroups) -> Self {
        Self {
            connections: groups.connections,
            shared_sentences: groups.shared,
        }
    }
}

/// Documents connected by people they both mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeopleReport {
    /// Sorted document pairs mentioning at least one common person.
    pub connections: BTreeSet<Connection>,
    /// Person name → ids of the documents mentioning them.
    pub shared_people: BTreeMap<String, Vec<DocumentId>>,
}

impl From<SharedGroups> for PeopleReport {
    fn from(groups: SharedGroups) -> Self {
        Self {
            connections: groups.connections,
            shared_people: groups.shared,
        }
    }
}
