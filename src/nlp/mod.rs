//! Natural-language collaborators: entity recognition and sentiment scoring.
//!
//! Both are exposed as traits so the services can run against the bundled heuristic
//! backends or anything else that produces the same label taxonomy.

mod gazetteer;
pub mod heuristic;
pub mod labels;
pub mod sentiment;

pub use heuristic::HeuristicRecognizer;
pub use labels::{EntityCategory, category_for_label};
pub use sentiment::{LexiconScorer, SentimentScorer};

use std::ops::Range;
use thiserror::Error;

/// Errors raised by entity recognition backends.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The backend could not process the input text.
    #[error("Entity recognition failed: {0}")]
    Failed(String),
}

/// A single entity detected by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedEntity {
    /// Surface text as it appears in the input.
    pub text: String,
    /// Recognizer label (`PERSON`, `GPE`, ...).
    pub label: String,
    /// Byte range of the entity in the input.
    pub range: Range<usize>,
}

/// Interface implemented by entity recognition backends.
pub trait EntityRecognizer: Send + Sync {
    /// Human-readable model identifier reported by health checks.
    fn model_name(&self) -> &str;

    /// Detect entities in `text`, ordered by position and non-overlapping.
    fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError>;
}
