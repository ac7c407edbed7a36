//! Per-document sentiment polarity.

use crate::nlp::SentimentScorer;
use crate::store::{Document, DocumentId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Score every document's full text.
pub fn document_polarities(
    documents: &[Arc<Document>],
    scorer: &dyn SentimentScorer,
) -> BTreeMap<DocumentId, f64> {
    documents
        .iter()
        .map(|doc| (doc.id, scorer.polarity(&doc.text)))
        .collect()
}
