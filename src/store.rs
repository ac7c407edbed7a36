//! In-memory document store.
//!
//! Documents live for the lifetime of the process. Ids are handed out under the write lock, so
//! they are strictly increasing from zero and never reused, even with concurrent uploads.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifier assigned to an uploaded document.
pub type DocumentId = u64;

/// A stored document and its extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Sequential identifier, starting at 0.
    pub id: DocumentId,
    /// Original filename supplied by the client.
    pub name: String,
    /// Full text extracted from the upload.
    pub text: String,
}

/// Public view of a stored document returned from uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Assigned identifier.
    pub id: DocumentId,
    /// Original filename.
    pub name: String,
}

#[derive(Default)]
struct StoreInner {
    next_id: DocumentId,
    documents: BTreeMap<DocumentId, Arc<Document>>,
}

impl StoreInner {
    fn push(&mut self, name: String, text: String) -> DocumentSummary {
        let id = self.next_id;
        self.next_id += 1;
        let summary = DocumentSummary {
            id,
            name: name.clone(),
        };
        self.documents.insert(id, Arc::new(Document { id, name, text }));
        summary
    }
}

/// Append-only document store shared across request handlers.
#[derive(Default)]
pub struct DocumentStore {
    inner: RwLock<StoreInner>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store several documents atomically, in order, returning their summaries.
    pub async fn insert_all(&self, entries: Vec<(String, String)>) -> Vec<DocumentSummary> {
        let mut guard = self.inner.write().await;
        entries
            .into_iter()
            .map(|(name, text)| guard.push(name, text))
            .collect()
    }

    /// Return every stored document ordered by id.
    pub async fn snapshot(&self) -> Vec<Arc<Document>> {
        self.inner.read().await.documents.values().cloned().collect()
    }

    /// Number of stored documents.
    pub async fn count(&self) -> usize {
        self.inner.read().await.documents.len()
    }
}
