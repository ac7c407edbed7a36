//! Grouping of shared keys across documents and pairwise connection construction.

use crate::store::DocumentId;
use std::collections::{BTreeMap, BTreeSet};

/// Unordered pair of distinct documents, stored as `(smaller, larger)`.
pub type Connection = (DocumentId, DocumentId);

/// Keys found in two or more documents, with the connections they imply.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SharedGroups {
    /// Every document pair sharing at least one key.
    pub connections: BTreeSet<Connection>,
    /// Shared key → ids of the documents containing it, ascending.
    pub shared: BTreeMap<String, Vec<DocumentId>>,
}

/// Group `(key, document)` occurrences and keep keys present in at least two documents.
///
/// Repeated occurrences of a key inside one document count once.
pub fn group_shared<I>(occurrences: I) -> SharedGroups
where
    I: IntoIterator<Item = (String, DocumentId)>,
{
    let mut by_key: BTreeMap<String, BTreeSet<DocumentId>> = BTreeMap::new();
    for (key, doc_id) in occurrences {
        by_key.entry(key).or_default().insert(doc_id);
    }

    let shared: BTreeMap<String, Vec<DocumentId>> = by_key
        .into_iter()
        .filter(|(_, docs)| docs.len() > 1)
        .map(|(key, docs)| (key, docs.into_iter().collect()))
        .collect();

    let mut connections = BTreeSet::new();
    for docs in shared.values() {
        for (idx, &left) in docs.iter().enumerate() {
            for &right in &docs[idx + 1..] {
                connections.insert((left.min(right), left.max(right)));
            }
        }
    }

    SharedGroups {
        connections,
        shared,
    }
}
