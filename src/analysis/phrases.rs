//! Sentences shared verbatim between documents.

use super::connections::{SharedGroups, group_shared};
use crate::store::Document;
use crate::text::split_sentences;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Group sentences longer than `min_chars` characters that appear in two or more documents.
pub fn shared_sentences(documents: &[Arc<Document>], min_chars: usize) -> SharedGroups {
    let occurrences = documents.iter().flat_map(|doc| {
        split_sentences(&doc.text)
            .into_iter()
            .filter(|sentence| sentence.chars().count() > min_chars)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(move |sentence| (sentence, doc.id))
    });
    group_shared(occurrences)
}
