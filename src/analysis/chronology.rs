//! Timeline of dated sentences across all documents.

use crate::store::Document;
use crate::text::{DateFinder, format_date, split_sentences};
use std::sync::Arc;
use time::Date;

/// Text returned when no sentence carries a recognizable date.
pub const NO_DATED_EVENTS: &str = "No dated events found.";

/// A sentence anchored to the first date it mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEvent {
    /// First date found in the sentence.
    pub date: Date,
    /// The sentence itself, trimmed.
    pub text: String,
    /// Name of the document the sentence came from.
    pub source: String,
}

/// Collect dated sentences from every document, ordered by date.
///
/// Events sharing a date keep document order, then sentence order.
pub fn collect_events(documents: &[Arc<Document>], finder: &dyn DateFinder) -> Vec<DatedEvent> {
    let mut events: Vec<DatedEvent> = documents
        .iter()
        .flat_map(|doc| {
            split_sentences(&doc.text)
                .into_iter()
                .filter_map(move |sentence| {
                    finder.first_date(sentence).map(|date| DatedEvent {
                        date,
                        text: sentence.to_string(),
                        source: doc.name.clone(),
                    })
                })
        })
        .collect();
    events.sort_by_key(|event| event.date);
    events
}

/// Render events one per line as `YYYY-MM-DD: sentence (Source: name)`.
pub fn render(events: &[DatedEvent]) -> String {
    if events.is_empty() {
        return NO_DATED_EVENTS.to_string();
    }
    events
        .iter()
        .map(|event| {
            format!(
                "{}: {} (Source: {})",
                format_date(event.date),
                event.text,
                event.source
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
