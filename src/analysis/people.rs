//! People named in more than one document.

use super::connections::{SharedGroups, group_shared};
use crate::nlp::labels::PERSON;
use crate::nlp::{EntityRecognizer, RecognitionError};
use crate::store::Document;
use std::sync::Arc;

/// Group person entities longer than `min_chars` characters that appear in two or more documents.
///
/// Names are matched exactly; no alias resolution is attempted.
pub fn shared_people(
    documents: &[Arc<Document>],
    recognizer: &dyn EntityRecognizer,
    min_chars: usize,
) -> Result<SharedGroups, RecognitionError> {
    let mut occurrences = Vec::new();
    for doc in documents {
        let entities = recognizer.recognize(&doc.text)?;
        occurrences.extend(
            entities
                .into_iter()
                .filter(|entity| entity.label == PERSON && entity.text.chars().count() > min_chars)
                .map(|entity| (entity.text, doc.id)),
        );
    }
    tracing::debug!(
        documents = documents.len(),
        mentions = occurrences.len(),
        "Collected person mentions"
    );
    Ok(group_shared(occurrences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicRecognizer, RecognizedEntity};

    fn doc(id: u64, text: &str) -> Arc<Document> {
        Arc::new(Document {
            id,
            name: format!("doc-{id}.pdf"),
            text: text.to_string(),
        })
    }

    #[test]
    fn shared_names_connect_documents() {
        let docs = vec![
            doc(0, "Harry Truman met advisers in Boston."),
            doc(1, "Reporters followed Harry Truman all week."),
            doc(2, "Jonathan Smith stayed home."),
            doc(3, "Jon Smith wrote a letter."),
        ];
        let groups = shared_people(&docs, &HeuristicRecognizer::new(), 3).expect("people");
        assert_eq!(groups.shared.get("Harry Truman"), Some(&vec![0, 1]));
        assert!(!groups.shared.contains_key("Jon Smith"));
        assert!(!groups.shared.contains_key("Jonathan Smith"));
        assert_eq!(groups.connections.into_iter().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn offices_do_not_connect_documents() {
        let docs = vec![
            doc(0, "The Secretary of State arrived late."),
            doc(1, "Critics wrote to the Minister of State yesterday."),
        ];
        let groups = shared_people(&docs, &HeuristicRecognizer::new(), 3).expect("people");
        assert!(groups.shared.is_empty(), "{:?}", groups.shared);
        assert!(groups.connections.is_empty());
    }

    struct FixedRecognizer(Vec<(&'static str, &'static str)>);

    impl EntityRecognizer for FixedRecognizer {
        fn model_name(&self) -> &str {
            "fixed"
        }

        fn recognize(&self, _text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
            Ok(self
                .0
                .iter()
                .map(|(text, label)| RecognizedEntity {
                    text: text.to_string(),
                    label: label.to_string(),
                    range: 0..text.len(),
                })
                .collect())
        }
    }

    #[test]
    fn short_names_and_other_labels_are_ignored() {
        let recognizer =
            FixedRecognizer(vec![("Bob", PERSON), ("Paris", "GPE"), ("Alice", PERSON)]);
        let docs = vec![doc(0, "a"), doc(1, "b")];
        let groups = shared_people(&docs, &recognizer, 3).expect("people");
        assert_eq!(groups.shared.keys().collect::<Vec<_>>(), vec!["Alice"]);
    }

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn model_name(&self) -> &str {
            "failing"
        }

        fn recognize(&self, _text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
            Err(RecognitionError::Failed("model unavailable".into()))
        }
    }

    #[test]
    fn recognizer_failures_propagate() {
        let docs = vec![doc(0, "text")];
        let err = shared_people(&docs, &FailingRecognizer, 3).expect_err("failure");
        assert!(err.to_string().contains("model unavailable"));
    }
}
