//! Entity extraction service wrapping an [`EntityRecognizer`].

use crate::{
    entities::types::{
        DEFAULT_DOC_INDEX, DEFAULT_PAGE_NUM, EntityError, EntityFilter, EntityOccurrence,
        PageEntities, PageInput,
    },
    nlp::{EntityRecognizer, HeuristicRecognizer, RecognitionError, category_for_label},
    text::{CharOffsets, sentence_spans},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Abstraction over entity extraction used by the HTTP surface.
#[async_trait]
pub trait EntityApi: Send + Sync {
    /// Identifier of the underlying recognizer.
    fn model_name(&self) -> String;

    /// Entities in `text` that pass `filter`, ordered by position.
    async fn extract(
        &self,
        text: String,
        filter: EntityFilter,
    ) -> Result<Vec<EntityOccurrence>, EntityError>;

    /// Entities for each page that carries text, in request order.
    async fn extract_bulk(
        &self,
        pages: Vec<PageInput>,
        filter: EntityFilter,
    ) -> Result<Vec<PageEntities>, EntityError>;
}

/// Maps recognizer output onto front-end categories with character offsets and sentences.
#[derive(Clone)]
pub struct EntityService {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl Default for EntityService {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicRecognizer::new()))
    }
}

impl EntityService {
    /// Wrap a recognizer.
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }
}

/// Run the recognizer over `text` and build occurrences for entities passing `filter`.
pub fn locate_entities(
    recognizer: &dyn EntityRecognizer,
    text: &str,
    filter: &EntityFilter,
) -> Result<Vec<EntityOccurrence>, RecognitionError> {
    let entities = recognizer.recognize(text)?;
    let offsets = CharOffsets::new(text);
    let sentences = sentence_spans(text);

    let occurrences = entities
        .into_iter()
        .filter_map(|entity| {
            let entity_type = category_for_label(&entity.label);
            if !filter.allows(entity_type) {
                return None;
            }
            let idx = sentences.partition_point(|span| span.end <= entity.range.start);
            let sentence = match sentences.get(idx) {
                Some(span) if span.start <= entity.range.start => &text[span.clone()],
                _ => text.trim(),
            };
            Some(EntityOccurrence {
                start: offsets.char_index(entity.range.start),
                end: offsets.char_index(entity.range.end),
                sentence: sentence.to_string(),
                text: entity.text,
                entity_type,
                label: entity.label,
                doc_index: None,
                page_num: None,
            })
        })
        .collect();
    Ok(occurrences)
}

/// Extract entities page by page, tagging each with its page coordinates.
pub fn locate_page_entities(
    recognizer: &dyn EntityRecognizer,
    pages: Vec<PageInput>,
    filter: &EntityFilter,
) -> Result<Vec<PageEntities>, RecognitionError> {
    let mut results = Vec::with_capacity(pages.len());
    for page in pages {
        let Some(text) = page.text else {
            continue;
        };
        let doc_index = page.doc_index.unwrap_or(DEFAULT_DOC_INDEX);
        let page_num = page.page_num.unwrap_or(DEFAULT_PAGE_NUM);
        let entities = locate_entities(recognizer, &text, filter)?
            .into_iter()
            .map(|occurrence| EntityOccurrence {
                doc_index: Some(doc_index),
                page_num: Some(page_num),
                ..occurrence
            })
            .collect();
        results.push(PageEntities {
            doc_index,
            page_num,
            entities,
        });
    }
    Ok(results)
}

#[async_trait]
impl EntityApi for EntityService {
    fn model_name(&self) -> String {
        self.recognizer.model_name().to_string()
    }

    async fn extract(
        &self,
        text: String,
        filter: EntityFilter,
    ) -> Result<Vec<EntityOccurrence>, EntityError> {
        let recognizer = Arc::clone(&self.recognizer);
        let chars = text.chars().count();
        let occurrences = tokio::task::spawn_blocking(move || {
            locate_entities(recognizer.as_ref(), &text, &filter)
        })
        .await??;
        tracing::debug!(chars, entities = occurrences.len(), "Extracted entities");
        Ok(occurrences)
    }

    async fn extract_bulk(
        &self,
        pages: Vec<PageInput>,
        filter: EntityFilter,
    ) -> Result<Vec<PageEntities>, EntityError> {
        let recognizer = Arc::clone(&self.recognizer);
        let requested = pages.len();
        let results = tokio::task::spawn_blocking(move || {
            locate_page_entities(recognizer.as_ref(), pages, &filter)
        })
        .await??;
        tracing::debug!(requested, processed = results.len(), "Extracted entities in bulk");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntityCategory, RecognizedEntity};

    fn service() -> EntityService {
        EntityService::default()
    }

    #[tokio::test]
    async fn offsets_are_character_based() {
        let text = "Café owners met. Later Harry Truman arrived in Paris.".to_string();
        let entities = service()
            .extract(text.clone(), EntityFilter::all())
            .await
            .expect("extract");
        let truman = entities
            .iter()
            .find(|e| e.text == "Harry Truman")
            .expect("person found");
        let chars: Vec<char> = text.chars().collect();
        let slice: String = chars[truman.start..truman.end].iter().collect();
        assert_eq!(slice, "Harry Truman");
        assert_eq!(truman.entity_type, EntityCategory::People);
        assert_eq!(truman.label, "PERSON");
        assert_eq!(truman.sentence, "Later Harry Truman arrived in Paris.");
        assert!(truman.doc_index.is_none());
    }

    #[tokio::test]
    async fn filter_limits_categories() {
        let entities = service()
            .extract(
                "Harry Truman arrived in Paris.".into(),
                EntityFilter::from_names(Some(vec!["places".into()])),
            )
            .await
            .expect("extract");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Paris");
        assert_eq!(entities[0].entity_type, EntityCategory::Places);
    }

    #[tokio::test]
    async fn bulk_skips_pages_without_text_and_applies_defaults() {
        let pages = vec![
            PageInput {
                text: Some("Harry Truman spoke.".into()),
                doc_index: None,
                page_num: None,
            },
            PageInput {
                text: None,
                doc_index: Some(1),
                page_num: Some(2),
            },
            PageInput {
                text: Some("Paris was calm.".into()),
                doc_index: Some(4),
                page_num: Some(9),
            },
        ];
        let results = service()
            .extract_bulk(pages, EntityFilter::all())
            .await
            .expect("bulk");
        assert_eq!(results.len(), 2);
        assert_eq!((results[0].doc_index, results[0].page_num), (0, 1));
        assert_eq!((results[1].doc_index, results[1].page_num), (4, 9));
        let paris = &results[1].entities[0];
        assert_eq!(paris.doc_index, Some(4));
        assert_eq!(paris.page_num, Some(9));
    }

    struct CustomLabelRecognizer;

    impl EntityRecognizer for CustomLabelRecognizer {
        fn model_name(&self) -> &str {
            "custom"
        }

        fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
            Ok(vec![RecognizedEntity {
                text: text.to_string(),
                label: "WORK_OF_ART".into(),
                range: 0..text.len(),
            }])
        }
    }

    #[test]
    fn unknown_labels_become_custom() {
        let found = locate_entities(&CustomLabelRecognizer, "Guernica", &EntityFilter::all())
            .expect("locate");
        assert_eq!(found[0].entity_type, EntityCategory::Custom);
        assert_eq!(found[0].label, "WORK_OF_ART");
        assert_eq!(found[0].sentence, "Guernica");
    }

    #[test]
    fn reports_recognizer_model() {
        let svc = EntityService::new(Arc::new(CustomLabelRecognizer));
        assert_eq!(svc.model_name(), "custom");
    }
}
