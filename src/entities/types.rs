//! Wire types for the entity extraction service.

use crate::nlp::{EntityCategory, RecognitionError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page index reported when a bulk page omits `docIndex`.
pub const DEFAULT_DOC_INDEX: i64 = 0;
/// Page number reported when a bulk page omits `pageNum`.
pub const DEFAULT_PAGE_NUM: i64 = 1;

/// Errors emitted while extracting entities.
#[derive(Debug, Error)]
pub enum EntityError {
    /// The recognizer rejected the text.
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
    /// The blocking recognition task panicked or was cancelled.
    #[error("Recognition task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Restricts results to the listed categories; an absent filter keeps everything.
///
/// Category names are matched case-insensitively; unknown names match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    allowed: Option<Vec<String>>,
}

impl EntityFilter {
    /// A filter that keeps every category.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from the optional `entityTypes` list of a request.
    pub fn from_names(names: Option<Vec<String>>) -> Self {
        Self {
            allowed: names.map(|names| names.into_iter().map(|n| n.to_lowercase()).collect()),
        }
    }

    /// Whether entities of `category` pass the filter.
    pub fn allows(&self, category: EntityCategory) -> bool {
        self.allowed
            .as_ref()
            .is_none_or(|names| names.iter().any(|name| name == category.as_str()))
    }
}

/// Body of `POST /api/ner`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NerRequest {
    /// Text to analyze.
    pub text: String,
    /// Optional category filter.
    #[serde(default)]
    pub entity_types: Option<Vec<String>>,
}

/// Body of `POST /api/ner-bulk`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkNerRequest {
    /// Pages to analyze, in order.
    pub pages: Vec<PageInput>,
    /// Optional category filter applied to every page.
    #[serde(default)]
    pub entity_types: Option<Vec<String>>,
}

/// One page of a bulk request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    /// Page text; pages without it are skipped.
    #[serde(default)]
    pub text: Option<String>,
    /// Index of the document the page belongs to.
    #[serde(default)]
    pub doc_index: Option<i64>,
    /// Page number within the document.
    #[serde(default)]
    pub page_num: Option<i64>,
}

/// An entity located in the submitted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOccurrence {
    /// Surface text.
    pub text: String,
    /// Front-end category.
    pub entity_type: EntityCategory,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    /// Sentence containing the entity.
    pub sentence: String,
    /// Recognizer label the category was derived from.
    pub label: String,
    /// Source document index; only set for bulk results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_index: Option<i64>,
    /// Source page number; only set for bulk results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<i64>,
}

/// Entities found on one bulk page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntities {
    /// Document index echoed from the request.
    pub doc_index: i64,
    /// Page number echoed from the request.
    pub page_num: i64,
    /// Entities found on the page.
    pub entities: Vec<EntityOccurrence>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_defaults_to_everything() {
        let filter = EntityFilter::all();
        assert!(filter.allows(EntityCategory::People));
        assert!(filter.allows(EntityCategory::Custom));
    }

    #[test]
    fn filter_matches_listed_names_only() {
        let filter = EntityFilter::from_names(Some(vec!["People".into(), "bogus".into()]));
        assert!(filter.allows(EntityCategory::People));
        assert!(!filter.allows(EntityCategory::Places));
        assert!(!EntityFilter::from_names(Some(Vec::new())).allows(EntityCategory::People));
    }

    #[test]
    fn page_fields_are_optional() {
        let request: BulkNerRequest = serde_json::from_value(json!({
            "pages": [{"text": "A"}, {"docIndex": 3, "pageNum": 7}],
            "entityTypes": ["places"]
        }))
        .expect("parse");
        assert_eq!(request.pages[0].text.as_deref(), Some("A"));
        assert_eq!(request.pages[0].doc_index, None);
        assert_eq!(request.pages[1].doc_index, Some(3));
        assert_eq!(request.entity_types, Some(vec!["places".to_string()]));
    }

    #[test]
    fn occurrences_use_camel_case_and_omit_page_fields() {
        let occurrence = EntityOccurrence {
            text: "Paris".into(),
            entity_type: EntityCategory::Places,
            start: 10,
            end: 15,
            sentence: "We flew to Paris.".into(),
            label: "GPE".into(),
            doc_index: None,
            page_num: None,
        };
        assert_eq!(
            serde_json::to_value(&occurrence).expect("serialize"),
            json!({
                "text": "Paris",
                "entityType": "places",
                "start": 10,
                "end": 15,
                "sentence": "We flew to Paris.",
                "label": "GPE"
            })
        );
    }
}
