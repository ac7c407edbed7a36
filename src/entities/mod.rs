//! Entity extraction: recognizer output mapped onto front-end categories.

mod service;
pub mod types;

pub use service::{EntityApi, EntityService, locate_entities, locate_page_entities};
pub use types::{
    BulkNerRequest, EntityError, EntityFilter, EntityOccurrence, NerRequest, PageEntities,
    PageInput,
};
