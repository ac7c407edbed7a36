//! Cross-document analysis: shared phrases, shared people, sentiment, and chronology.

pub mod chronology;
pub mod connections;
pub mod people;
pub mod phrases;
mod service;
pub mod sentiment;
pub mod types;

pub use connections::{Connection, SharedGroups};
pub use service::{DocumentApi, DocumentService};
pub use types::{AnalysisError, AnalysisSettings, PeopleReport, PhraseReport, UploadedFile};
