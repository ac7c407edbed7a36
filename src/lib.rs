#![deny(missing_docs)]

//! Core library for the doclens document analysis and entity extraction services.

/// Cross-document analyses over stored documents.
pub mod analysis;
/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Entity extraction with front-end categories and character offsets.
pub mod entities;
/// Text extraction from uploaded files.
pub mod extract;
/// Structured logging and tracing setup.
pub mod logging;
/// Upload metrics helpers.
pub mod metrics;
/// Entity recognition and sentiment backends.
pub mod nlp;
/// Listener binding for the service binaries.
pub mod server;
/// In-memory document storage.
pub mod store;
/// Sentence splitting, date finding, and offset helpers.
pub mod text;
