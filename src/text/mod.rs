//! Plain-text helpers shared by the analysis passes and the entity recognizer.

pub mod dates;
pub mod offsets;
pub mod sentences;

pub use dates::{DateFinder, DateMatch, StrictDateFinder, format_date};
pub use offsets::CharOffsets;
pub use sentences::{sentence_spans, split_sentences};
