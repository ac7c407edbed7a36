//! Byte-to-character offset conversion.
//!
//! Regex and slicing work on byte offsets; clients index text by character.

/// Precomputed byte → character index table for one string.
pub struct CharOffsets {
    // char index of every char boundary, indexed by byte offset; `None` inside a code point
    table: Vec<Option<usize>>,
}

impl CharOffsets {
    /// Build the table for `text`.
    pub fn new(text: &str) -> Self {
        let mut table = vec![None; text.len() + 1];
        let mut count = 0;
        for (byte_idx, _) in text.char_indices() {
            table[byte_idx] = Some(count);
            count += 1;
        }
        table[text.len()] = Some(count);
        Self { table }
    }

    /// Character index for a byte offset on a char boundary.
    ///
    /// Offsets inside a code point resolve to the character containing them.
    pub fn char_index(&self, byte_offset: usize) -> usize {
        let capped = byte_offset.min(self.table.len() - 1);
        self.table[..=capped]
            .iter()
            .rev()
            .find_map(|entry| *entry)
            .unwrap_or(0)
    }
}
