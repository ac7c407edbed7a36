//! Heuristic sentence splitting.
//!
//! Text is split after `.` or `?` when the terminator is followed by whitespace, unless the
//! terminator closes an abbreviation: a lone capital initial (`J.`), a capital+lowercase pair
//! (`Mr.`, `Dr.`) or a dotted letter pair (`e.g.`, `U.S.`).

use std::ops::Range;

/// Byte ranges of the trimmed, non-empty sentences in `text`.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;

    for (pos, &(byte_idx, ch)) in chars.iter().enumerate() {
        if pos == 0 || !ch.is_whitespace() {
            continue;
        }
        let terminator = chars[pos - 1].1;
        if terminator != '.' && terminator != '?' {
            continue;
        }
        if ends_with_abbreviation(&chars[..pos]) {
            continue;
        }
        push_trimmed(text, start..byte_idx, &mut spans);
        start = byte_idx + ch.len_utf8();
    }
    push_trimmed(text, start..text.len(), &mut spans);
    spans
}

/// Trimmed, non-empty sentences of `text`, in order.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

fn push_trimmed(text: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let piece = &text[range.clone()];
    let leading = piece.len() - piece.trim_start().len();
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return;
    }
    let begin = range.start + leading;
    spans.push(begin..begin + trimmed.len());
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// `head` ends with the terminator; decide whether it belongs to an abbreviation.
fn ends_with_abbreviation(head: &[(usize, char)]) -> bool {
    let n = head.len();
    let at = |back: usize| -> Option<char> { n.checked_sub(back).map(|idx| head[idx].1) };

    // `e.g.` / `U.S.` / `a.m?`
    if let (Some(a), Some('.'), Some(b)) = (at(4), at(3), at(2)) {
        if is_word_char(a) && is_word_char(b) {
            return true;
        }
    }

    if at(1) != Some('.') {
        return false;
    }

    // `Mr.` / `Dr.` / `St.`
    if let (Some(upper), Some(lower)) = (at(3), at(2)) {
        if upper.is_uppercase() && lower.is_lowercase() {
            return true;
        }
    }

    // lone initial `J.`
    match (at(2), at(3)) {
        (Some(initial), None) => initial.is_uppercase(),
        (Some(initial), Some(before)) => initial.is_uppercase() && !is_word_char(before),
        _ => false,
    }
}
