//! Rule-based entity recognizer.
//!
//! Two passes produce candidates: numeric patterns (money, percentages, times, dates,
//! quantities, ordinals, cardinals) and capitalized-word spans classified by honorifics,
//! suffixes, and gazetteers. Overlaps resolve to the earliest candidate, then the longest,
//! then the pattern listed first.

use super::gazetteer::{
    self, CARDINAL_WORDS, CONNECTORS, DOTTED_HONORIFICS, FAC_SUFFIXES, GPES, HONORIFICS,
    LOC_HEADS, LOC_SUFFIXES, LOCATIONS, ORDINAL_WORDS, ORG_HEADS, ORG_SUFFIXES,
    SENTENCE_STARTERS, SPAN_BREAKERS, UNITS,
};
use super::labels::{
    CARDINAL, DATE, FAC, GPE, LOC, MONEY, NORP, ORDINAL, ORG, PERCENT, PERSON, QUANTITY, TIME,
};
use super::{EntityRecognizer, RecognitionError, RecognizedEntity};
use crate::text::{DateFinder, StrictDateFinder};
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

/// Model identifier reported by [`HeuristicRecognizer::model_name`].
pub const HEURISTIC_MODEL_NAME: &str = "doclens_heuristic_en";

const CAPITALIZED_MONTHS: &str = r"Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}][\p{L}\p{M}'’&\-]*").expect("word pattern compiles")
});

static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[$€£¥]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|trillion|thousand|bn|m|k)\b)?|\b\d[\d,]*(?:\.\d+)?(?:\s(?:million|billion|trillion|thousand))?\s(?:dollars|euros|yen|cents|francs|marks|rubles|pesos)\b",
    )
    .expect("money pattern compiles")
});

static PERCENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?(?:\s?%|\s?percent\b|\s?per cent\b)")
        .expect("percent pattern compiles")
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}:\d{2}(?:\s?(?:a\.m\.|p\.m\.|am\b|pm\b))?|\b\d{1,2}\s?(?:a\.m\.|p\.m\.|am\b|pm\b)|\b(?:noon|midnight)\b",
    )
    .expect("time pattern compiles")
});

static LOOSE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:{CAPITALIZED_MONTHS})\.?\s+\d{{4}}\b|\b(?:{CAPITALIZED_MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?\b|\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{CAPITALIZED_MONTHS})\b|\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)s?\b|(?i:\b(?:yesterday|today|tomorrow)\b)|\b(?:1\d|20)\d{{2}}s\b"
    ))
    .expect("loose date pattern compiles")
});

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:in|since|by|until|during|from|before|after|of|circa|around|year|early|late|mid)[\s\-]+((?:1\d|20)\d{2})\b",
    )
    .expect("year pattern compiles")
});

static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b\d[\d,]*(?:\.\d+)?\s?(?:{UNITS})\b"))
        .expect("quantity pattern compiles")
});

static ORDINAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:\d+(?:st|nd|rd|th)|{ORDINAL_WORDS})\b"))
        .expect("ordinal pattern compiles")
});

static CARDINAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b\d[\d,]*(?:\.\d+)?\b|(?i:\b(?:{CARDINAL_WORDS})\b)"
    ))
    .expect("cardinal pattern compiles")
});

/// Candidate produced by one of the passes; lower `rank` wins exact ties.
struct Candidate {
    range: Range<usize>,
    label: &'static str,
    rank: u8,
}

/// A capitalized word in the input.
struct Word<'a> {
    text: &'a str,
    range: Range<usize>,
    /// The word carried a possessive `'s`, which ends any name span.
    possessive: bool,
}

/// Gazetteer and pattern driven recognizer emitting spaCy-style labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicRecognizer {
    dates: StrictDateFinder,
}

impl HeuristicRecognizer {
    /// Construct a recognizer.
    pub const fn new() -> Self {
        Self {
            dates: StrictDateFinder::new(),
        }
    }

    fn numeric_candidates(&self, text: &str, out: &mut Vec<Candidate>) {
        let simple: [(&Regex, &'static str, u8); 7] = [
            (&MONEY_PATTERN, MONEY, 0),
            (&PERCENT_PATTERN, PERCENT, 1),
            (&LOOSE_DATE_PATTERN, DATE, 3),
            (&TIME_PATTERN, TIME, 4),
            (&QUANTITY_PATTERN, QUANTITY, 5),
            (&ORDINAL_PATTERN, ORDINAL, 6),
            (&CARDINAL_PATTERN, CARDINAL, 8),
        ];
        for (pattern, label, rank) in simple {
            out.extend(pattern.find_iter(text).map(|m| Candidate {
                range: m.range(),
                label,
                rank,
            }));
        }
        out.extend(self.dates.find_dates(text).into_iter().map(|m| Candidate {
            range: m.range,
            label: DATE,
            rank: 2,
        }));
        out.extend(
            YEAR_PATTERN
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|year| Candidate {
                    range: year.range(),
                    label: DATE,
                    rank: 3,
                }),
        );
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn model_name(&self) -> &str {
        HEURISTIC_MODEL_NAME
    }

    fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
        let mut candidates = Vec::new();
        self.numeric_candidates(text, &mut candidates);
        name_candidates(text, &mut candidates);

        candidates.sort_by_key(|c| (c.range.start, std::cmp::Reverse(c.range.end), c.rank));
        let mut entities: Vec<RecognizedEntity> = Vec::new();
        let mut cursor = 0;
        for candidate in candidates {
            if candidate.range.start < cursor || candidate.range.is_empty() {
                continue;
            }
            cursor = candidate.range.end;
            entities.push(RecognizedEntity {
                text: text[candidate.range.clone()].to_string(),
                label: candidate.label.to_string(),
                range: candidate.range,
            });
        }
        Ok(entities)
    }
}

fn tokenize(text: &str) -> Vec<Word<'_>> {
    WORD.find_iter(text)
        .filter_map(|m| {
            let raw = m.as_str();
            let (trimmed, possessive) = match raw
                .strip_suffix("'s")
                .or_else(|| raw.strip_suffix("’s"))
            {
                Some(stem) => (stem, true),
                None => (raw, false),
            };
            let trimmed = trimmed.trim_end_matches(['\'', '’', '-', '&']);
            if trimmed.is_empty() {
                return None;
            }
            let start = m.start();
            Some(Word {
                text: trimmed,
                range: start..start + trimmed.len(),
                possessive,
            })
        })
        .collect()
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    (2..=6).contains(&letters) && word.chars().all(|c| c.is_uppercase() || c == '&')
}

fn starts_name(word: &Word<'_>) -> bool {
    is_capitalized(word.text) && !gazetteer::contains(SPAN_BREAKERS, word.text)
}

/// Whether the text between `prev` and the next word keeps them in one name span.
fn joinable(prev: &Word<'_>, gap: &str) -> bool {
    if prev.possessive || gap.is_empty() || gap.contains("\n\n") {
        return false;
    }
    if gap.chars().all(char::is_whitespace) {
        return true;
    }
    match gap.strip_prefix('.') {
        Some(rest) => {
            let dotted =
                gazetteer::contains(DOTTED_HONORIFICS, prev.text) || is_initial(prev.text);
            dotted && !rest.is_empty() && rest.chars().all(char::is_whitespace)
        }
        None => false,
    }
}

/// Group consecutive capitalized words into spans of word indices.
fn name_spans(text: &str, words: &[Word<'_>]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut idx = 0;
    while idx < words.len() {
        if !starts_name(&words[idx]) {
            idx += 1;
            continue;
        }
        let start = idx;
        let mut end = idx;
        let mut next = idx + 1;
        while next < words.len() {
            let gap = &text[words[next - 1].range.end..words[next].range.start];
            if !joinable(&words[next - 1], gap) {
                break;
            }
            if starts_name(&words[next]) {
                end = next;
                next += 1;
                continue;
            }
            let bridges = gazetteer::contains(CONNECTORS, words[next].text)
                && next + 1 < words.len()
                && joinable(
                    &words[next],
                    &text[words[next].range.end..words[next + 1].range.start],
                )
                && starts_name(&words[next + 1]);
            if bridges {
                end = next + 1;
                next += 2;
                continue;
            }
            break;
        }
        spans.push(start..end + 1);
        idx = end + 1;
    }
    spans
}

fn name_candidates(text: &str, out: &mut Vec<Candidate>) {
    let words = tokenize(text);
    let mut classified: Vec<(Range<usize>, Option<&'static str>)> = Vec::new();
    let mut surnames: HashSet<&str> = HashSet::new();

    for span in name_spans(text, &words) {
        let mut span_words = &words[span];
        while span_words
            .first()
            .is_some_and(|w| gazetteer::contains(SENTENCE_STARTERS, w.text))
        {
            span_words = &span_words[1..];
        }
        let Some((span_words, label)) = classify(span_words) else {
            continue;
        };
        let (Some(first), Some(last)) = (span_words.first(), span_words.last()) else {
            continue;
        };
        if label == Some(PERSON) && span_words.len() > 1 {
            surnames.insert(last.text);
        }
        classified.push((first.range.start..last.range.end, label));
    }

    for (range, label) in classified {
        let label = label.or_else(|| surnames.contains(&text[range.clone()]).then_some(PERSON));
        if let Some(label) = label {
            out.push(Candidate {
                range,
                label,
                rank: 7,
            });
        }
    }
}

/// Label a name span; `None` labels are single unknown words kept for the surname pass.
fn classify<'w, 'a>(words: &'w [Word<'a>]) -> Option<(&'w [Word<'a>], Option<&'static str>)> {
    let first = words.first()?;
    let last = words.last()?;
    let key = words.iter().map(|w| w.text).collect::<Vec<_>>().join(" ");
    let has_connector = words.iter().any(|w| !is_capitalized(w.text));

    if gazetteer::contains(GPES, &key) {
        return Some((words, Some(GPE)));
    }
    if words.len() > 1 && last.text == "City" {
        let head = &key[..key.len() - " City".len()];
        if gazetteer::contains(GPES, head) {
            return Some((words, Some(GPE)));
        }
    }
    if gazetteer::contains(LOCATIONS, &key) {
        return Some((words, Some(LOC)));
    }
    if words.len() > 1 && gazetteer::contains(ORG_SUFFIXES, last.text) {
        return Some((words, Some(ORG)));
    }

    let titled = words
        .iter()
        .take_while(|w| gazetteer::contains(HONORIFICS, w.text))
        .count();
    // "Secretary of State" is an office, not a titled name
    if titled > 0 && words.get(titled).is_some_and(starts_name) {
        return Some((&words[titled..], Some(PERSON)));
    }

    if words.len() > 1
        && (gazetteer::contains(LOC_SUFFIXES, last.text)
            || gazetteer::contains(LOC_HEADS, first.text))
    {
        return Some((words, Some(LOC)));
    }
    if words.len() > 1 && gazetteer::contains(FAC_SUFFIXES, last.text) {
        return Some((words, Some(FAC)));
    }
    if words.len() == 1 && gazetteer::is_norp(first.text) {
        return Some((words, Some(NORP)));
    }
    if words.len() == 1 && is_acronym(first.text) {
        return Some((words, Some(ORG)));
    }
    // "Bank of England", "Federal Reserve"
    if has_connector || (words.len() > 1 && gazetteer::contains(ORG_HEADS, first.text)) {
        return Some((words, Some(ORG)));
    }
    if (2..=4).contains(&words.len()) {
        return Some((words, Some(PERSON)));
    }
    if words.len() == 1 {
        return Some((words, None));
    }
    None
}
