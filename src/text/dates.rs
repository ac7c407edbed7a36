//! Strict date detection.
//!
//! Only complete dates (day, month and year) count. Bare years and month-year pairs are
//! ignored, and every candidate is validated against the calendar before it is returned.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;
use time::{Date, Month};

const MONTHS: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("ISO date pattern compiles")
});

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
    ))
    .expect("month-day-year pattern compiles")
});

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\.?,?\s+(\d{{4}})\b"
    ))
    .expect("day-month-year pattern compiles")
});

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/.](\d{1,2})[/.](\d{4})\b").expect("numeric date pattern compiles")
});

/// A calendar date found in text, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte range of the matched text.
    pub range: Range<usize>,
    /// Parsed calendar date.
    pub date: Date,
}

/// Interface implemented by date parsing backends.
pub trait DateFinder: Send + Sync {
    /// All non-overlapping dates in `text`, ordered by position.
    fn find_dates(&self, text: &str) -> Vec<DateMatch>;

    /// The first date appearing in `text`, if any.
    fn first_date(&self, text: &str) -> Option<Date> {
        self.find_dates(text).into_iter().next().map(|m| m.date)
    }
}

/// Regex-driven finder accepting ISO, `Month D, YYYY`, `D Month YYYY`, and `M/D/YYYY` forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictDateFinder;

impl StrictDateFinder {
    /// Construct a new finder.
    pub const fn new() -> Self {
        Self
    }
}

impl DateFinder for StrictDateFinder {
    fn find_dates(&self, text: &str) -> Vec<DateMatch> {
        let mut candidates = Vec::new();
        collect(&ISO, text, &mut candidates, |caps| {
            build_date(num(caps, 1)?, num(caps, 2)?, num(caps, 3)?)
        });
        collect(&MONTH_DAY_YEAR, text, &mut candidates, |caps| {
            build_date(num(caps, 3)?, month_number(&caps[1])?, num(caps, 2)?)
        });
        collect(&DAY_MONTH_YEAR, text, &mut candidates, |caps| {
            build_date(num(caps, 3)?, month_number(&caps[2])?, num(caps, 1)?)
        });
        collect(&NUMERIC, text, &mut candidates, |caps| {
            let (first, second, year) = (num(caps, 1)?, num(caps, 2)?, num(caps, 3)?);
            if first > 12 {
                build_date(year, second, first)
            } else {
                build_date(year, first, second)
            }
        });

        // earliest first, longest wins a tie
        candidates.sort_by_key(|m| (m.range.start, std::cmp::Reverse(m.range.end)));
        let mut accepted: Vec<DateMatch> = Vec::new();
        for candidate in candidates {
            let overlaps = accepted
                .last()
                .is_some_and(|prev| candidate.range.start < prev.range.end);
            if !overlaps {
                accepted.push(candidate);
            }
        }
        accepted
    }
}

fn collect<F>(pattern: &Regex, text: &str, out: &mut Vec<DateMatch>, parse: F)
where
    F: Fn(&Captures<'_>) -> Option<Date>,
{
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if let Some(date) = parse(&caps) {
            out.push(DateMatch {
                range: whole.range(),
                date,
            });
        }
    }
}

fn num(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn build_date(year: u32, month: u32, day: u32) -> Option<Date> {
    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    let year = i32::try_from(year).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
