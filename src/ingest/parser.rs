use std::ops::Range;
use std::sync::LazyLock;
use chrono::NaiveDate;
use regex::Regex;
use crate::core::types::{Field, RawFields, Record};
use crate::ingest::age::compute_age_on;

pub const DELIMITER: char = ':';
pub const MIN_SEGMENTS: usize = 4;

/// Trailing 12-hour clock time, e.g. " 10:00:00 AM"
static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" [0-9]{1,2}:[0-9]{2}:[0-9]{2} [AP]M").expect("clock time pattern is valid")
});

/// Splits source lines into positional fields
#[derive(Debug, Clone)]
pub struct LineParser {
    pub min_segments: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        LineParser { min_segments: MIN_SEGMENTS }
    }
}

impl LineParser {
    pub fn new(min_segments: usize) -> Self {
        LineParser { min_segments }
    }

    pub fn parse(&self, line: &str) -> Option<RawFields> {
        let line = line.trim();
        let segments = split_segments(line);
        if segments.len() < self.min_segments {
            return None;
        }

        let mut raw = RawFields::default();
        for (field, segment) in Field::POSITIONAL.iter().zip(segments) {
            raw.set(*field, segment.to_string());
        }

        let joined = strip_clock_time(raw.get(Field::Joined));
        raw.set(Field::Joined, joined);

        Some(raw)
    }
}

pub fn parse_line(line: &str) -> Option<RawFields> {
    LineParser::default().parse(line)
}

/// Split on the delimiter, leaving colons inside a clock time alone
fn split_segments(line: &str) -> Vec<&str> {
    let protected: Vec<Range<usize>> = CLOCK_TIME.find_iter(line).map(|m| m.range()).collect();

    let mut segments = Vec::new();
    let mut start = 0;
    for (pos, ch) in line.char_indices() {
        if ch != DELIMITER || protected.iter().any(|span| span.contains(&pos)) {
            continue;
        }
        segments.push(&line[start..pos]);
        start = pos + ch.len_utf8();
    }
    segments.push(&line[start..]);
    segments
}

pub fn strip_clock_time(joined: &str) -> String {
    CLOCK_TIME.replace_all(joined, "").into_owned()
}

/// Attach country and age to parsed fields
pub fn normalize(raw: RawFields, country: &str, today: NaiveDate) -> Record {
    let age = compute_age_on(raw.get(Field::Birthdate), today);
    Record::from_raw(raw, country.to_string(), age)
}
