use std::sync::LazyLock;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

/// One accepted birthdate layout
struct DateFormat {
    chrono: &'static str,
    // chrono's %Y takes any digit count, the accepted layouts want exactly four
    shape: Regex,
}

impl DateFormat {
    fn new(chrono: &'static str, shape: &str) -> Self {
        DateFormat {
            chrono,
            shape: Regex::new(shape).expect("date shape pattern is valid"),
        }
    }

    fn parse(&self, text: &str) -> Option<NaiveDate> {
        if !self.shape.is_match(text) {
            return None;
        }
        NaiveDate::parse_from_str(text, self.chrono).ok()
    }
}

/// Priority order; the first structural match wins
static DATE_FORMATS: LazyLock<Vec<DateFormat>> = LazyLock::new(|| {
    vec![
        DateFormat::new("%Y-%m-%d", r"^\d{4}-\d{1,2}-\d{1,2}$"),
        DateFormat::new("%d-%m-%Y", r"^\d{1,2}-\d{1,2}-\d{4}$"),
        DateFormat::new("%m-%d-%Y", r"^\d{1,2}-\d{1,2}-\d{4}$"),
        DateFormat::new("%Y/%m/%d", r"^\d{4}/\d{1,2}/\d{1,2}$"),
        DateFormat::new("%d/%m/%Y", r"^\d{1,2}/\d{1,2}/\d{4}$"),
        DateFormat::new("%m/%d/%Y", r"^\d{1,2}/\d{1,2}/\d{4}$"),
    ]
});

pub fn parse_birthdate(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|format| format.parse(text))
}

pub fn compute_age(birthdate: &str) -> Option<i32> {
    compute_age_on(birthdate, Local::now().date_naive())
}

pub fn compute_age_on(birthdate: &str, today: NaiveDate) -> Option<i32> {
    let born = parse_birthdate(birthdate)?;
    Some(full_years_between(born, today))
}

/// Whole years from `born` to `today`; negative when `born` is later than `today`
pub fn full_years_between(born: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (born.month(), born.day());
    today.year() - born.year() - i32::from(before_birthday)
}
