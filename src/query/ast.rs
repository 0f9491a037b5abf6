use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};

/// Field a quick search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Phone,
    UserId,
    Email,
    City,
    Name,
}

impl SearchKind {
    pub const ALL: [SearchKind; 5] = [
        SearchKind::City,
        SearchKind::Name,
        SearchKind::Phone,
        SearchKind::UserId,
        SearchKind::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Phone => "phone",
            SearchKind::UserId => "userid",
            SearchKind::Email => "email",
            SearchKind::City => "city",
            SearchKind::Name => "name",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SearchKind::ALL.into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_input(format!("unknown search type '{}'", s)))
    }
}

/// A validated single-field search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub kind: SearchKind,
    pub term: String,
}

impl SearchQuery {
    /// Trims `term`; an empty term is rejected before any matching
    pub fn new(kind: SearchKind, term: &str) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::invalid_input("please enter a search term"));
        }
        Ok(SearchQuery {
            kind,
            term: term.to_string(),
        })
    }

    pub fn predicate(&self) -> SearchPredicate {
        match self.kind {
            SearchKind::Phone => SearchPredicate::Phone(self.term.clone()),
            SearchKind::UserId => SearchPredicate::UserId(self.term.clone()),
            SearchKind::Email => SearchPredicate::Email(self.term.to_lowercase()),
            SearchKind::City => SearchPredicate::City(self.term.to_lowercase()),
            SearchKind::Name => {
                let words: Vec<&str> = self.term.split_whitespace().collect();
                match words.as_slice() {
                    [last, first @ ..] if !first.is_empty() => SearchPredicate::FullName {
                        last: last.to_lowercase(),
                        first: first.join(" ").to_lowercase(),
                    },
                    _ => SearchPredicate::NamePart(self.term.to_lowercase()),
                }
            }
        }
    }
}

/// Search term prepared for matching; case-insensitive variants hold lowercase text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPredicate {
    Phone(String),
    UserId(String),
    Email(String),
    City(String),
    /// "Last First..." with both parts compared exactly
    FullName { last: String, first: String },
    NamePart(String),
}

/// Raw filter inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub min_age: String,
    pub max_age: String,
    pub city: String,
    pub phone: String,
    pub gender: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        [&self.min_age, &self.max_age, &self.city, &self.phone, &self.gender]
            .iter()
            .all(|input| input.trim().is_empty())
    }
}

/// One narrowing predicate of the filter chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    AgeRange { min: i64, max: i64 },
    City(String),
    Phone(String),
    Gender(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("UserID".parse::<SearchKind>().unwrap(), SearchKind::UserId);
        assert_eq!(" city ".parse::<SearchKind>().unwrap(), SearchKind::City);
        assert_eq!("zip".parse::<SearchKind>().unwrap_err().kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn empty_term_is_rejected() {
        let err = SearchQuery::new(SearchKind::Name, "   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn two_word_name_is_last_then_first() {
        let query = SearchQuery::new(SearchKind::Name, "Doe  Mary   Ann").unwrap();
        assert_eq!(query.predicate(), SearchPredicate::FullName {
            last: "doe".to_string(),
            first: "mary ann".to_string(),
        });
    }

    #[test]
    fn single_word_name_is_partial() {
        let query = SearchQuery::new(SearchKind::Name, " Doe ").unwrap();
        assert_eq!(query.predicate(), SearchPredicate::NamePart("doe".to_string()));
    }

    #[test]
    fn phone_and_user_id_keep_case() {
        let query = SearchQuery::new(SearchKind::UserId, "AbC").unwrap();
        assert_eq!(query.predicate(), SearchPredicate::UserId("AbC".to_string()));
    }
}
