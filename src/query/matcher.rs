use crate::core::types::Record;
use crate::query::ast::{Criterion, SearchPredicate};

/// Check if a record satisfies a search predicate
pub fn matches(record: &Record, predicate: &SearchPredicate) -> bool {
    match predicate {
        SearchPredicate::Phone(term) => record.mobile_number.contains(term.as_str()),
        SearchPredicate::UserId(term) => record.user_id.contains(term.as_str()),
        SearchPredicate::Email(term) => contains_ignore_case(&record.email, term),
        SearchPredicate::City(term) => matches_city(&record.residence, term),
        SearchPredicate::FullName { last, first } => {
            record.last_name.to_lowercase() == *last && record.first_name.to_lowercase() == *first
        }
        SearchPredicate::NamePart(term) => {
            contains_ignore_case(&record.first_name, term) || contains_ignore_case(&record.last_name, term)
        }
    }
}

/// `term` must be lowercase. Whole-string containment first, then at least one
/// whitespace token (punctuation included) must contain the term or sit inside it.
pub fn matches_city(residence: &str, term: &str) -> bool {
    let residence = residence.to_lowercase();
    if !residence.contains(term) {
        return false;
    }
    residence.split_whitespace()
        .any(|word| word.contains(term) || term.contains(word))
}

/// Check if a record satisfies one filter criterion
pub fn satisfies(record: &Record, criterion: &Criterion) -> bool {
    match criterion {
        Criterion::AgeRange { min, max } => record.age
            .is_some_and(|age| (*min..=*max).contains(&i64::from(age))),
        Criterion::City(text) => contains_ignore_case(&record.residence, text),
        Criterion::Phone(text) => record.mobile_number.contains(text.as_str()),
        Criterion::Gender(text) => contains_ignore_case(&record.gender, text),
    }
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str) -> Record {
        Record {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn phone_and_user_id_are_case_sensitive_substrings() {
        let record = Record {
            mobile_number: "+33 555 1234".to_string(),
            user_id: "User-42".to_string(),
            ..Record::default()
        };
        assert!(matches(&record, &SearchPredicate::Phone("555".to_string())));
        assert!(!matches(&record, &SearchPredicate::Phone("999".to_string())));
        assert!(matches(&record, &SearchPredicate::UserId("User".to_string())));
        assert!(!matches(&record, &SearchPredicate::UserId("user".to_string())));
    }

    #[test]
    fn email_ignores_case() {
        let record = Record { email: "John.Doe@Example.COM".to_string(), ..Record::default() };
        assert!(matches(&record, &SearchPredicate::Email("doe@example".to_string())));
    }

    #[test]
    fn city_token_contains_term() {
        assert!(matches_city("Paris, France", "pari"));
        assert!(matches_city("Paris, France", "paris,"));
    }

    #[test]
    fn city_term_contains_token() {
        // "new york" is in the string and the token "york" sits inside the term
        assert!(matches_city("New York", "new york"));
        assert!(matches_city("Rio de Janeiro", "o de j"));
    }

    #[test]
    fn city_requires_whole_string_match_first() {
        assert!(!matches_city("Paris", "paris texas"));
        assert!(!matches_city("", "paris"));
    }

    #[test]
    fn full_name_needs_both_fields_exactly() {
        let predicate = SearchPredicate::FullName { last: "doe".to_string(), first: "john".to_string() };
        assert!(matches(&person("JOHN", "Doe"), &predicate));
        assert!(!matches(&person("Doe", "John"), &predicate));
        assert!(!matches(&person("Johnny", "Doe"), &predicate));
    }

    #[test]
    fn name_part_checks_either_field() {
        let predicate = SearchPredicate::NamePart("oh".to_string());
        assert!(matches(&person("John", "Smith"), &predicate));
        assert!(matches(&person("Ann", "Kohl"), &predicate));
        assert!(!matches(&person("Ann", "Lee"), &predicate));
    }

    #[test]
    fn age_range_excludes_absent_age() {
        let criterion = Criterion::AgeRange { min: 0, max: 150 };
        assert!(!satisfies(&Record::default(), &criterion));
        assert!(satisfies(&Record { age: Some(0), ..Record::default() }, &criterion));
        assert!(satisfies(&Record { age: Some(150), ..Record::default() }, &criterion));
        assert!(!satisfies(&Record { age: Some(151), ..Record::default() }, &criterion));
    }

    #[test]
    fn gender_is_substring_not_equality() {
        let criterion = Criterion::Gender("male".to_string());
        assert!(satisfies(&Record { gender: "Female".to_string(), ..Record::default() }, &criterion));
        assert!(satisfies(&Record { gender: "MALE".to_string(), ..Record::default() }, &criterion));
        assert!(!satisfies(&Record { gender: "M".to_string(), ..Record::default() }, &criterion));
    }
}
