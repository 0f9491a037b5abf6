use std::sync::Arc;
use crate::core::dataset::Dataset;
use crate::core::types::{Record, RecordId};
use crate::query::ast::{SearchPredicate, SearchQuery};
use crate::query::matcher;

/// Runs searches against one dataset generation.
///
/// Phone, user id, email and name searches narrow candidates through the
/// index key space, then confirm each candidate with the matcher. City search
/// scans: index keys are punctuation-stripped, the city rule is not.
pub struct SearchExecutor<'a> {
    dataset: &'a Dataset,
}

impl<'a> SearchExecutor<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        SearchExecutor { dataset }
    }

    /// Matching records in dataset order, each at most once
    pub fn execute(&self, query: &SearchQuery) -> Vec<Arc<Record>> {
        let predicate = query.predicate();
        let candidates = match self.candidates(&predicate) {
            Some(ids) => ids,
            None => return self.scan_predicate(&predicate),
        };

        candidates.into_iter()
            .filter_map(|id| self.dataset.get(id))
            .filter(|record| matcher::matches(record, &predicate))
            .cloned()
            .collect()
    }

    /// Reference path: test every record
    pub fn scan(&self, query: &SearchQuery) -> Vec<Arc<Record>> {
        self.scan_predicate(&query.predicate())
    }

    fn scan_predicate(&self, predicate: &SearchPredicate) -> Vec<Arc<Record>> {
        self.dataset.records().iter()
            .filter(|record| matcher::matches(record, predicate))
            .cloned()
            .collect()
    }

    /// Sorted candidate ids, or None when the index cannot narrow the search
    fn candidates(&self, predicate: &SearchPredicate) -> Option<Vec<RecordId>> {
        let indices = self.dataset.indices();
        let ids = match predicate {
            SearchPredicate::Phone(term) => indices.phone.collect_matching(|key| key.contains(term.as_str())),
            SearchPredicate::UserId(term) => indices.user_id.collect_matching(|key| key.contains(term.as_str())),
            SearchPredicate::Email(term) => {
                indices.email.collect_matching(|key| key.to_lowercase().contains(term.as_str()))
            }
            SearchPredicate::NamePart(term) => indices.name.collect_matching(|key| key.contains(term.as_str())),
            SearchPredicate::FullName { last, .. } => {
                let mut ids = indices.name.lookup(last).to_vec();
                ids.dedup();
                ids
            }
            SearchPredicate::City(_) => return None,
        };
        Some(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::SearchKind;

    fn record(phone: &str, user: &str, first: &str, last: &str, residence: &str, email: &str) -> Record {
        Record {
            mobile_number: phone.to_string(),
            user_id: user.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            residence: residence.to_string(),
            email: email.to_string(),
            ..Record::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset::new("France".to_string(), vec![
            record("5551234567", "u1", "John", "Doe", "Paris, France", "john@x.com"),
            record("5559990000", "u2", "Doe", "John", "Lyon", "DOE@Y.COM"),
            record("4441234567", "u12", "Jane", "Doe", "Saint-Paris", ""),
            record("", "", "Ann", "Doe", "", "ann@x.com"),
            record("5551234567", "U1", "John", "Doe", "paris", "john@x.com"),
        ])
    }

    fn ids(records: &[Arc<Record>]) -> Vec<&str> {
        records.iter().map(|r| r.user_id.as_str()).collect()
    }

    #[test]
    fn indexed_search_equals_full_scan() {
        let dataset = dataset();
        let executor = SearchExecutor::new(&dataset);
        let cases = [
            (SearchKind::Phone, "555"),
            (SearchKind::Phone, "1234"),
            (SearchKind::UserId, "u1"),
            (SearchKind::UserId, "U"),
            (SearchKind::Email, "X.COM"),
            (SearchKind::Email, "doe"),
            (SearchKind::City, "pari"),
            (SearchKind::Name, "doe"),
            (SearchKind::Name, "Doe John"),
            (SearchKind::Name, "John Doe"),
            (SearchKind::Name, "an"),
        ];

        for (kind, term) in cases {
            let query = SearchQuery::new(kind, term).unwrap();
            assert_eq!(ids(&executor.execute(&query)), ids(&executor.scan(&query)), "{kind} {term}");
        }
    }

    #[test]
    fn results_are_in_dataset_order_without_duplicates() {
        let dataset = dataset();
        let executor = SearchExecutor::new(&dataset);

        let query = SearchQuery::new(SearchKind::Name, "o").unwrap();
        assert_eq!(ids(&executor.execute(&query)), vec!["u1", "u2", "u12", "", "U1"]);
    }

    #[test]
    fn full_name_is_last_name_first() {
        let dataset = dataset();
        let executor = SearchExecutor::new(&dataset);

        let query = SearchQuery::new(SearchKind::Name, "Doe John").unwrap();
        assert_eq!(ids(&executor.execute(&query)), vec!["u1", "U1"]);
    }

    #[test]
    fn city_uses_token_rule() {
        let dataset = dataset();
        let executor = SearchExecutor::new(&dataset);

        let query = SearchQuery::new(SearchKind::City, "pari").unwrap();
        assert_eq!(ids(&executor.execute(&query)), vec!["u1", "u12", "U1"]);
    }

    #[test]
    fn user_id_search_is_case_sensitive() {
        let dataset = dataset();
        let executor = SearchExecutor::new(&dataset);

        let query = SearchQuery::new(SearchKind::UserId, "u1").unwrap();
        assert_eq!(ids(&executor.execute(&query)), vec!["u1", "u12"]);
    }
}
