use std::sync::Arc;
use crate::analysis::analyzer::Analyzer;
use crate::core::types::{Record, RecordId};
use crate::index::inverted::InvertedIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Phone,
    UserId,
    Email,
    City,
    Name,
}

impl IndexKind {
    pub const ALL: [IndexKind; 5] = [
        IndexKind::Phone,
        IndexKind::UserId,
        IndexKind::Email,
        IndexKind::City,
        IndexKind::Name,
    ];
}

/// The five lookup structures of one dataset generation
pub struct Indices {
    pub phone: InvertedIndex,
    pub user_id: InvertedIndex,
    pub email: InvertedIndex,
    pub city: InvertedIndex,
    pub name: InvertedIndex,
}

impl Indices {
    pub fn new() -> Self {
        Indices {
            phone: InvertedIndex::new(Analyzer::keyword()),
            user_id: InvertedIndex::new(Analyzer::keyword()),
            email: InvertedIndex::new(Analyzer::keyword()),
            city: InvertedIndex::new(Analyzer::city()),
            name: InvertedIndex::new(Analyzer::keyword_lowercase()),
        }
    }

    /// One pass over `records`; ids are positions in the slice
    pub fn build(records: &[Arc<Record>]) -> Self {
        let mut indices = Indices::new();
        for (position, record) in records.iter().enumerate() {
            indices.add(RecordId(position as u32), record);
        }
        indices
    }

    fn add(&mut self, id: RecordId, record: &Record) {
        self.phone.add_value(id, &record.mobile_number);
        self.user_id.add_value(id, &record.user_id);
        self.email.add_value(id, &record.email);
        self.city.add_value(id, &record.residence);
        self.name.add_value(id, &record.first_name);
        self.name.add_value(id, &record.last_name);
    }

    pub fn get(&self, kind: IndexKind) -> &InvertedIndex {
        match kind {
            IndexKind::Phone => &self.phone,
            IndexKind::UserId => &self.user_id,
            IndexKind::Email => &self.email,
            IndexKind::City => &self.city,
            IndexKind::Name => &self.name,
        }
    }

    pub fn lookup(&self, kind: IndexKind, key: &str) -> &[RecordId] {
        self.get(kind).lookup(key)
    }

    pub fn key_count(&self, kind: IndexKind) -> usize {
        self.get(kind).term_count()
    }

    pub fn posting_count(&self, kind: IndexKind) -> usize {
        self.get(kind).total_postings
    }
}

impl Default for Indices {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phone: &str, user: &str, first: &str, last: &str, residence: &str, email: &str) -> Arc<Record> {
        Arc::new(Record {
            mobile_number: phone.to_string(),
            user_id: user.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            residence: residence.to_string(),
            email: email.to_string(),
            ..Record::default()
        })
    }

    fn sample() -> Vec<Arc<Record>> {
        vec![
            record("555", "u1", "John", "Doe", "Paris, France", "John@X.com"),
            record("555", "", "Jane", "Doe", "Lyon", ""),
            record("", "u3", "", "Smith", "a B", "s@y.org"),
        ]
    }

    #[test]
    fn exact_indices_skip_empty_values() {
        let indices = Indices::build(&sample());

        assert_eq!(indices.lookup(IndexKind::Phone, "555"), &[RecordId(0), RecordId(1)]);
        assert_eq!(indices.posting_count(IndexKind::Phone), 2);
        assert_eq!(indices.posting_count(IndexKind::UserId), 2);
        assert_eq!(indices.lookup(IndexKind::Email, "John@X.com"), &[RecordId(0)]);
        assert!(indices.lookup(IndexKind::Email, "john@x.com").is_empty());
    }

    #[test]
    fn city_tokens_are_cleaned_and_length_filtered() {
        let indices = Indices::build(&sample());

        assert_eq!(indices.lookup(IndexKind::City, "paris"), &[RecordId(0)]);
        assert_eq!(indices.lookup(IndexKind::City, "france"), &[RecordId(0)]);
        assert!(indices.lookup(IndexKind::City, "paris,").is_empty());
        assert!(indices.lookup(IndexKind::City, "b").is_empty());
        assert_eq!(indices.posting_count(IndexKind::City), 3);
    }

    #[test]
    fn first_and_last_names_share_one_map() {
        let indices = Indices::build(&sample());

        assert_eq!(indices.lookup(IndexKind::Name, "doe"), &[RecordId(0), RecordId(1)]);
        assert_eq!(indices.lookup(IndexKind::Name, "john"), &[RecordId(0)]);
        assert_eq!(indices.lookup(IndexKind::Name, "smith"), &[RecordId(2)]);
        assert_eq!(indices.posting_count(IndexKind::Name), 5);
        assert_eq!(indices.key_count(IndexKind::Name), 4);
    }

    #[test]
    fn empty_collection_builds_empty_indices() {
        let indices = Indices::build(&[]);
        for kind in IndexKind::ALL {
            assert!(indices.get(kind).is_empty());
        }
    }
}
