use std::collections::HashMap;
use crate::analysis::analyzer::Analyzer;
use crate::core::types::RecordId;

/// Term -> posting list of record ids, one analyzer per index
pub struct InvertedIndex {
    pub postings: HashMap<String, Vec<RecordId>>,
    pub analyzer: Analyzer,
    pub total_postings: usize,
}

impl InvertedIndex {
    pub fn new(analyzer: Analyzer) -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            analyzer,
            total_postings: 0,
        }
    }

    /// Index every term of `value`; a term seen twice in one value is posted twice
    pub fn add_value(&mut self, id: RecordId, value: &str) {
        if value.is_empty() {
            return;
        }
        for term in self.analyzer.terms(value) {
            self.postings.entry(term)
                .or_insert_with(Vec::new)
                .push(id);
            self.total_postings += 1;
        }
    }

    pub fn lookup(&self, term: &str) -> &[RecordId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids under every term accepted by `predicate`, sorted and deduplicated
    pub fn collect_matching<F>(&self, predicate: F) -> Vec<RecordId>
    where
        F: Fn(&str) -> bool,
    {
        let mut ids: Vec<RecordId> = self.postings.iter()
            .filter(|(term, _)| predicate(term.as_str()))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
