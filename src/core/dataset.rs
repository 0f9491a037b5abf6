use std::sync::Arc;
use tracing::debug;
use crate::core::types::{Record, RecordId};
use crate::index::record_index::{IndexKind, Indices};

/// One dataset generation: records of a single load plus their indices
pub struct Dataset {
    pub country: String,
    records: Vec<Arc<Record>>,
    indices: Indices,
}

impl Dataset {
    pub fn new(country: String, records: Vec<Record>) -> Self {
        let records: Vec<Arc<Record>> = records.into_iter().map(Arc::new).collect();
        let indices = Indices::build(&records);

        for kind in IndexKind::ALL {
            debug!(
                ?kind,
                analyzer = %indices.get(kind).analyzer.name,
                keys = indices.key_count(kind),
                postings = indices.posting_count(kind),
                "index built"
            );
        }

        Dataset {
            country,
            records,
            indices,
        }
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    pub fn get(&self, id: RecordId) -> Option<&Arc<Record>> {
        self.records.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
