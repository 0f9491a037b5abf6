pub mod core;
pub mod ingest;
pub mod analysis;
pub mod index;
pub mod query;
pub mod export;

pub use crate::core::config::Config;
pub use crate::core::dataset::Dataset;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::session::Session;
pub use crate::core::types::{Field, Record, RecordId};
pub use crate::query::ast::{FilterCriteria, SearchKind, SearchQuery};

/*
┌──────────────────────────────────────────────────────────────────────────────────┐
│                              ROSTER DATA FLOW                                     │
└──────────────────────────────────────────────────────────────────────────────────┘

   country dir ──► ingest::loader ──► ingest::decode ──► ingest::parser ──► ingest::age
   (*.txt files)    (sorted, flat)     (utf-8, latin-1,   (split on ':',      (6 layouts,
                                        1252, utf-16)      pad to 12 fields)    first wins)
                                                               │
                                                               ▼
┌─────────────────────────────── DATASET GENERATION ───────────────────────────────┐
│  struct Dataset                                                                   │
│  • country: String                                                                │
│  • records: Vec<Arc<Record>>          // RecordId = position                      │
│  • indices: Indices                                                               │
│      phone / user_id / email   keyword analyzer            term → Vec<RecordId>   │
│      city                      whitespace → lower → strip → len ≥ 2               │
│      name                      first + last, lowercased                           │
└───────────────────────────────────────────────────────────────────────────────────┘
                                                               │
                                                               ▼
┌─────────────────────────────────── SESSION ──────────────────────────────────────┐
│  struct Session                                                                   │
│  • dataset: Option<Dataset>           // replaced wholesale on load               │
│  • active_search: Option<SearchQuery> ──► query::executor (index key scan)        │
│  • applied_filters: FilterChain       ──► age → city → phone → gender             │
│  • working: Vec<Arc<Record>>          ──► export (':' lines or ';' table)         │
└───────────────────────────────────────────────────────────────────────────────────┘
*/
