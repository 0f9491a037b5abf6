use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use crate::core::config::Config;
use crate::core::dataset::Dataset;
use crate::core::error::{Error, Result};
use crate::core::stats::{LoadSummary, SessionStats};
use crate::core::types::Record;
use crate::export::{write_records, ExportFormat};
use crate::ingest::loader::{load_directory, LoadReport};
use crate::query::ast::{FilterCriteria, SearchKind, SearchQuery};
use crate::query::executor::SearchExecutor;
use crate::query::filter::FilterChain;

/// One interactive session over the most recently loaded dataset generation.
///
/// The working set is what a caller displays: the full dataset, the active
/// search results, or either of those narrowed by the applied filters.
pub struct Session {
    config: Config,
    dataset: Option<Dataset>,
    active_search: Option<SearchQuery>,
    search_results: Vec<Arc<Record>>,
    applied_filters: FilterChain,
    working: Vec<Arc<Record>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            config,
            dataset: None,
            active_search: None,
            search_results: Vec::new(),
            applied_filters: FilterChain::default(),
            working: Vec::new(),
        }
    }

    /// Read `dir` and replace the current generation wholesale
    pub fn load(&mut self, dir: &Path) -> Result<LoadSummary> {
        let report = load_directory(dir, &self.config)?;
        Ok(self.install(report))
    }

    /// Replace the current generation with an already-read report
    pub fn install(&mut self, report: LoadReport) -> LoadSummary {
        let LoadReport { country, records, files_read, skipped_files, skipped_lines } = report;
        let summary = LoadSummary {
            country: country.clone(),
            record_count: records.len(),
            files_read: files_read.len(),
            skipped_files: skipped_files.iter().map(|p| p.display().to_string()).collect(),
            skipped_lines,
        };

        if records.is_empty() {
            info!(%country, "no data found in directory");
        } else {
            info!(%country, records = summary.record_count, files = summary.files_read, "dataset loaded");
        }

        self.replace_dataset(Dataset::new(country, records));
        summary
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.working = dataset.records().to_vec();
        self.dataset = Some(dataset);
        self.active_search = None;
        self.search_results.clear();
        self.applied_filters = FilterChain::default();
    }

    fn require_dataset(&self) -> Result<&Dataset> {
        self.dataset.as_ref()
            .filter(|dataset| !dataset.is_empty())
            .ok_or_else(|| Error::invalid_state("no data loaded, please load a country directory first"))
    }

    pub fn search(&mut self, kind: SearchKind, term: &str) -> Result<&[Arc<Record>]> {
        let dataset = self.require_dataset()?;
        let query = SearchQuery::new(kind, term)?;

        let results = SearchExecutor::new(dataset).execute(&query);
        debug!(kind = %query.kind, term = %query.term, hits = results.len(), "search executed");

        self.working = results.clone();
        self.search_results = results;
        self.active_search = Some(query);
        self.applied_filters = FilterChain::default();
        Ok(&self.working)
    }

    pub fn clear_search(&mut self) {
        self.active_search = None;
        self.search_results.clear();
        self.applied_filters = FilterChain::default();
        self.working = self.dataset.as_ref()
            .map(|dataset| dataset.records().to_vec())
            .unwrap_or_default();
    }

    /// Narrow the active search results, or the full dataset without a search.
    /// Invalid input leaves the session exactly as it was.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) -> Result<&[Arc<Record>]> {
        let dataset = self.require_dataset()?;
        let chain = FilterChain::compile_with_defaults(
            criteria,
            self.config.default_min_age,
            self.config.default_max_age,
        )?;

        let base = match self.active_search {
            Some(_) => self.search_results.as_slice(),
            None => dataset.records(),
        };
        let narrowed = chain.apply(base);
        debug!(filters = ?chain.describe(), before = base.len(), after = narrowed.len(), "filters applied");

        self.working = narrowed;
        self.applied_filters = chain;
        Ok(&self.working)
    }

    /// Drop filter narrowing: re-run the active search from scratch, or show everything
    pub fn clear_filters(&mut self) -> Result<&[Arc<Record>]> {
        self.applied_filters = FilterChain::default();
        match self.active_search.clone() {
            Some(query) => self.search(query.kind, &query.term),
            None => {
                self.clear_search();
                Ok(&self.working)
            }
        }
    }

    pub fn results(&self) -> &[Arc<Record>] {
        &self.working
    }

    pub fn active_search(&self) -> Option<&SearchQuery> {
        self.active_search.as_ref()
    }

    pub fn applied_filters(&self) -> &FilterChain {
        &self.applied_filters
    }

    pub fn stats(&self) -> SessionStats {
        let loaded = self.dataset.as_ref().filter(|dataset| !dataset.is_empty());
        SessionStats {
            total_records: loaded.map(Dataset::len).unwrap_or(0),
            displayed: self.working.len(),
            country: loaded.map(|dataset| dataset.country.clone()),
        }
    }

    /// Write the working set to `path`; `.csv` gets the semicolon layout
    pub fn export(&self, path: &Path) -> Result<usize> {
        if self.working.is_empty() {
            return Err(Error::invalid_state("no data to export"));
        }
        let format = ExportFormat::for_path(path);
        let mut writer = BufWriter::new(File::create(path)?);
        write_records(&mut writer, &self.working, format)?;
        info!(path = %path.display(), ?format, records = self.working.len(), "results exported");
        Ok(self.working.len())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Config::default())
    }
}
