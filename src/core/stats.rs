use std::fmt;
use serde::{Serialize, Deserialize};

/// Counters shown alongside the result table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_records: usize,
    pub displayed: usize,
    pub country: Option<String>,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Total records: {} | Displayed: {} | Country: {}",
            self.total_records,
            self.displayed,
            self.country.as_deref().unwrap_or("-"),
        )
    }
}

/// Summary of one directory load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub country: String,
    pub record_count: usize,
    pub files_read: usize,
    pub skipped_files: Vec<String>,
    pub skipped_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_dash_without_country() {
        let stats = SessionStats { total_records: 0, displayed: 0, country: None };
        assert_eq!(stats.to_string(), "Total records: 0 | Displayed: 0 | Country: -");
    }
}
