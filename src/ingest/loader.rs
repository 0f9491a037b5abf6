use std::fs;
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::Record;
use crate::ingest::decode::{decode_with_fallback, TextEncoding};
use crate::ingest::parser::{normalize, LineParser};

/// Outcome of reading one country directory
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub country: String,
    pub records: Vec<Record>,
    pub files_read: Vec<(PathBuf, TextEncoding)>,
    pub skipped_files: Vec<PathBuf>,
    pub skipped_lines: usize,
}

pub fn load_directory(dir: &Path, config: &Config) -> Result<LoadReport> {
    load_directory_on(dir, config, Local::now().date_naive())
}

/// Same as `load_directory` with a fixed "today" for age derivation
pub fn load_directory_on(dir: &Path, config: &Config, today: NaiveDate) -> Result<LoadReport> {
    let mut report = LoadReport {
        country: country_name(dir),
        ..LoadReport::default()
    };

    if !dir.is_dir() {
        debug!(path = %dir.display(), "directory missing, nothing to load");
        return Ok(report);
    }

    let parser = LineParser::new(config.min_segments);
    for path in candidate_files(dir, &config.file_extension)? {
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read file, skipping");
                report.skipped_files.push(path);
                continue;
            }
        };

        let Some(decoded) = decode_with_fallback(&bytes, &config.encodings) else {
            warn!(path = %path.display(), "could not decode file with any supported encoding, skipping");
            report.skipped_files.push(path);
            continue;
        };

        let before = report.records.len();
        for line in split_lines(&decoded.text) {
            match parser.parse(line) {
                Some(raw) => report.records.push(normalize(raw, &report.country, today)),
                None => report.skipped_lines += 1,
            }
        }
        debug!(
            path = %path.display(),
            encoding = decoded.encoding.label(),
            records = report.records.len() - before,
            "file loaded"
        );
        report.files_read.push((path, decoded.encoding));
    }

    Ok(report)
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`; no trailing empty line
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Regular files directly inside `dir` with the given suffix, sorted by name
fn candidate_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let matches = name.to_str().is_some_and(|name| name.ends_with(extension));
        if matches && entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn country_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
