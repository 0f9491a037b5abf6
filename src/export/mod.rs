use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use crate::core::error::Result;
use crate::core::types::{Field, Record};

pub const SEMICOLON_HEADERS: [&str; 13] = [
    "Phone", "ID", "First Name", "Last Name", "Gender", "Age", "Residence",
    "Birthplace", "Relationship", "Workplace", "Joined", "Email", "Birthdate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Source line layout: 12 fields joined by ':'
    Colon,
    /// Header row plus 13 ';'-separated columns including age
    Semicolon,
}

impl ExportFormat {
    /// A path ending in lowercase `.csv` selects the semicolon layout
    pub fn for_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(".csv") {
            ExportFormat::Semicolon
        } else {
            ExportFormat::Colon
        }
    }
}

pub fn write_records<W: Write>(writer: &mut W, records: &[Arc<Record>], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Colon => {
            for record in records {
                writeln!(writer, "{}", colon_line(record))?;
            }
        }
        ExportFormat::Semicolon => {
            writeln!(writer, "{}", SEMICOLON_HEADERS.join(";"))?;
            for record in records {
                writeln!(writer, "{}", semicolon_row(record))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn colon_line(record: &Record) -> String {
    Field::POSITIONAL.iter()
        .map(|field| record.field(*field))
        .collect::<Vec<_>>()
        .join(":")
}

/// Age goes between gender and residence
pub fn semicolon_row(record: &Record) -> String {
    let age = record.age_text();
    let mut columns: Vec<&str> = Vec::with_capacity(SEMICOLON_HEADERS.len());
    for field in Field::POSITIONAL {
        columns.push(record.field(field));
        if field == Field::Gender {
            columns.push(&age);
        }
    }
    columns.join(";")
}
