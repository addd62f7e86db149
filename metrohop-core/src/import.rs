//! Bulk-import preview: parse station records and report problems
//!
//! Importing is a dry run. The records never reach the network; the
//! caller gets a report and decides whether the data is worth applying
//! by hand.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::Error;

/// One incoming station row. Column aliases cover the two header
/// conventions seen in exported files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportRecord {
    #[serde(alias = "station_id")]
    pub id: String,
    #[serde(alias = "station_name")]
    pub name: String,
    #[serde(alias = "line_id")]
    pub line: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in one row; `row` is 1-based to match the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportIssue {
    pub severity: Severity,
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Csv,
    Json,
}

/// Parsed rows plus everything wrong with them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub records: Vec<ImportRecord>,
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Warnings alone leave the data importable; errors block it
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}

/// Parse `data` in the given format and validate the rows.
///
/// # Errors
///
/// Fails on malformed CSV or JSON, and on JSON whose top level is not
/// an array. Per-row problems are not errors; they land in the report.
pub fn preview(format: ImportFormat, data: &str) -> Result<ImportReport, Error> {
    let records = match format {
        ImportFormat::Csv => parse_csv(data)?,
        ImportFormat::Json => parse_json(data)?,
    };
    let issues = validate_records(&records);
    Ok(ImportReport { records, issues })
}

/// # Errors
///
/// Fails when a row cannot be decoded against the header.
pub fn parse_csv(data: &str) -> Result<Vec<ImportRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.trim().as_bytes());

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// # Errors
///
/// Fails on invalid JSON or a top level that is not an array. Array
/// items that are not station objects decode to empty records and get
/// flagged by validation instead.
pub fn parse_json(data: &str) -> Result<Vec<ImportRecord>, Error> {
    let value: serde_json::Value = serde_json::from_str(data)?;
    let serde_json::Value::Array(items) = value else {
        return Err(Error::Validation(
            "Data must be an array of station records".to_string(),
        ));
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// Flag missing ids, names and line assignments, and repeated ids.
/// Missing ids and duplicates are errors; the rest are warnings.
pub fn validate_records(records: &[ImportRecord]) -> Vec<ImportIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        if record.id.is_empty() {
            issues.push(ImportIssue {
                severity: Severity::Error,
                row,
                message: format!("Row {row}: Missing station ID"),
            });
        }
        if record.name.is_empty() {
            issues.push(ImportIssue {
                severity: Severity::Warning,
                row,
                message: format!("Row {row}: Missing station name"),
            });
        }
        if !record.id.is_empty() && !seen.insert(&record.id) {
            issues.push(ImportIssue {
                severity: Severity::Error,
                row,
                message: format!("Row {row}: Duplicate ID \"{}\"", record.id),
            });
        }
        if record.line.is_empty() {
            issues.push(ImportIssue {
                severity: Severity::Warning,
                row,
                message: format!("Row {row}: Missing line assignment"),
            });
        }
    }

    issues
}
