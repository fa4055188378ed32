//! CSV import of company submissions for batch screening.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::domain::SCORE_SUFFIX;
use super::{ClimateRiskReport, ClimateScreeningEngine, CompanySubmission};

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read company export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid company CSV data: {}", err),
            BatchImportError::InvalidNumber { row, column, value } => write!(
                f,
                "row {}: column `{}` is not a number ({:?})",
                row, column, value
            ),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::InvalidNumber { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Outcome for one CSV row; a failed row keeps its error text instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    Screened {
        row: usize,
        report: ClimateRiskReport,
    },
    Failed {
        row: usize,
        company_name: Option<String>,
        error: String,
    },
}

impl BatchEntry {
    pub fn row(&self) -> usize {
        match self {
            BatchEntry::Screened { row, .. } | BatchEntry::Failed { row, .. } => *row,
        }
    }

    pub fn report(&self) -> Option<&ClimateRiskReport> {
        match self {
            BatchEntry::Screened { report, .. } => Some(report),
            BatchEntry::Failed { .. } => None,
        }
    }
}

/// One CSV data row: the parsed submission, or why the row could not be read.
#[derive(Debug)]
pub struct ImportedRow {
    pub row: usize,
    pub company_name: Option<String>,
    pub submission: Result<CompanySubmission, BatchImportError>,
}

pub struct CompanyCsvImporter;

impl CompanyCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedRow>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse submissions row by row. Known columns map to fields, other `*_score` columns become
    /// sub-factors, and anything else is ignored. Empty cells are treated as absent. Only an
    /// unreadable header fails the whole import.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedRow>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let name_column = headers.iter().position(|column| column == "company_name");

        let rows = csv_reader
            .records()
            .enumerate()
            .map(|(index, record)| {
                let row = index + 1;
                match record {
                    Ok(record) => ImportedRow {
                        row,
                        company_name: name_column
                            .and_then(|position| record.get(position))
                            .filter(|name| !name.is_empty())
                            .map(str::to_string),
                        submission: parse_record(row, &headers, &record),
                    },
                    Err(err) => ImportedRow {
                        row,
                        company_name: None,
                        submission: Err(err.into()),
                    },
                }
            })
            .collect();

        Ok(rows)
    }
}

fn parse_record(
    row: usize,
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
) -> Result<CompanySubmission, BatchImportError> {
    let mut submission = CompanySubmission::default();
    let mut factor_scores = BTreeMap::new();

    for (column, value) in headers.iter().zip(record.iter()) {
        if value.is_empty() {
            continue;
        }
        match column {
            "company_name" => submission.company_name = Some(value.to_string()),
            "industry" => submission.industry = Some(value.to_string()),
            "location" => submission.location = Some(value.to_string()),
            "revenue" => submission.revenue = Some(parse_number(row, column, value)?),
            "carbon_footprint" => {
                submission.carbon_footprint = Some(parse_number(row, column, value)?)
            }
            "physical_risk_score" => {
                submission.physical_risk_score = Some(parse_number(row, column, value)?)
            }
            "transition_risk_score" => {
                submission.transition_risk_score = Some(parse_number(row, column, value)?)
            }
            other if other.ends_with(SCORE_SUFFIX) => {
                factor_scores.insert(other.to_string(), parse_number(row, column, value)?);
            }
            _ => {}
        }
    }

    submission.factor_scores = factor_scores;
    Ok(submission)
}

fn parse_number(row: usize, column: &str, value: &str) -> Result<f64, BatchImportError> {
    value
        .parse::<f64>()
        .map_err(|_| BatchImportError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Screen every imported row independently; unreadable rows become failed entries.
pub fn screen_batch(engine: &ClimateScreeningEngine, rows: Vec<ImportedRow>) -> Vec<BatchEntry> {
    rows.into_iter()
        .map(|imported| {
            let ImportedRow {
                row,
                company_name,
                submission,
            } = imported;
            let outcome = submission.map_err(|err| err.to_string()).and_then(|submission| {
                engine
                    .assess_submission(submission)
                    .map_err(|err| err.to_string())
            });
            match outcome {
                Ok(report) => BatchEntry::Screened { row, report },
                Err(error) => BatchEntry::Failed {
                    row,
                    company_name,
                    error,
                },
            }
        })
        .collect()
}
