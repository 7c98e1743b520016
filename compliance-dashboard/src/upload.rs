//! Uploaded screening spreadsheets
//!
//! Uploads use a different schema from the client table. Every column in
//! [`REQUIRED_COLUMNS`] must be present in the header or the whole upload is
//! rejected; individual empty cells are accepted as `None`.

use crate::aggregator::{count_matching, rate};
use crate::error::{DashboardError, Result};
use crate::types::{ScreeningRecord, ScreeningSummary};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub const REQUIRED_COLUMNS: [&str; 12] = [
    "Client Name",
    "Directors Details (Confidential)",
    "Country",
    "Province/State",
    "City",
    "Industry Summary",
    "ESG Summary",
    "Credit Risk Rating",
    "PEP Match?",
    "Media Hits?",
    "Additional Notes",
    "Completion Status",
];

/// Bucket for rows without a credit risk rating.
pub const UNRATED: &str = "Unrated";

/// A validated upload with its summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScreeningReport {
    pub records: Vec<ScreeningRecord>,
    pub summary: ScreeningSummary,
}

impl ScreeningReport {
    pub fn from_records(records: Vec<ScreeningRecord>) -> Self {
        let summary = aggregate_screening(&records);
        Self { records, summary }
    }
}

/// Reject a header that lacks any required column, naming all of them.
pub fn validate_headers(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        warn!("Upload rejected, missing columns: {}", missing.join(", "));
        Err(DashboardError::MissingColumns(missing))
    }
}

/// Read and validate a screening spreadsheet exported as CSV.
pub fn load_screening<R: Read>(reader: R) -> Result<Vec<ScreeningRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
    let headers = rdr.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for row in rdr.deserialize::<ScreeningRecord>() {
        records.push(row?);
    }

    info!("Loaded {} screening rows", records.len());
    Ok(records)
}

pub fn load_screening_file(path: impl AsRef<Path>) -> Result<Vec<ScreeningRecord>> {
    let file = File::open(path)?;
    load_screening(file)
}

/// Summarise an upload: completion, PEP and media-hit counts plus the
/// distribution of credit risk ratings.
pub fn aggregate_screening(records: &[ScreeningRecord]) -> ScreeningSummary {
    let total = records.len();
    let completed_count = count_matching(records, ScreeningRecord::is_completed);

    let mut risk_rating_counts = BTreeMap::new();
    for record in records {
        let rating = record
            .credit_risk_rating
            .clone()
            .unwrap_or_else(|| UNRATED.to_string());
        *risk_rating_counts.entry(rating).or_insert(0) += 1;
    }

    ScreeningSummary {
        total,
        completed_count,
        pep_match_count: count_matching(records, ScreeningRecord::has_pep_match),
        media_hit_count: count_matching(records, ScreeningRecord::has_media_hits),
        completion_rate: rate(completed_count, total),
        risk_rating_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Client Name,Directors Details (Confidential),Country,Province/State,City,Industry Summary,ESG Summary,Credit Risk Rating,PEP Match?,Media Hits?,Additional Notes,Completion Status";

    fn upload(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn test_load_and_aggregate() {
        let input = upload(&[
            "Riverside,J. Smith,South Africa,Gauteng,Pretoria,Retail,Low impact,Low,No,No,,Completed",
            "Tente,A. Jones,South Africa,Western Cape,Cape Town,Manufacturing,,High,Yes,Yes,Follow up,In Progress",
            "Givaudan,,Switzerland,Geneva,Vernier,Chemicals,,,No,Yes,,Completed",
        ]);
        let records = load_screening(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].additional_notes.as_deref(), Some("Follow up"));
        assert_eq!(records[2].directors_details, None);

        let summary = aggregate_screening(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.pep_match_count, 1);
        assert_eq!(summary.media_hit_count, 2);
        assert_eq!(summary.risk_rating_counts.get("Low"), Some(&1));
        assert_eq!(summary.risk_rating_counts.get("High"), Some(&1));
        assert_eq!(summary.risk_rating_counts.get(UNRATED), Some(&1));
    }

    #[test]
    fn test_missing_pep_column_is_rejected() {
        let input = "Client Name,Directors Details (Confidential),Country,Province/State,City,Industry Summary,ESG Summary,Credit Risk Rating,Media Hits?,Additional Notes,Completion Status\nRiverside,,,,,,,,No,,Completed\n";
        let err = load_screening(input.as_bytes()).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["PEP Match?".to_string()][..]));
        assert!(err.to_string().contains("PEP Match?"));
    }

    #[test]
    fn test_all_missing_columns_are_named() {
        let input = "Client Name,Country\nRiverside,South Africa\n";
        let err = load_screening(input.as_bytes()).unwrap_err();
        let missing = err.missing_columns().unwrap();
        assert_eq!(missing.len(), 10);
        assert_eq!(missing[0], "Directors Details (Confidential)");
        assert_eq!(missing[9], "Completion Status");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = format!(
            "{},Account Manager\nRiverside,,,,,,,Low,No,No,,Completed,M. Naidoo\n",
            HEADER
        );
        let records = load_screening(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_completed());
    }

    #[test]
    fn test_ragged_rows_are_an_error() {
        let input = upload(&["Riverside,too,few"]);
        let err = load_screening(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Csv(_)));
    }

    #[test]
    fn test_empty_upload() {
        let summary = aggregate_screening(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.completion_rate, 0.0);
        assert!(summary.risk_rating_counts.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_screening_file("/nonexistent/screening.csv").unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
