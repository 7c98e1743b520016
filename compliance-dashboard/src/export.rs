//! Downloadable exports of the processed client table

use crate::error::{DashboardError, Result};
use crate::loader::DATE_FORMAT;
use crate::types::{ClientRecord, MetricsSummary, ScreeningSummary};
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ClientOutRow<'a> {
    #[serde(rename = "Client Name")]
    name: &'a str,
    #[serde(rename = "Date of initial contract signing")]
    initial_signing_date: String,
    #[serde(rename = "Date of final credit assessment completed")]
    credit_assessment_date: String,
    #[serde(rename = "Subsidiary or a standalone")]
    org_structure: &'a str,
    #[serde(rename = "External credit check")]
    external_credit_check: &'a str,
    #[serde(rename = "Compliance Status")]
    compliance_status: &'a str,
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Write the record set with the derived `Compliance Status` column.
/// Missing dates are written as empty cells.
pub fn write_csv<W: Write>(w: W, records: &[ClientRecord]) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(w);

    for record in records {
        let status = record.compliance_status();
        wrt.serialize(ClientOutRow {
            name: &record.name,
            initial_signing_date: format_date(record.initial_signing_date),
            credit_assessment_date: format_date(record.credit_assessment_date),
            org_structure: record.org_structure.as_str(),
            external_credit_check: &record.external_credit_check,
            compliance_status: status.as_str(),
        })?;
    }

    wrt.flush()?;
    Ok(())
}

pub fn to_csv_string(records: &[ClientRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| DashboardError::Serialization(e.to_string()))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a MetricsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    screening: Option<&'a ScreeningSummary>,
}

/// Pretty JSON of the client summary, plus the upload summary when present.
pub fn report_json(
    summary: &MetricsSummary,
    screening: Option<&ScreeningSummary>,
) -> Result<String> {
    let report = JsonReport { summary, screening };
    serde_json::to_string_pretty(&report).map_err(|e| DashboardError::Serialization(e.to_string()))
}
