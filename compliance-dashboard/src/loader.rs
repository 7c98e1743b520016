//! Dataset loader for the client contract table.
//!
//! Dates are parsed best-effort: a value that is not a `DD.MM.YYYY` date
//! (free-text placeholders, blanks) becomes `None` and the row still loads.

use crate::error::Result;
use crate::types::{ClientRecord, OrgStructure};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, info};

/// Date layout used by every date column of the client table.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Client table bundled with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../data/clients.csv");

#[derive(Deserialize)]
struct ClientRow {
    #[serde(rename = "Client Name")]
    name: String,
    #[serde(rename = "Date of initial contract signing")]
    initial_signing_date: Option<String>,
    #[serde(rename = "Date of final credit assessment completed")]
    credit_assessment_date: Option<String>,
    #[serde(rename = "Subsidiary or a standalone")]
    org_structure: String,
    #[serde(rename = "External credit check")]
    external_credit_check: Option<String>,
}

impl From<ClientRow> for ClientRecord {
    fn from(row: ClientRow) -> Self {
        ClientRecord {
            name: row.name,
            initial_signing_date: row.initial_signing_date.as_deref().and_then(parse_date),
            credit_assessment_date: row.credit_assessment_date.as_deref().and_then(parse_date),
            org_structure: OrgStructure::from_label(&row.org_structure),
            external_credit_check: row.external_credit_check.unwrap_or_default(),
        }
    }
}

/// Parse a `DD.MM.YYYY` date. Never fails: anything else yields `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Load the embedded client table.
pub fn load() -> Result<Vec<ClientRecord>> {
    load_from_reader(EMBEDDED_DATASET.as_bytes())
}

/// Load a client table from any CSV source with the standard header.
///
/// Columns are matched by header name, so extra columns (such as an exported
/// `Compliance Status`) are ignored. Row order is preserved.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<ClientRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
    let mut records = Vec::new();

    for row in rdr.deserialize::<ClientRow>() {
        records.push(ClientRecord::from(row?));
    }

    let undated = records
        .iter()
        .filter(|r| r.credit_assessment_date.is_none())
        .count();
    debug!("{} of {} records have no credit assessment date", undated, records.len());
    info!("Loaded {} client records", records.len());

    Ok(records)
}
