//! View models for the dashboard's view selector
//!
//! Each view is a pure projection of the current record set; renderers only
//! format what these functions return.

use crate::error::DashboardError;
use crate::types::{ClientRecord, ComplianceStatus, MetricsSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    Summary,
    Compliance,
    Timeline,
    DataTable,
}

impl DashboardView {
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Summary,
        DashboardView::Compliance,
        DashboardView::Timeline,
        DashboardView::DataTable,
    ];

    pub fn title(&self) -> &str {
        match self {
            DashboardView::Summary => "Summary",
            DashboardView::Compliance => "Compliance Status",
            DashboardView::Timeline => "Contract Signing Timeline",
            DashboardView::DataTable => "Client Data Table",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DashboardView::Summary => "Summary",
            DashboardView::Compliance => "Compliance",
            DashboardView::Timeline => "Timeline",
            DashboardView::DataTable => "Data Table",
        };
        f.write_str(label)
    }
}

impl FromStr for DashboardView {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(DashboardView::Summary),
            "compliance" => Ok(DashboardView::Compliance),
            "timeline" => Ok(DashboardView::Timeline),
            "data table" | "data-table" | "data_table" | "datatable" => Ok(DashboardView::DataTable),
            other => Err(DashboardError::Config(format!("unknown view: {}", other))),
        }
    }
}

/// Bar for the compliance distribution chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ComplianceStatus,
    pub count: usize,
}

/// Status counts ordered by count descending, Compliant first on ties.
/// Statuses with no clients are omitted.
pub fn compliance_distribution(records: &[ClientRecord]) -> Vec<StatusCount> {
    let mut counts: HashMap<ComplianceStatus, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.compliance_status()).or_insert(0) += 1;
    }

    let mut bars: Vec<StatusCount> = counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count).then(a.status.cmp(&b.status)));
    bars
}

/// Point on the contract signing timeline.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelinePoint {
    pub name: String,
    pub signing_date: NaiveDate,
}

/// Clients with a known signing date, in input order.
pub fn timeline(records: &[ClientRecord]) -> Vec<TimelinePoint> {
    records
        .iter()
        .filter_map(|r| {
            r.initial_signing_date.map(|signing_date| TimelinePoint {
                name: r.name.clone(),
                signing_date,
            })
        })
        .collect()
}

pub fn subsidiary_majority(summary: &MetricsSummary) -> bool {
    summary.subsidiary_count > summary.standalone_count
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableRow {
    pub record: ClientRecord,
    pub status: ComplianceStatus,
}

pub fn table_rows(records: &[ClientRecord]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow {
            status: record.compliance_status(),
            record: record.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    SigningDate,
    AssessmentDate,
    OrgStructure,
    CreditCheck,
    Status,
}

impl FromStr for SortColumn {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "signing_date" | "signing" => Ok(SortColumn::SigningDate),
            "assessment_date" | "assessment" => Ok(SortColumn::AssessmentDate),
            "org_structure" | "org" => Ok(SortColumn::OrgStructure),
            "credit_check" | "check" => Ok(SortColumn::CreditCheck),
            "status" => Ok(SortColumn::Status),
            other => Err(DashboardError::Config(format!("unknown sort column: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(DashboardError::Config(format!("unknown sort order: {}", other))),
        }
    }
}

// Missing dates sort last in either direction.
fn cmp_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of table rows by one column.
pub fn sort_table(rows: &mut [TableRow], column: SortColumn, order: SortOrder) {
    rows.sort_by(|a, b| {
        let (ra, rb) = (&a.record, &b.record);
        let ordering = match column {
            SortColumn::SigningDate => {
                return cmp_dates(ra.initial_signing_date, rb.initial_signing_date, order)
            }
            SortColumn::AssessmentDate => {
                return cmp_dates(ra.credit_assessment_date, rb.credit_assessment_date, order)
            }
            SortColumn::Name => ra.name.cmp(&rb.name),
            SortColumn::OrgStructure => ra.org_structure.as_str().cmp(rb.org_structure.as_str()),
            SortColumn::CreditCheck => ra.external_credit_check.cmp(&rb.external_credit_check),
            SortColumn::Status => a.status.cmp(&b.status),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
