use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Literal that confirms an external credit check.
pub const CONFIRMED: &str = "Yes";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum OrgStructure {
    Subsidiary,
    Standalone,
}

impl OrgStructure {
    /// Anything other than the exact literal "Subsidiary" counts as standalone.
    pub fn from_label(label: &str) -> Self {
        if label == "Subsidiary" {
            OrgStructure::Subsidiary
        } else {
            OrgStructure::Standalone
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrgStructure::Subsidiary => "Subsidiary",
            OrgStructure::Standalone => "Standalone",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One client contract row of the primary dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientRecord {
    pub name: String,
    pub initial_signing_date: Option<NaiveDate>,
    pub credit_assessment_date: Option<NaiveDate>,
    pub org_structure: OrgStructure,
    pub external_credit_check: String,
}

impl ClientRecord {
    pub fn compliance_status(&self) -> ComplianceStatus {
        crate::aggregator::classify(self)
    }

    pub fn is_subsidiary(&self) -> bool {
        self.org_structure == OrgStructure::Subsidiary
    }
}

/// Aggregate counts and rates over a client record set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSummary {
    pub total: usize,
    pub subsidiary_count: usize,
    pub standalone_count: usize,
    pub compliant_count: usize,
    pub non_compliant_count: usize,
    pub compliance_rate: f64,     // 0.0-100.0
    pub non_compliance_rate: f64, // 0.0-100.0
}

/// One row of an uploaded screening spreadsheet. Empty cells are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningRecord {
    #[serde(rename = "Client Name")]
    pub client_name: Option<String>,
    #[serde(rename = "Directors Details (Confidential)")]
    pub directors_details: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Province/State")]
    pub province_state: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Industry Summary")]
    pub industry_summary: Option<String>,
    #[serde(rename = "ESG Summary")]
    pub esg_summary: Option<String>,
    #[serde(rename = "Credit Risk Rating")]
    pub credit_risk_rating: Option<String>,
    #[serde(rename = "PEP Match?")]
    pub pep_match: Option<String>,
    #[serde(rename = "Media Hits?")]
    pub media_hits: Option<String>,
    #[serde(rename = "Additional Notes")]
    pub additional_notes: Option<String>,
    #[serde(rename = "Completion Status")]
    pub completion_status: Option<String>,
}

impl ScreeningRecord {
    pub fn is_completed(&self) -> bool {
        self.completion_status.as_deref() == Some("Completed")
    }

    pub fn has_pep_match(&self) -> bool {
        self.pep_match.as_deref() == Some(CONFIRMED)
    }

    pub fn has_media_hits(&self) -> bool {
        self.media_hits.as_deref() == Some(CONFIRMED)
    }
}

/// Aggregate counts over an uploaded screening spreadsheet.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScreeningSummary {
    pub total: usize,
    pub completed_count: usize,
    pub pep_match_count: usize,
    pub media_hit_count: usize,
    pub completion_rate: f64, // 0.0-100.0
    pub risk_rating_counts: BTreeMap<String, usize>,
}
