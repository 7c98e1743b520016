//! Client compliance dashboard
//!
//! Loads client contract records, classifies each client's compliance, and
//! aggregates counts and rates for a presentation layer. A secondary path
//! validates and summarises uploaded screening spreadsheets.

#![forbid(unsafe_code)]

pub mod types;
pub mod error;
pub mod loader;
pub mod aggregator;
pub mod upload;
pub mod export;
pub mod views;
pub mod state;
pub mod config;

pub use types::{
    ClientRecord, ComplianceStatus, MetricsSummary, OrgStructure, ScreeningRecord,
    ScreeningSummary,
};
pub use error::{DashboardError, Result};
pub use loader::{load, load_from_reader, parse_date};
pub use aggregator::{aggregate, classify, count_matching};
pub use upload::{aggregate_screening, load_screening, ScreeningReport, REQUIRED_COLUMNS};
pub use views::{DashboardView, SortColumn, SortOrder};
pub use state::AppState;
pub use config::{Config, OutputFormat};
