//! Configuration for the compliance dashboard

use crate::error::{DashboardError, Result};
use crate::views::{DashboardView, SortColumn, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// How the dashboard binary writes to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Rendered view for a terminal
    #[default]
    Text,
    /// Summaries as JSON for other tools
    Json,
}

impl FromStr for OutputFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DashboardError::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Client table to load instead of the embedded one
    pub dataset_path: Option<PathBuf>,

    /// Screening spreadsheet (CSV) to attach at startup
    pub upload_path: Option<PathBuf>,

    /// View rendered by the dashboard binary
    pub view: DashboardView,

    /// Output written to stdout
    pub format: OutputFormat,

    /// Where to write the processed client table as CSV
    pub export_path: Option<PathBuf>,

    /// Data table sort column (input order when unset)
    pub table_sort: Option<SortColumn>,

    /// Data table sort direction
    pub table_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "compliance-dashboard".to_string(),
            dataset_path: None,
            upload_path: None,
            view: DashboardView::Summary,
            format: OutputFormat::Text,
            export_path: None,
            table_sort: None,
            table_order: SortOrder::Ascending,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from `DASHBOARD_CONFIG` (if set), then apply environment overrides
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var("DASHBOARD_CONFIG") {
            Ok(path) => Config::from_file(path)?,
            Err(_) => Config::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `DASHBOARD_*` overrides from a variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("DASHBOARD_DATASET") {
            self.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("DASHBOARD_UPLOAD") {
            self.upload_path = Some(PathBuf::from(path));
        }

        if let Some(view) = lookup("DASHBOARD_VIEW") {
            self.view = view.parse()?;
        }

        if let Some(format) = lookup("DASHBOARD_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(path) = lookup("DASHBOARD_EXPORT") {
            self.export_path = Some(PathBuf::from(path));
        }

        if let Some(column) = lookup("DASHBOARD_SORT") {
            self.table_sort = Some(column.parse()?);
        }

        if let Some(order) = lookup("DASHBOARD_ORDER") {
            self.table_order = order.parse()?;
        }

        Ok(self)
    }
}
