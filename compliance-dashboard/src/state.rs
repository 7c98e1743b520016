//! Application state handed to the presentation layer

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::types::{ClientRecord, MetricsSummary};
use crate::upload::{load_screening, load_screening_file, ScreeningReport};
use std::fs::File;
use std::io::Read;
use tracing::info;

/// Loaded client records, their summary, and an optional screening upload.
///
/// The summary is recomputed whenever the record set is replaced and never
/// otherwise, so renderers may read it as often as they like.
#[derive(Debug, Clone)]
pub struct AppState {
    records: Vec<ClientRecord>,
    summary: MetricsSummary,
    screening: Option<ScreeningReport>,
}

impl AppState {
    pub fn load(config: &Config) -> Result<Self> {
        let records = match &config.dataset_path {
            Some(path) => {
                info!("Loading client table from {}", path.display());
                loader::load_from_reader(File::open(path)?)?
            }
            None => loader::load()?,
        };

        let mut state = Self::from_records(records);

        if let Some(path) = &config.upload_path {
            info!("Attaching screening upload from {}", path.display());
            state.screening = Some(ScreeningReport::from_records(load_screening_file(path)?));
        }

        Ok(state)
    }

    pub fn from_records(records: Vec<ClientRecord>) -> Self {
        let summary = aggregate(&records);
        Self {
            records,
            summary,
            screening: None,
        }
    }

    /// Swap in a new record set and rebuild the summary.
    pub fn replace_records(&mut self, records: Vec<ClientRecord>) {
        self.summary = aggregate(&records);
        self.records = records;
    }

    /// Validate and attach a screening upload. On error the previous upload,
    /// if any, is kept.
    pub fn attach_upload<R: Read>(&mut self, reader: R) -> Result<&ScreeningReport> {
        let records = load_screening(reader)?;
        Ok(&*self.screening.insert(ScreeningReport::from_records(records)))
    }

    pub fn clear_upload(&mut self) {
        self.screening = None;
    }

    pub fn records(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn summary(&self) -> &MetricsSummary {
        &self.summary
    }

    pub fn screening(&self) -> Option<&ScreeningReport> {
        self.screening.as_ref()
    }
}
