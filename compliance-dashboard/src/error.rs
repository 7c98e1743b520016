use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Column names reported by a failed upload validation, if any.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            DashboardError::MissingColumns(columns) => Some(columns),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
