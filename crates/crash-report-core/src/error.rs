use crate::entities::ReportField;
use thiserror::Error;

/// Boxed error type accepted from per-field collection.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collection of a single report field failed.
///
/// Raised by the collector dispatch pass; names the failing field and wraps
/// the originating cause. The failing field is left in the report data as an
/// explicit `null` entry.
#[derive(Error, Debug)]
#[error("failed to collect {field}: {source}")]
pub struct CollectorError {
    field: ReportField,
    source: BoxError,
}

impl CollectorError {
    pub fn new(field: ReportField, source: impl Into<BoxError>) -> Self {
        Self {
            field,
            source: source.into(),
        }
    }

    /// The field whose collection failed.
    pub fn field(&self) -> ReportField {
        self.field
    }
}

/// Errors that can occur while delivering a report to a sender.
#[derive(Error, Debug)]
pub enum SenderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint rejected report with status {status}")]
    Rejected { status: u16 },

    #[error("invalid report: {0}")]
    InvalidReport(String),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the reporter and its storage pipeline.
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("report store error: {0}")]
    Store(#[from] std::io::Error),

    #[error(transparent)]
    Collector(#[from] CollectorError),

    #[error("report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
