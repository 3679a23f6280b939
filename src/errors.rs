use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Non-fatal failures raised while projecting entries. They are recorded as
/// [`Diagnostic`]s next to the partial output instead of aborting the run.
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
pub enum SolverError {
    #[error("Invalid timestamp while building month starting {0}")]
    InvalidTimestamp(NaiveDate),
    #[error("Recurrence step failed after {0}")]
    RecurrenceStepFailure(NaiveDate),
    #[error("Empty or inverted date range")]
    EmptyOrInvertedRange,
    #[error("Invalid currency rate {rate} for {code}")]
    InvalidRate { code: String, rate: f64 },
}

/// The unit of work a diagnostic applies to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DiagnosticUnit {
    Entry { index: usize, description: String },
    Month(NaiveDate),
    Range,
}

/// A skipped or truncated unit together with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub unit: DiagnosticUnit,
    pub error: SolverError,
}

impl Diagnostic {
    pub fn new(unit: DiagnosticUnit, error: SolverError) -> Self {
        Self { unit, error }
    }
}

/// Error type for loading and storing solver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
