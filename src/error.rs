//! Error taxonomy for generation and CSV handling

use crate::validate::Violation;
use thiserror::Error as ThisError;

/// Errors surfaced by the generator and its CSV collaborator
#[derive(ThisError, Debug)]
pub enum GeneratorError {
    /// A generation parameter was rejected before any bar was produced
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A parsed row that cannot be a bar, e.g. a `NaN` or `inf` price
    #[error("Invalid row {row}: {violation}")]
    InvalidRow { row: usize, violation: Violation },
}

impl GeneratorError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeneratorError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
