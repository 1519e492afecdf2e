//! Error types for IPChecker core operations

use crate::types::IpFamily;
use thiserror::Error;

/// Main error type for IPChecker core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Deny-list error: {0}")]
    DenyList(#[from] DenyListError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Errors raised while building a deny-list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DenyListError {
    #[error("'{entry}' is not a valid {family} address")]
    InvalidEntry { family: IpFamily, entry: String },
}

/// Errors related to presentation adapters
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
