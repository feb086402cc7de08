//! Error types for date-kit operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
