//! Error types for datebook date handling.

use std::fmt;

use thiserror::Error;

/// The date component that failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Month,
    Day,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DateField::Month => write!(f, "Month"),
            DateField::Day => write!(f, "Day"),
        }
    }
}

/// Errors that can occur while parsing or constructing a date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The token does not have the `[-]Y-M-D` shape.
    #[error("Wrong date format: {0}")]
    BadFormat(String),

    /// The token parsed, but month > 12 or day > 31.
    #[error("{field} value is invalid: {value}")]
    InvalidDate { field: DateField, value: u32 },
}

impl DateError {
    pub fn is_bad_format(&self) -> bool {
        matches!(self, DateError::BadFormat(_))
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, DateError::InvalidDate { .. })
    }
}

/// Result type alias for date operations.
pub type DateResult<T> = Result<T, DateError>;
