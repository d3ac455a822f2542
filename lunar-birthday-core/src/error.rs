//! Error types for lunar birthday generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::lunar::LunarError;

/// Errors that can occur while reading requests or producing calendars.
#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Invalid birth date '{0}'. Expected YYYY.MM.DD")]
    DateParse(String),

    #[error("Invalid number of years '{0}'")]
    NumberFormat(String),

    #[error("Number of years must be at least 1, got {0}")]
    InvalidYears(i64),

    #[error("Name must not be empty")]
    MissingName,

    #[error("Invalid remind offset '{0}'. Expected a duration such as -P1D or -PT6H")]
    InvalidRemindOffset(String),

    #[error("Invalid lunar date: {0}")]
    InvalidLunarDate(#[from] LunarError),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Could not access {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BirthdayError {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BirthdayError::FileIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for lunar birthday operations.
pub type BirthdayResult<T> = Result<T, BirthdayError>;
