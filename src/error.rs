//! Error Types
//!
//! `FormError` is shown to the user as a toast; `DataError` only ever reaches
//! the log.

use thiserror::Error;

/// Rejected form submission. The message is the toast text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("No items selected")]
    NothingSelected,
}

/// Failure decoding embedded fixtures or browser-stored settings
#[derive(Debug, Error)]
pub enum DataError {
    #[error("fixture `{name}` is malformed: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
}

pub type DataResult<T> = std::result::Result<T, DataError>;
