//! Error types for the query crate.
//!
//! Queries themselves cannot fail. Errors only come from turning caller
//! input (sort names, genre labels) into typed parameters.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter was outside its enumerated domain
    #[error("Invalid value for {field}: {value:?}")]
    InvalidConfiguration { field: String, value: String },
}

impl QueryError {
    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        Self::InvalidConfiguration {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
