use thiserror::Error;

/// Failures surfaced by the catalog domain.
///
/// Validation is performed at the boundary (parsers and normalizers), so a
/// malformed parameter is rejected here and never reaches the data store.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or out-of-range user input (maps to 400).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No matching row (maps to 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Query execution failure (maps to 500, detail stays in the logs).
    #[error("Data store error: {0}")]
    DataStore(String),
}
