//! Shared Error Types
//!
//! Two error enums cross the component boundaries:
//!
//! - **`StoreError`**: what a `JokeStore` implementation may report. Keeps the
//!   storage engine's failure modes behind a small, typed surface so that no
//!   driver-native errors leak upward.
//! - **`CatalogError`**: what the catalog service reports to its caller. Every
//!   store fault is classified into exactly one of these kinds; the service
//!   never retries and never substitutes default data.

use thiserror::Error;

/// Failure modes of a [`crate::store::JokeStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the given id or filter. Distinct from an
    /// empty-but-successful query result.
    #[error("no matching record")]
    NotFound,

    /// The operation exists in the contract but has no implementation yet.
    #[error("operation not implemented: {0}")]
    Unimplemented(&'static str),

    /// Connectivity loss, engine fault, or any other unexpected failure.
    #[error("store failure: {0}")]
    Unavailable(String),
}

/// Failure modes of the catalog service, surfaced to the external adapter.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested record does not exist.
    #[error("no matching record")]
    NotFound,

    /// A caller-supplied parameter failed to parse or was out of bounds.
    /// Raised before any store call is issued.
    #[error("invalid parameter: {0}")]
    InvalidInput(String),

    /// The submitted record failed creation rules.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Deferred feature reached through the contract.
    #[error("operation not implemented: {0}")]
    Unimplemented(&'static str),

    /// The store timed out or reported an unexpected fault.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CatalogError::NotFound,
            StoreError::Unimplemented(op) => CatalogError::Unimplemented(op),
            StoreError::Unavailable(msg) => CatalogError::StoreUnavailable(msg),
        }
    }
}
