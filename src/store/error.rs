//! Store error taxonomy.
//!
//! Every store and query component propagates these typed failures upward;
//! the HTTP boundary maps them onto status codes (`NotFound` → 404,
//! `Validation` → 400, `Conflict` → 409, `Unavailable` → 503).

use thiserror::Error;

/// Typed failure of a graph store or query operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An entity id was not present in the store.
    #[error("{0} not found")]
    NotFound(String),

    /// A required input field was missing or malformed.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Reserved for unique-constraint violations; not currently produced.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store could not be reached or failed transiently.
    /// No retry is attempted internally; retries are a caller concern.
    #[error("graph store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl StoreError {
    /// Shorthand for a `NotFound` over a concept id.
    pub fn concept_not_found(id: &str) -> Self {
        Self::NotFound(format!("concept '{}'", id))
    }

    /// Shorthand for a `NotFound` over a map id.
    pub fn map_not_found(id: &str) -> Self {
        Self::NotFound(format!("map '{}'", id))
    }
}

impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        Self::Unavailable(anyhow::Error::new(err))
    }
}

/// Result alias used across the store and query layers.
pub type StoreResult<T> = Result<T, StoreError>;
