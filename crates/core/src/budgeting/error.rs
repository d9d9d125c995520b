//! Budgeting error types.
//!
//! These never cross the public service boundary: the service collapses every
//! error into its soft `false`/`None`/empty signal after recording the
//! category. The taxonomy exists so store failures stay distinguishable from
//! ordinary authorization misses in the logs.

use thiserror::Error;

/// Result alias for store and internal service operations.
pub type BudgetingResult<T> = Result<T, BudgetingError>;

/// Internal budgeting errors.
#[derive(Debug, Error)]
pub enum BudgetingError {
    /// Caller supplied no user identity.
    #[error("caller user id is missing or empty")]
    MissingUser,

    /// The referenced record does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Entity name.
        entity: &'static str,
    },

    /// The record exists but belongs to a different user (or is global).
    #[error("{entity} is not owned by the caller")]
    NotOwned {
        /// Entity name.
        entity: &'static str,
    },

    /// The record is still referenced by budget or actual items.
    #[error("{entity} is still referenced by budget or actual items")]
    InUse {
        /// Entity name.
        entity: &'static str,
    },

    /// Input failed a validation rule.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// The persistence layer failed unexpectedly.
    #[error("store error: {0}")]
    Store(String),
}

impl BudgetingError {
    /// Create a store error from any display-able failure.
    #[must_use]
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }
}
