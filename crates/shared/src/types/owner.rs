//! Record ownership.
//!
//! The persistence layer stores the owner as a nullable user id column, where
//! both NULL and the empty string mean "no owner". `Owner` makes that
//! distinction explicit: a record is either `Global` (shared, read-only through
//! the service) or owned by exactly one user.

use serde::{Deserialize, Serialize};

/// Ownership of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// Shared record visible to every user, owned by none.
    Global,
    /// Record owned by the user with this identity-provider id.
    User(String),
}

impl Owner {
    /// Maps a nullable owner column to an `Owner`.
    ///
    /// NULL and the empty string both mean `Global`.
    #[must_use]
    pub fn from_column(user_id: Option<String>) -> Self {
        match user_id {
            Some(id) if !id.is_empty() => Self::User(id),
            _ => Self::Global,
        }
    }

    /// Builds an owner from a caller-supplied user id, treating the empty
    /// string as no owner.
    #[must_use]
    pub fn from_user(user_id: &str) -> Self {
        if user_id.is_empty() {
            Self::Global
        } else {
            Self::User(user_id.to_string())
        }
    }

    /// Maps the owner back to the nullable column representation.
    #[must_use]
    pub fn into_column(self) -> Option<String> {
        match self {
            Self::Global => None,
            Self::User(id) => Some(id),
        }
    }

    /// Returns the nullable column representation without consuming the owner.
    #[must_use]
    pub fn as_column(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::User(id) => Some(id),
        }
    }

    /// Whether this record is owned by the given user.
    ///
    /// Global records are owned by no one; an empty caller id matches nothing.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        match self {
            Self::Global => false,
            Self::User(id) => !user_id.is_empty() && id == user_id,
        }
    }

    /// Whether this record is global (shared).
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}
