//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `BudgetPeriodId` where a
//! `BudgetCategoryId` is expected. The store generates the underlying surrogate
//! keys, so there is no random constructor.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around store-generated keys.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Wraps an existing surrogate key.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the inner key.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(BudgetPeriodTypeId, "Unique identifier for a budget period type.");
typed_id!(FrequencyTypeId, "Unique identifier for a frequency type.");
typed_id!(BudgetPeriodId, "Unique identifier for a budget period.");
typed_id!(BudgetCategoryId, "Unique identifier for a budget category.");
typed_id!(BudgetItemId, "Unique identifier for a budget item.");
typed_id!(ActualItemId, "Unique identifier for an actual item.");
