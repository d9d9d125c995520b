//! `SeaORM` entity definitions.
//!
//! Each entity module also carries the conversion from its row `Model` into
//! the corresponding domain type from the core crate.

pub mod actual_items;
pub mod budget_categories;
pub mod budget_items;
pub mod budget_period_types;
pub mod budget_periods;
pub mod frequency_types;
