//! Repository implementations for database operations.

mod budgeting;

pub use budgeting::BudgetingRepository;
