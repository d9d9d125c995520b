//! Ownership-scoped budgeting CRUD service.
//!
//! Every read and write of the five budgeting collections goes through
//! [`BudgetingService`], which enforces per-user data isolation and
//! reference-checked deletion on top of a transactional record store.

pub mod error;
pub mod service;
pub mod store;
pub mod types;


pub use error::{BudgetingError, BudgetingResult};
pub use service::BudgetingService;
pub use store::BudgetingStore;
pub use types::{
    ActualItem, BudgetCategory, BudgetItem, BudgetPeriod, BudgetPeriodType,
    CreateActualItemInput, CreateBudgetCategoryInput, CreateBudgetItemInput,
    CreateBudgetPeriodInput, FrequencyType, NewActualItem, NewBudgetItem, OwnedRecord,
    TransactionType,
};
