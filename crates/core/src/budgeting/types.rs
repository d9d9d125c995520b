//! Budgeting data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use zerobudget_shared::{
    ActualItemId, BudgetCategoryId, BudgetItemId, BudgetPeriodId, BudgetPeriodTypeId,
    FrequencyTypeId, Owner,
};

/// Direction of a planned or realized transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in (income).
    Credit,
    /// Money going out (expense).
    Debit,
}

impl From<TransactionType> for i16 {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Credit => 0,
            TransactionType::Debit => 1,
        }
    }
}

impl TryFrom<i16> for TransactionType {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Credit),
            1 => Ok(Self::Debit),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

/// Reference entity describing the cadence of a budget period
/// (weekly, monthly, ...). Seeded at setup and read-only through the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriodType {
    /// Period type ID.
    pub id: BudgetPeriodTypeId,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Reference entity describing how often a reoccurring budget item repeats.
/// Seeded at setup and read-only through the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyType {
    /// Frequency type ID.
    pub id: FrequencyTypeId,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// A user's planning window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Period ID.
    pub id: BudgetPeriodId,
    /// Owning user. Ownerless periods are seed/test artifacts only.
    pub owner: Owner,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Cadence of the period.
    pub budget_period_type_id: BudgetPeriodTypeId,
}

/// A label for classifying transactions. Global categories (no owner) are
/// readable by every user but never updatable or deletable through the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category ID.
    pub id: BudgetCategoryId,
    /// Owning user, or `Global` for shared categories.
    pub owner: Owner,
    /// Display name.
    pub name: String,
    /// Whether transactions in this category are tax deductible.
    pub is_tax_deductible: bool,
    /// Optional parent category.
    pub parent_budget_category_id: Option<BudgetCategoryId>,
}

/// A planned transaction within a period and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Item ID.
    pub id: BudgetItemId,
    /// Owning user. Always a concrete user for items.
    pub owner: Owner,
    /// Category the item is planned against.
    pub budget_category_id: BudgetCategoryId,
    /// Period the item belongs to.
    pub budget_period_id: BudgetPeriodId,
    /// Date the transaction is planned for.
    pub date: NaiveDate,
    /// Amount, 2dp currency semantics.
    pub amount: Decimal,
    /// Credit or debit.
    pub transaction_type: TransactionType,
    /// Whether the item repeats.
    pub is_reoccurring: bool,
    /// Cadence of the repetition, when reoccurring.
    pub frequency_type_id: Option<FrequencyTypeId>,
    /// Repetition multiplier (every `n` weeks/months/...).
    pub frequency_quantity: Option<i32>,
}

/// A realized transaction within a period and category. Structurally a
/// [`BudgetItem`] minus the recurrence fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualItem {
    /// Item ID.
    pub id: ActualItemId,
    /// Owning user. Always a concrete user for items.
    pub owner: Owner,
    /// Category the transaction is filed under.
    pub budget_category_id: BudgetCategoryId,
    /// Period the transaction belongs to.
    pub budget_period_id: BudgetPeriodId,
    /// Date the transaction occurred.
    pub date: NaiveDate,
    /// Amount, 2dp currency semantics.
    pub amount: Decimal,
    /// Credit or debit.
    pub transaction_type: TransactionType,
}

/// Caller-facing input for adding a budget item. The owning user is supplied
/// separately as the caller identity.
#[derive(Debug, Clone)]
pub struct NewBudgetItem {
    /// Category the item is planned against.
    pub budget_category_id: BudgetCategoryId,
    /// Period the item belongs to.
    pub budget_period_id: BudgetPeriodId,
    /// Date the transaction is planned for.
    pub date: NaiveDate,
    /// Amount, 2dp currency semantics.
    pub amount: Decimal,
    /// Credit or debit.
    pub transaction_type: TransactionType,
    /// Whether the item repeats.
    pub is_reoccurring: bool,
    /// Cadence of the repetition, when reoccurring.
    pub frequency_type_id: Option<FrequencyTypeId>,
    /// Repetition multiplier.
    pub frequency_quantity: Option<i32>,
}

/// Caller-facing input for adding an actual item.
#[derive(Debug, Clone)]
pub struct NewActualItem {
    /// Category the transaction is filed under.
    pub budget_category_id: BudgetCategoryId,
    /// Period the transaction belongs to.
    pub budget_period_id: BudgetPeriodId,
    /// Date the transaction occurred.
    pub date: NaiveDate,
    /// Amount, 2dp currency semantics.
    pub amount: Decimal,
    /// Credit or debit.
    pub transaction_type: TransactionType,
}

/// Store input for inserting a budget period.
#[derive(Debug, Clone)]
pub struct CreateBudgetPeriodInput {
    /// Owning user.
    pub owner: Owner,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Cadence of the period.
    pub budget_period_type_id: BudgetPeriodTypeId,
}

/// Store input for inserting a budget category.
#[derive(Debug, Clone)]
pub struct CreateBudgetCategoryInput {
    /// Owning user, or `Global` for seeded shared categories.
    pub owner: Owner,
    /// Display name.
    pub name: String,
    /// Whether transactions in this category are tax deductible.
    pub is_tax_deductible: bool,
    /// Optional parent category.
    pub parent_budget_category_id: Option<BudgetCategoryId>,
}

/// Store input for inserting a budget item.
#[derive(Debug, Clone)]
pub struct CreateBudgetItemInput {
    /// Owning user.
    pub owner: Owner,
    /// Item fields.
    pub item: NewBudgetItem,
}

/// Store input for inserting an actual item.
#[derive(Debug, Clone)]
pub struct CreateActualItemInput {
    /// Owning user.
    pub owner: Owner,
    /// Item fields.
    pub item: NewActualItem,
}

/// A stored record with an owner column, checkable by the generic
/// load-owned-or-fail helper in the service.
pub trait OwnedRecord {
    /// Entity name used in error messages and logs.
    const ENTITY: &'static str;

    /// The record's owner.
    fn owner(&self) -> &Owner;
}

impl OwnedRecord for BudgetPeriod {
    const ENTITY: &'static str = "budget period";

    fn owner(&self) -> &Owner {
        &self.owner
    }
}

impl OwnedRecord for BudgetCategory {
    const ENTITY: &'static str = "budget category";

    fn owner(&self) -> &Owner {
        &self.owner
    }
}

impl OwnedRecord for BudgetItem {
    const ENTITY: &'static str = "budget item";

    fn owner(&self) -> &Owner {
        &self.owner
    }
}

impl OwnedRecord for ActualItem {
    const ENTITY: &'static str = "actual item";

    fn owner(&self) -> &Owner {
        &self.owner
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_transaction_type_roundtrip() {
        assert_eq!(i16::from(TransactionType::Credit), 0);
        assert_eq!(i16::from(TransactionType::Debit), 1);
        assert_eq!(TransactionType::try_from(0), Ok(TransactionType::Credit));
        assert_eq!(TransactionType::try_from(1), Ok(TransactionType::Debit));
        assert!(TransactionType::try_from(7).is_err());
    }
}
