//! Store abstraction for the budgeting service.

use chrono::NaiveDate;
use zerobudget_shared::{
    ActualItemId, BudgetCategoryId, BudgetItemId, BudgetPeriodId, BudgetPeriodTypeId,
};

use super::error::BudgetingResult;
use super::types::{
    ActualItem, BudgetCategory, BudgetItem, BudgetPeriod, BudgetPeriodType,
    CreateActualItemInput, CreateBudgetCategoryInput, CreateBudgetItemInput,
    CreateBudgetPeriodInput, FrequencyType,
};

/// Transactional record store backing the budgeting service.
///
/// This trait is implemented by the db crate over SeaORM, and by an in-memory
/// store in unit tests. Mutating methods report whether a row actually
/// changed; insert methods return the stored record with its generated key.
/// Ownership and integrity decisions stay in the service; the store only
/// provides the filtered queries and reference checks the service asks for.
pub trait BudgetingStore: Send + Sync {
    // === Budget periods ===

    /// Point lookup of a budget period by key.
    fn find_budget_period(
        &self,
        id: BudgetPeriodId,
    ) -> impl std::future::Future<Output = BudgetingResult<Option<BudgetPeriod>>> + Send;

    /// All budget periods owned by the given user, in no particular order.
    fn list_budget_periods(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<BudgetPeriod>>> + Send;

    /// Whether a period with this exact (owner, start date, type) exists.
    fn budget_period_exists(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        budget_period_type_id: BudgetPeriodTypeId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Inserts a budget period, returning the stored record.
    fn insert_budget_period(
        &self,
        input: CreateBudgetPeriodInput,
    ) -> impl std::future::Future<Output = BudgetingResult<BudgetPeriod>> + Send;

    /// Overwrites the stored period identified by `period.id`.
    fn update_budget_period(
        &self,
        period: &BudgetPeriod,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Deletes a budget period by key.
    fn delete_budget_period(
        &self,
        id: BudgetPeriodId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Whether any budget or actual item references this period.
    fn budget_period_in_use(
        &self,
        id: BudgetPeriodId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    // === Budget categories ===

    /// Point lookup of a budget category by key.
    fn find_budget_category(
        &self,
        id: BudgetCategoryId,
    ) -> impl std::future::Future<Output = BudgetingResult<Option<BudgetCategory>>> + Send;

    /// Categories owned by the given user plus the global shared categories.
    fn list_budget_categories(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<BudgetCategory>>> + Send;

    /// Whether a category with this exact
    /// (owner, name, tax flag, parent) exists.
    fn budget_category_exists(
        &self,
        user_id: &str,
        name: &str,
        is_tax_deductible: bool,
        parent_budget_category_id: Option<BudgetCategoryId>,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Inserts a budget category, returning the stored record.
    fn insert_budget_category(
        &self,
        input: CreateBudgetCategoryInput,
    ) -> impl std::future::Future<Output = BudgetingResult<BudgetCategory>> + Send;

    /// Overwrites the stored category identified by `category.id`.
    fn update_budget_category(
        &self,
        category: &BudgetCategory,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Deletes a budget category by key.
    fn delete_budget_category(
        &self,
        id: BudgetCategoryId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Whether any budget or actual item references this category.
    fn budget_category_in_use(
        &self,
        id: BudgetCategoryId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    // === Budget items ===

    /// Point lookup of a budget item by key.
    fn find_budget_item(
        &self,
        id: BudgetItemId,
    ) -> impl std::future::Future<Output = BudgetingResult<Option<BudgetItem>>> + Send;

    /// All budget items owned by the given user.
    fn list_budget_items(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<BudgetItem>>> + Send;

    /// Budget items owned by the given user within one period.
    fn list_budget_items_for_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<BudgetItem>>> + Send;

    /// Inserts a budget item, returning the stored record.
    fn insert_budget_item(
        &self,
        input: CreateBudgetItemInput,
    ) -> impl std::future::Future<Output = BudgetingResult<BudgetItem>> + Send;

    /// Overwrites the stored item identified by `item.id`.
    fn update_budget_item(
        &self,
        item: &BudgetItem,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Deletes a budget item by key.
    fn delete_budget_item(
        &self,
        id: BudgetItemId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    // === Actual items ===

    /// Point lookup of an actual item by key.
    fn find_actual_item(
        &self,
        id: ActualItemId,
    ) -> impl std::future::Future<Output = BudgetingResult<Option<ActualItem>>> + Send;

    /// All actual items owned by the given user.
    fn list_actual_items(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<ActualItem>>> + Send;

    /// Actual items owned by the given user within one period.
    fn list_actual_items_for_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<ActualItem>>> + Send;

    /// Inserts an actual item, returning the stored record.
    fn insert_actual_item(
        &self,
        input: CreateActualItemInput,
    ) -> impl std::future::Future<Output = BudgetingResult<ActualItem>> + Send;

    /// Overwrites the stored item identified by `item.id`.
    fn update_actual_item(
        &self,
        item: &ActualItem,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    /// Deletes an actual item by key.
    fn delete_actual_item(
        &self,
        id: ActualItemId,
    ) -> impl std::future::Future<Output = BudgetingResult<bool>> + Send;

    // === Reference data ===

    /// All budget period types.
    fn list_budget_period_types(
        &self,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<BudgetPeriodType>>> + Send;

    /// All frequency types.
    fn list_frequency_types(
        &self,
    ) -> impl std::future::Future<Output = BudgetingResult<Vec<FrequencyType>>> + Send;
}
