//! Budgeting service implementation.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};
use zerobudget_shared::{
    ActualItemId, BudgetCategoryId, BudgetItemId, BudgetPeriodId, BudgetPeriodTypeId, Owner,
};

use super::error::{BudgetingError, BudgetingResult};
use super::store::BudgetingStore;
use super::types::{
    ActualItem, BudgetCategory, BudgetItem, BudgetPeriod, BudgetPeriodType,
    CreateActualItemInput, CreateBudgetCategoryInput, CreateBudgetItemInput,
    CreateBudgetPeriodInput, FrequencyType, NewActualItem, NewBudgetItem, OwnedRecord,
};

/// Ownership-scoped CRUD façade over a [`BudgetingStore`].
///
/// Nothing is surfaced as an error to the caller: a missing caller identity,
/// a missing record, an owner mismatch, a reference-guard violation, or an
/// unexpected store failure all resolve to `false`, `None`, or an empty list.
/// The internal error category is recorded via `tracing` before it is
/// collapsed.
pub struct BudgetingService<S> {
    store: Arc<S>,
}

/// Rejects an empty caller identity.
fn require_user(user_id: &str) -> BudgetingResult<()> {
    if user_id.is_empty() {
        Err(BudgetingError::MissingUser)
    } else {
        Ok(())
    }
}

/// Load-owned-or-fail: unwraps a looked-up record and checks it belongs to the
/// caller. Shared by every entity type so the owner-check logic exists once.
fn require_owned<T: OwnedRecord>(user_id: &str, record: Option<T>) -> BudgetingResult<T> {
    let record = record.ok_or(BudgetingError::NotFound { entity: T::ENTITY })?;
    if record.owner().is_owned_by(user_id) {
        Ok(record)
    } else {
        Err(BudgetingError::NotOwned { entity: T::ENTITY })
    }
}

/// Collapses an internal result into the soft signal the caller sees,
/// recording the error category first. Store failures are the only surprising
/// case and log at `warn`; everything else is an expected miss.
fn soften<T>(operation: &'static str, fallback: T, result: BudgetingResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            if matches!(err, BudgetingError::Store(_)) {
                warn!(operation, error = %err, "budgeting operation failed");
            } else {
                debug!(operation, reason = %err, "budgeting operation denied");
            }
            fallback
        }
    }
}

impl<S: BudgetingStore> BudgetingService<S> {
    /// Creates a new budgeting service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Budget periods
    // ========================================================================

    /// Returns the period only if it exists and is owned by the caller.
    pub async fn get_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> Option<BudgetPeriod> {
        let result = self.try_get_budget_period(user_id, budget_period_id).await;
        soften("get_budget_period", None, result.map(Some))
    }

    async fn try_get_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<BudgetPeriod> {
        require_user(user_id)?;
        require_owned(user_id, self.store.find_budget_period(budget_period_id).await?)
    }

    /// All periods owned by the caller, most recent start date first; periods
    /// sharing a start date sort most-recently-created first.
    pub async fn get_budget_periods(&self, user_id: &str) -> Vec<BudgetPeriod> {
        let result = self.try_get_budget_periods(user_id).await;
        soften("get_budget_periods", Vec::new(), result)
    }

    async fn try_get_budget_periods(&self, user_id: &str) -> BudgetingResult<Vec<BudgetPeriod>> {
        require_user(user_id)?;
        let mut periods = self.store.list_budget_periods(user_id).await?;
        periods.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(periods)
    }

    /// The caller's period with the latest start date, if any.
    pub async fn get_latest_budget_period(&self, user_id: &str) -> Option<BudgetPeriod> {
        let result = self.try_get_latest_budget_period(user_id).await;
        soften("get_latest_budget_period", None, result)
    }

    async fn try_get_latest_budget_period(
        &self,
        user_id: &str,
    ) -> BudgetingResult<Option<BudgetPeriod>> {
        require_user(user_id)?;
        let periods = self.store.list_budget_periods(user_id).await?;
        Ok(periods.into_iter().max_by_key(|p| (p.start_date, p.id)))
    }

    /// The caller's periods whose start date falls in the current local month.
    ///
    /// Matches on the month number only, not the year, so same-month periods
    /// from past years are included.
    pub async fn get_budget_periods_for_current_month(&self, user_id: &str) -> Vec<BudgetPeriod> {
        self.get_budget_periods_for_month(user_id, Local::now().date_naive().month())
            .await
    }

    /// The caller's periods whose start date falls in the given month number.
    pub async fn get_budget_periods_for_month(
        &self,
        user_id: &str,
        month: u32,
    ) -> Vec<BudgetPeriod> {
        let result = self.try_get_budget_periods_for_month(user_id, month).await;
        soften("get_budget_periods_for_month", Vec::new(), result)
    }

    async fn try_get_budget_periods_for_month(
        &self,
        user_id: &str,
        month: u32,
    ) -> BudgetingResult<Vec<BudgetPeriod>> {
        require_user(user_id)?;
        let periods = self.store.list_budget_periods(user_id).await?;
        Ok(periods
            .into_iter()
            .filter(|p| p.start_date.month() == month)
            .collect())
    }

    /// Adds a period for the caller. Adding an identical
    /// (owner, start date, type) period again is a no-op that still reports
    /// success.
    pub async fn add_budget_period(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        budget_period_type_id: BudgetPeriodTypeId,
    ) -> bool {
        let result = self
            .try_add_budget_period(user_id, start_date, budget_period_type_id)
            .await;
        soften("add_budget_period", false, result)
    }

    async fn try_add_budget_period(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        budget_period_type_id: BudgetPeriodTypeId,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        if budget_period_type_id.into_inner() <= 0 {
            return Err(BudgetingError::Validation(
                "a budget period type must be specified",
            ));
        }
        if self
            .store
            .budget_period_exists(user_id, start_date, budget_period_type_id)
            .await?
        {
            // Duplicate suppression, not an error.
            return Ok(true);
        }
        self.store
            .insert_budget_period(CreateBudgetPeriodInput {
                owner: Owner::from_user(user_id),
                start_date,
                budget_period_type_id,
            })
            .await?;
        Ok(true)
    }

    /// Overwrites the caller's stored period with the supplied type, owner,
    /// and start date.
    pub async fn update_budget_period(&self, user_id: &str, period: &BudgetPeriod) -> bool {
        let result = self.try_update_budget_period(user_id, period).await;
        soften("update_budget_period", false, result)
    }

    async fn try_update_budget_period(
        &self,
        user_id: &str,
        period: &BudgetPeriod,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let mut stored = require_owned(user_id, self.store.find_budget_period(period.id).await?)?;
        stored.budget_period_type_id = period.budget_period_type_id;
        stored.owner = period.owner.clone();
        stored.start_date = period.start_date;
        self.store.update_budget_period(&stored).await
    }

    /// Deletes the caller's period unless a budget or actual item still
    /// references it.
    pub async fn delete_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> bool {
        let result = self
            .try_delete_budget_period(user_id, budget_period_id)
            .await;
        soften("delete_budget_period", false, result)
    }

    async fn try_delete_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let period = require_owned(user_id, self.store.find_budget_period(budget_period_id).await?)?;
        if self.store.budget_period_in_use(period.id).await? {
            return Err(BudgetingError::InUse {
                entity: BudgetPeriod::ENTITY,
            });
        }
        self.store.delete_budget_period(period.id).await
    }

    // ========================================================================
    // Budget categories
    // ========================================================================

    /// Adds a category for the caller. Adding an identical
    /// (owner, name, tax flag, parent) category again is a no-op that still
    /// reports success.
    pub async fn add_budget_category(
        &self,
        user_id: &str,
        name: &str,
        is_tax_deductible: bool,
        parent_budget_category_id: Option<BudgetCategoryId>,
    ) -> bool {
        let result = self
            .try_add_budget_category(user_id, name, is_tax_deductible, parent_budget_category_id)
            .await;
        soften("add_budget_category", false, result)
    }

    async fn try_add_budget_category(
        &self,
        user_id: &str,
        name: &str,
        is_tax_deductible: bool,
        parent_budget_category_id: Option<BudgetCategoryId>,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        if name.is_empty() {
            return Err(BudgetingError::Validation("a category name must be specified"));
        }
        if self
            .store
            .budget_category_exists(user_id, name, is_tax_deductible, parent_budget_category_id)
            .await?
        {
            return Ok(true);
        }
        self.store
            .insert_budget_category(CreateBudgetCategoryInput {
                owner: Owner::from_user(user_id),
                name: name.to_string(),
                is_tax_deductible,
                parent_budget_category_id,
            })
            .await?;
        Ok(true)
    }

    /// Returns the category only if the caller owns it. Global categories are
    /// visible through [`Self::get_budget_categories`] but never through this
    /// point lookup.
    pub async fn get_budget_category(
        &self,
        user_id: &str,
        budget_category_id: BudgetCategoryId,
    ) -> Option<BudgetCategory> {
        let result = self
            .try_get_budget_category(user_id, budget_category_id)
            .await;
        soften("get_budget_category", None, result.map(Some))
    }

    async fn try_get_budget_category(
        &self,
        user_id: &str,
        budget_category_id: BudgetCategoryId,
    ) -> BudgetingResult<BudgetCategory> {
        require_user(user_id)?;
        require_owned(
            user_id,
            self.store.find_budget_category(budget_category_id).await?,
        )
    }

    /// The caller's own categories plus every global shared category.
    pub async fn get_budget_categories(&self, user_id: &str) -> Vec<BudgetCategory> {
        let result = self.try_get_budget_categories(user_id).await;
        soften("get_budget_categories", Vec::new(), result)
    }

    async fn try_get_budget_categories(
        &self,
        user_id: &str,
    ) -> BudgetingResult<Vec<BudgetCategory>> {
        require_user(user_id)?;
        self.store.list_budget_categories(user_id).await
    }

    /// Overwrites the caller's stored category with the supplied name, parent,
    /// and tax flag. Only categories the caller created can be updated; global
    /// categories never match.
    pub async fn update_budget_category(&self, user_id: &str, category: &BudgetCategory) -> bool {
        let result = self.try_update_budget_category(user_id, category).await;
        soften("update_budget_category", false, result)
    }

    async fn try_update_budget_category(
        &self,
        user_id: &str,
        category: &BudgetCategory,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let mut stored =
            require_owned(user_id, self.store.find_budget_category(category.id).await?)?;
        stored.owner = Owner::from_user(user_id);
        stored.name = category.name.clone();
        stored.parent_budget_category_id = category.parent_budget_category_id;
        stored.is_tax_deductible = category.is_tax_deductible;
        self.store.update_budget_category(&stored).await
    }

    /// Deletes the caller's category unless a budget or actual item still
    /// references it.
    pub async fn delete_budget_category(
        &self,
        user_id: &str,
        budget_category_id: BudgetCategoryId,
    ) -> bool {
        let result = self
            .try_delete_budget_category(user_id, budget_category_id)
            .await;
        soften("delete_budget_category", false, result)
    }

    async fn try_delete_budget_category(
        &self,
        user_id: &str,
        budget_category_id: BudgetCategoryId,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let category = require_owned(
            user_id,
            self.store.find_budget_category(budget_category_id).await?,
        )?;
        if self.store.budget_category_in_use(category.id).await? {
            return Err(BudgetingError::InUse {
                entity: BudgetCategory::ENTITY,
            });
        }
        self.store.delete_budget_category(category.id).await
    }

    // ========================================================================
    // Budget items
    // ========================================================================

    /// Adds a planned item for the caller. The referenced category and period
    /// must both exist and be owned by the caller; global categories do not
    /// qualify. Items are never deduplicated.
    pub async fn add_budget_item(&self, user_id: &str, item: NewBudgetItem) -> bool {
        let result = self.try_add_budget_item(user_id, item).await;
        soften("add_budget_item", false, result)
    }

    async fn try_add_budget_item(
        &self,
        user_id: &str,
        item: NewBudgetItem,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        self.require_owned_references(user_id, item.budget_category_id, item.budget_period_id)
            .await?;
        self.store
            .insert_budget_item(CreateBudgetItemInput {
                owner: Owner::from_user(user_id),
                item,
            })
            .await?;
        Ok(true)
    }

    /// Overwrites the caller's stored item with the supplied category, period,
    /// date, amount, transaction type, and frequency fields. The stored
    /// `is_reoccurring` flag keeps its value.
    pub async fn update_budget_item(&self, user_id: &str, item: &BudgetItem) -> bool {
        let result = self.try_update_budget_item(user_id, item).await;
        soften("update_budget_item", false, result)
    }

    async fn try_update_budget_item(
        &self,
        user_id: &str,
        item: &BudgetItem,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        self.require_owned_references(user_id, item.budget_category_id, item.budget_period_id)
            .await?;
        let mut stored = require_owned(user_id, self.store.find_budget_item(item.id).await?)?;
        stored.budget_category_id = item.budget_category_id;
        stored.budget_period_id = item.budget_period_id;
        stored.date = item.date;
        stored.amount = item.amount;
        stored.transaction_type = item.transaction_type;
        stored.frequency_type_id = item.frequency_type_id;
        stored.frequency_quantity = item.frequency_quantity;
        // is_reoccurring keeps its stored value.
        self.store.update_budget_item(&stored).await
    }

    /// All planned items owned by the caller, unordered.
    pub async fn get_budget_items_for_user(&self, user_id: &str) -> Vec<BudgetItem> {
        let result = self.try_get_budget_items_for_user(user_id).await;
        soften("get_budget_items_for_user", Vec::new(), result)
    }

    async fn try_get_budget_items_for_user(
        &self,
        user_id: &str,
    ) -> BudgetingResult<Vec<BudgetItem>> {
        require_user(user_id)?;
        self.store.list_budget_items(user_id).await
    }

    /// Planned items owned by the caller within one period. Empty when the
    /// period does not exist or belongs to someone else.
    pub async fn get_budget_items_for_user_and_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> Vec<BudgetItem> {
        let result = self
            .try_get_budget_items_for_user_and_budget_period(user_id, budget_period_id)
            .await;
        soften(
            "get_budget_items_for_user_and_budget_period",
            Vec::new(),
            result,
        )
    }

    async fn try_get_budget_items_for_user_and_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<Vec<BudgetItem>> {
        require_user(user_id)?;
        let period =
            require_owned(user_id, self.store.find_budget_period(budget_period_id).await?)?;
        self.store
            .list_budget_items_for_period(user_id, period.id)
            .await
    }

    /// Deletes the caller's planned item. Items are leaf records, so no
    /// reference check applies.
    pub async fn delete_budget_item(&self, user_id: &str, budget_item_id: BudgetItemId) -> bool {
        let result = self.try_delete_budget_item(user_id, budget_item_id).await;
        soften("delete_budget_item", false, result)
    }

    async fn try_delete_budget_item(
        &self,
        user_id: &str,
        budget_item_id: BudgetItemId,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let item = require_owned(user_id, self.store.find_budget_item(budget_item_id).await?)?;
        self.store.delete_budget_item(item.id).await
    }

    // ========================================================================
    // Actual items
    // ========================================================================

    /// Adds a realized transaction for the caller, under the same category and
    /// period ownership checks as [`Self::add_budget_item`].
    pub async fn add_actual_item(&self, user_id: &str, item: NewActualItem) -> bool {
        let result = self.try_add_actual_item(user_id, item).await;
        soften("add_actual_item", false, result)
    }

    async fn try_add_actual_item(
        &self,
        user_id: &str,
        item: NewActualItem,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        self.require_owned_references(user_id, item.budget_category_id, item.budget_period_id)
            .await?;
        self.store
            .insert_actual_item(CreateActualItemInput {
                owner: Owner::from_user(user_id),
                item,
            })
            .await?;
        Ok(true)
    }

    /// Overwrites the caller's stored actual item with the supplied category,
    /// period, date, amount, and transaction type.
    pub async fn update_actual_item(&self, user_id: &str, item: &ActualItem) -> bool {
        let result = self.try_update_actual_item(user_id, item).await;
        soften("update_actual_item", false, result)
    }

    async fn try_update_actual_item(
        &self,
        user_id: &str,
        item: &ActualItem,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        self.require_owned_references(user_id, item.budget_category_id, item.budget_period_id)
            .await?;
        let mut stored = require_owned(user_id, self.store.find_actual_item(item.id).await?)?;
        stored.budget_category_id = item.budget_category_id;
        stored.budget_period_id = item.budget_period_id;
        stored.date = item.date;
        stored.amount = item.amount;
        stored.transaction_type = item.transaction_type;
        self.store.update_actual_item(&stored).await
    }

    /// All realized transactions owned by the caller, unordered.
    pub async fn get_actual_items_for_user(&self, user_id: &str) -> Vec<ActualItem> {
        let result = self.try_get_actual_items_for_user(user_id).await;
        soften("get_actual_items_for_user", Vec::new(), result)
    }

    async fn try_get_actual_items_for_user(
        &self,
        user_id: &str,
    ) -> BudgetingResult<Vec<ActualItem>> {
        require_user(user_id)?;
        self.store.list_actual_items(user_id).await
    }

    /// Realized transactions owned by the caller within one period. Empty when
    /// the period does not exist or belongs to someone else.
    pub async fn get_actual_items_for_user_and_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> Vec<ActualItem> {
        let result = self
            .try_get_actual_items_for_user_and_budget_period(user_id, budget_period_id)
            .await;
        soften(
            "get_actual_items_for_user_and_budget_period",
            Vec::new(),
            result,
        )
    }

    async fn try_get_actual_items_for_user_and_budget_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<Vec<ActualItem>> {
        require_user(user_id)?;
        let period =
            require_owned(user_id, self.store.find_budget_period(budget_period_id).await?)?;
        self.store
            .list_actual_items_for_period(user_id, period.id)
            .await
    }

    /// Deletes the caller's actual item.
    pub async fn delete_actual_item(&self, user_id: &str, actual_item_id: ActualItemId) -> bool {
        let result = self.try_delete_actual_item(user_id, actual_item_id).await;
        soften("delete_actual_item", false, result)
    }

    async fn try_delete_actual_item(
        &self,
        user_id: &str,
        actual_item_id: ActualItemId,
    ) -> BudgetingResult<bool> {
        require_user(user_id)?;
        let item = require_owned(user_id, self.store.find_actual_item(actual_item_id).await?)?;
        self.store.delete_actual_item(item.id).await
    }

    // ========================================================================
    // Reference data
    // ========================================================================

    /// All budget period types. Global reference data, no owner filter.
    pub async fn get_budget_period_types(&self) -> Vec<BudgetPeriodType> {
        let result = self.store.list_budget_period_types().await;
        soften("get_budget_period_types", Vec::new(), result)
    }

    /// All frequency types. Global reference data, no owner filter.
    pub async fn get_frequency_types(&self) -> Vec<FrequencyType> {
        let result = self.store.list_frequency_types().await;
        soften("get_frequency_types", Vec::new(), result)
    }

    /// Checks that an item's category and period references both exist and are
    /// owned by the caller. Global categories do not satisfy item references.
    async fn require_owned_references(
        &self,
        user_id: &str,
        budget_category_id: BudgetCategoryId,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<()> {
        require_owned(
            user_id,
            self.store.find_budget_category(budget_category_id).await?,
        )?;
        require_owned(user_id, self.store.find_budget_period(budget_period_id).await?)?;
        Ok(())
    }
}
