//! Budgeting repository for database operations.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use zerobudget_core::budgeting::{
    ActualItem, BudgetCategory, BudgetItem, BudgetPeriod, BudgetPeriodType, BudgetingError,
    BudgetingResult, BudgetingStore, CreateActualItemInput, CreateBudgetCategoryInput,
    CreateBudgetItemInput, CreateBudgetPeriodInput, FrequencyType,
};
use zerobudget_shared::{
    ActualItemId, BudgetCategoryId, BudgetItemId, BudgetPeriodId, BudgetPeriodTypeId,
    FrequencyTypeId,
};

use crate::entities::{
    actual_items, budget_categories, budget_items, budget_period_types, budget_periods,
    frequency_types,
};

/// `SeaORM`-backed implementation of the budgeting store.
#[derive(Debug, Clone)]
pub struct BudgetingRepository {
    db: DatabaseConnection,
}

impl BudgetingRepository {
    /// Creates a new budgeting repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Matches rows owned by this user or rows with no owner (global records).
fn owned_or_global(column: budget_categories::Column, user_id: &str) -> Condition {
    Condition::any().add(column.eq(user_id)).add(column.is_null())
}

impl BudgetingStore for BudgetingRepository {
    // === Budget periods ===

    async fn find_budget_period(
        &self,
        id: BudgetPeriodId,
    ) -> BudgetingResult<Option<BudgetPeriod>> {
        let model = budget_periods::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(model.map(BudgetPeriod::from))
    }

    async fn list_budget_periods(&self, user_id: &str) -> BudgetingResult<Vec<BudgetPeriod>> {
        let models = budget_periods::Entity::find()
            .filter(budget_periods::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(models.into_iter().map(BudgetPeriod::from).collect())
    }

    async fn budget_period_exists(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        budget_period_type_id: BudgetPeriodTypeId,
    ) -> BudgetingResult<bool> {
        let count = budget_periods::Entity::find()
            .filter(budget_periods::Column::UserId.eq(user_id))
            .filter(budget_periods::Column::StartDate.eq(start_date))
            .filter(
                budget_periods::Column::BudgetPeriodTypeId.eq(budget_period_type_id.into_inner()),
            )
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(count > 0)
    }

    async fn insert_budget_period(
        &self,
        input: CreateBudgetPeriodInput,
    ) -> BudgetingResult<BudgetPeriod> {
        let model = budget_periods::ActiveModel {
            user_id: Set(input.owner.into_column()),
            start_date: Set(input.start_date),
            budget_period_type_id: Set(input.budget_period_type_id.into_inner()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(BudgetingError::store)?;
        Ok(model.into())
    }

    async fn update_budget_period(&self, period: &BudgetPeriod) -> BudgetingResult<bool> {
        let result = budget_periods::Entity::update_many()
            .col_expr(
                budget_periods::Column::UserId,
                Expr::value(period.owner.clone().into_column()),
            )
            .col_expr(
                budget_periods::Column::StartDate,
                Expr::value(period.start_date),
            )
            .col_expr(
                budget_periods::Column::BudgetPeriodTypeId,
                Expr::value(period.budget_period_type_id.into_inner()),
            )
            .filter(budget_periods::Column::Id.eq(period.id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_budget_period(&self, id: BudgetPeriodId) -> BudgetingResult<bool> {
        let result = budget_periods::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn budget_period_in_use(&self, id: BudgetPeriodId) -> BudgetingResult<bool> {
        let items = budget_items::Entity::find()
            .filter(budget_items::Column::BudgetPeriodId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        if items > 0 {
            return Ok(true);
        }
        let actuals = actual_items::Entity::find()
            .filter(actual_items::Column::BudgetPeriodId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(actuals > 0)
    }

    // === Budget categories ===

    async fn find_budget_category(
        &self,
        id: BudgetCategoryId,
    ) -> BudgetingResult<Option<BudgetCategory>> {
        let model = budget_categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(model.map(BudgetCategory::from))
    }

    async fn list_budget_categories(&self, user_id: &str) -> BudgetingResult<Vec<BudgetCategory>> {
        let models = budget_categories::Entity::find()
            .filter(owned_or_global(budget_categories::Column::UserId, user_id))
            .order_by_asc(budget_categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(models.into_iter().map(BudgetCategory::from).collect())
    }

    async fn budget_category_exists(
        &self,
        user_id: &str,
        name: &str,
        is_tax_deductible: bool,
        parent_budget_category_id: Option<BudgetCategoryId>,
    ) -> BudgetingResult<bool> {
        // `= NULL` is never true in SQL, so the parentless case needs IS NULL.
        let parent_filter = match parent_budget_category_id {
            Some(parent) => {
                budget_categories::Column::ParentBudgetCategoryId.eq(parent.into_inner())
            }
            None => budget_categories::Column::ParentBudgetCategoryId.is_null(),
        };
        let count = budget_categories::Entity::find()
            .filter(budget_categories::Column::UserId.eq(user_id))
            .filter(budget_categories::Column::Name.eq(name))
            .filter(budget_categories::Column::IsTaxDeductible.eq(is_tax_deductible))
            .filter(parent_filter)
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(count > 0)
    }

    async fn insert_budget_category(
        &self,
        input: CreateBudgetCategoryInput,
    ) -> BudgetingResult<BudgetCategory> {
        let model = budget_categories::ActiveModel {
            user_id: Set(input.owner.into_column()),
            name: Set(input.name),
            is_tax_deductible: Set(input.is_tax_deductible),
            parent_budget_category_id: Set(input
                .parent_budget_category_id
                .map(BudgetCategoryId::into_inner)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(BudgetingError::store)?;
        Ok(model.into())
    }

    async fn update_budget_category(&self, category: &BudgetCategory) -> BudgetingResult<bool> {
        let result = budget_categories::Entity::update_many()
            .col_expr(
                budget_categories::Column::UserId,
                Expr::value(category.owner.clone().into_column()),
            )
            .col_expr(
                budget_categories::Column::Name,
                Expr::value(category.name.clone()),
            )
            .col_expr(
                budget_categories::Column::IsTaxDeductible,
                Expr::value(category.is_tax_deductible),
            )
            .col_expr(
                budget_categories::Column::ParentBudgetCategoryId,
                Expr::value(
                    category
                        .parent_budget_category_id
                        .map(BudgetCategoryId::into_inner),
                ),
            )
            .filter(budget_categories::Column::Id.eq(category.id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_budget_category(&self, id: BudgetCategoryId) -> BudgetingResult<bool> {
        let result = budget_categories::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn budget_category_in_use(&self, id: BudgetCategoryId) -> BudgetingResult<bool> {
        let items = budget_items::Entity::find()
            .filter(budget_items::Column::BudgetCategoryId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        if items > 0 {
            return Ok(true);
        }
        let actuals = actual_items::Entity::find()
            .filter(actual_items::Column::BudgetCategoryId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(actuals > 0)
    }

    // === Budget items ===

    async fn find_budget_item(&self, id: BudgetItemId) -> BudgetingResult<Option<BudgetItem>> {
        let model = budget_items::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        model
            .map(BudgetItem::try_from)
            .transpose()
            .map_err(BudgetingError::Store)
    }

    async fn list_budget_items(&self, user_id: &str) -> BudgetingResult<Vec<BudgetItem>> {
        let models = budget_items::Entity::find()
            .filter(budget_items::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        models
            .into_iter()
            .map(BudgetItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(BudgetingError::Store)
    }

    async fn list_budget_items_for_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<Vec<BudgetItem>> {
        let models = budget_items::Entity::find()
            .filter(budget_items::Column::UserId.eq(user_id))
            .filter(budget_items::Column::BudgetPeriodId.eq(budget_period_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        models
            .into_iter()
            .map(BudgetItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(BudgetingError::Store)
    }

    async fn insert_budget_item(
        &self,
        input: CreateBudgetItemInput,
    ) -> BudgetingResult<BudgetItem> {
        let model = budget_items::ActiveModel {
            user_id: Set(input.owner.into_column()),
            budget_category_id: Set(input.item.budget_category_id.into_inner()),
            budget_period_id: Set(input.item.budget_period_id.into_inner()),
            date: Set(input.item.date),
            amount: Set(input.item.amount),
            transaction_type: Set(input.item.transaction_type.into()),
            is_reoccurring: Set(input.item.is_reoccurring),
            frequency_type_id: Set(input.item.frequency_type_id.map(Into::into)),
            frequency_quantity: Set(input.item.frequency_quantity),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(BudgetingError::store)?;
        BudgetItem::try_from(model).map_err(BudgetingError::Store)
    }

    async fn update_budget_item(&self, item: &BudgetItem) -> BudgetingResult<bool> {
        let result = budget_items::Entity::update_many()
            .col_expr(
                budget_items::Column::BudgetCategoryId,
                Expr::value(item.budget_category_id.into_inner()),
            )
            .col_expr(
                budget_items::Column::BudgetPeriodId,
                Expr::value(item.budget_period_id.into_inner()),
            )
            .col_expr(budget_items::Column::Date, Expr::value(item.date))
            .col_expr(budget_items::Column::Amount, Expr::value(item.amount))
            .col_expr(
                budget_items::Column::TransactionType,
                Expr::value(i16::from(item.transaction_type)),
            )
            .col_expr(
                budget_items::Column::IsReoccurring,
                Expr::value(item.is_reoccurring),
            )
            .col_expr(
                budget_items::Column::FrequencyTypeId,
                Expr::value(item.frequency_type_id.map(FrequencyTypeId::into_inner)),
            )
            .col_expr(
                budget_items::Column::FrequencyQuantity,
                Expr::value(item.frequency_quantity),
            )
            .filter(budget_items::Column::Id.eq(item.id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_budget_item(&self, id: BudgetItemId) -> BudgetingResult<bool> {
        let result = budget_items::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    // === Actual items ===

    async fn find_actual_item(&self, id: ActualItemId) -> BudgetingResult<Option<ActualItem>> {
        let model = actual_items::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        model
            .map(ActualItem::try_from)
            .transpose()
            .map_err(BudgetingError::Store)
    }

    async fn list_actual_items(&self, user_id: &str) -> BudgetingResult<Vec<ActualItem>> {
        let models = actual_items::Entity::find()
            .filter(actual_items::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        models
            .into_iter()
            .map(ActualItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(BudgetingError::Store)
    }

    async fn list_actual_items_for_period(
        &self,
        user_id: &str,
        budget_period_id: BudgetPeriodId,
    ) -> BudgetingResult<Vec<ActualItem>> {
        let models = actual_items::Entity::find()
            .filter(actual_items::Column::UserId.eq(user_id))
            .filter(actual_items::Column::BudgetPeriodId.eq(budget_period_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        models
            .into_iter()
            .map(ActualItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(BudgetingError::Store)
    }

    async fn insert_actual_item(
        &self,
        input: CreateActualItemInput,
    ) -> BudgetingResult<ActualItem> {
        let model = actual_items::ActiveModel {
            user_id: Set(input.owner.into_column()),
            budget_category_id: Set(input.item.budget_category_id.into_inner()),
            budget_period_id: Set(input.item.budget_period_id.into_inner()),
            date: Set(input.item.date),
            amount: Set(input.item.amount),
            transaction_type: Set(input.item.transaction_type.into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(BudgetingError::store)?;
        ActualItem::try_from(model).map_err(BudgetingError::Store)
    }

    async fn update_actual_item(&self, item: &ActualItem) -> BudgetingResult<bool> {
        let result = actual_items::Entity::update_many()
            .col_expr(
                actual_items::Column::BudgetCategoryId,
                Expr::value(item.budget_category_id.into_inner()),
            )
            .col_expr(
                actual_items::Column::BudgetPeriodId,
                Expr::value(item.budget_period_id.into_inner()),
            )
            .col_expr(actual_items::Column::Date, Expr::value(item.date))
            .col_expr(actual_items::Column::Amount, Expr::value(item.amount))
            .col_expr(
                actual_items::Column::TransactionType,
                Expr::value(i16::from(item.transaction_type)),
            )
            .filter(actual_items::Column::Id.eq(item.id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_actual_item(&self, id: ActualItemId) -> BudgetingResult<bool> {
        let result = actual_items::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(result.rows_affected > 0)
    }

    // === Reference data ===

    async fn list_budget_period_types(&self) -> BudgetingResult<Vec<BudgetPeriodType>> {
        let models = budget_period_types::Entity::find()
            .order_by_asc(budget_period_types::Column::Id)
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(models.into_iter().map(BudgetPeriodType::from).collect())
    }

    async fn list_frequency_types(&self) -> BudgetingResult<Vec<FrequencyType>> {
        let models = frequency_types::Entity::find()
            .order_by_asc(frequency_types::Column::Id)
            .all(&self.db)
            .await
            .map_err(BudgetingError::store)?;
        Ok(models.into_iter().map(FrequencyType::from).collect())
    }
}
