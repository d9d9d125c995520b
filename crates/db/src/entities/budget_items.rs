//! `SeaORM` Entity for the budget_items table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::{BudgetItem, TransactionType};
use zerobudget_shared::{BudgetCategoryId, BudgetItemId, BudgetPeriodId, FrequencyTypeId, Owner};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<String>,
    pub budget_category_id: i32,
    pub budget_period_id: i32,
    pub date: Date,
    pub amount: Decimal,
    pub transaction_type: i16,
    pub is_reoccurring: bool,
    pub frequency_type_id: Option<i32>,
    pub frequency_quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::budget_categories::Entity",
        from = "Column::BudgetCategoryId",
        to = "super::budget_categories::Column::Id"
    )]
    BudgetCategories,
    #[sea_orm(
        belongs_to = "super::budget_periods::Entity",
        from = "Column::BudgetPeriodId",
        to = "super::budget_periods::Column::Id"
    )]
    BudgetPeriods,
    #[sea_orm(
        belongs_to = "super::frequency_types::Entity",
        from = "Column::FrequencyTypeId",
        to = "super::frequency_types::Column::Id"
    )]
    FrequencyTypes,
}

impl Related<super::budget_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetCategories.def()
    }
}

impl Related<super::budget_periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetPeriods.def()
    }
}

impl Related<super::frequency_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FrequencyTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for BudgetItem {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BudgetItemId::new(model.id),
            owner: Owner::from_column(model.user_id),
            budget_category_id: BudgetCategoryId::new(model.budget_category_id),
            budget_period_id: BudgetPeriodId::new(model.budget_period_id),
            date: model.date,
            amount: model.amount,
            transaction_type: TransactionType::try_from(model.transaction_type)?,
            is_reoccurring: model.is_reoccurring,
            frequency_type_id: model.frequency_type_id.map(FrequencyTypeId::new),
            frequency_quantity: model.frequency_quantity,
        })
    }
}
