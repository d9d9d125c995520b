//! `SeaORM` Entity for the actual_items table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::{ActualItem, TransactionType};
use zerobudget_shared::{ActualItemId, BudgetCategoryId, BudgetPeriodId, Owner};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "actual_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<String>,
    pub budget_category_id: i32,
    pub budget_period_id: i32,
    pub date: Date,
    pub amount: Decimal,
    pub transaction_type: i16,
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

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ActualItem {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActualItemId::new(model.id),
            owner: Owner::from_column(model.user_id),
            budget_category_id: BudgetCategoryId::new(model.budget_category_id),
            budget_period_id: BudgetPeriodId::new(model.budget_period_id),
            date: model.date,
            amount: model.amount,
            transaction_type: TransactionType::try_from(model.transaction_type)?,
        })
    }
}
