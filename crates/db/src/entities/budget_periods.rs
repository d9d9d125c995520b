//! `SeaORM` Entity for the budget_periods table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::BudgetPeriod;
use zerobudget_shared::{BudgetPeriodId, BudgetPeriodTypeId, Owner};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<String>,
    pub start_date: Date,
    pub budget_period_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::budget_period_types::Entity",
        from = "Column::BudgetPeriodTypeId",
        to = "super::budget_period_types::Column::Id"
    )]
    BudgetPeriodTypes,
    #[sea_orm(has_many = "super::budget_items::Entity")]
    BudgetItems,
    #[sea_orm(has_many = "super::actual_items::Entity")]
    ActualItems,
}

impl Related<super::budget_period_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetPeriodTypes.def()
    }
}

impl Related<super::budget_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItems.def()
    }
}

impl Related<super::actual_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActualItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BudgetPeriod {
    fn from(model: Model) -> Self {
        Self {
            id: BudgetPeriodId::new(model.id),
            owner: Owner::from_column(model.user_id),
            start_date: model.start_date,
            budget_period_type_id: BudgetPeriodTypeId::new(model.budget_period_type_id),
        }
    }
}
