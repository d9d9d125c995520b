//! `SeaORM` Entity for the budget_period_types reference table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::BudgetPeriodType;
use zerobudget_shared::BudgetPeriodTypeId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_period_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_periods::Entity")]
    BudgetPeriods,
}

impl Related<super::budget_periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetPeriods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BudgetPeriodType {
    fn from(model: Model) -> Self {
        Self {
            id: BudgetPeriodTypeId::new(model.id),
            name: model.name,
            description: model.description,
        }
    }
}
