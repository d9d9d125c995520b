//! `SeaORM` Entity for the budget_categories table.
//!
//! Rows with a NULL user_id are the global categories seeded at setup.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::BudgetCategory;
use zerobudget_shared::{BudgetCategoryId, Owner};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<String>,
    pub name: String,
    pub is_tax_deductible: bool,
    pub parent_budget_category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentBudgetCategoryId",
        to = "Column::Id"
    )]
    Parent,
    #[sea_orm(has_many = "super::budget_items::Entity")]
    BudgetItems,
    #[sea_orm(has_many = "super::actual_items::Entity")]
    ActualItems,
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

impl From<Model> for BudgetCategory {
    fn from(model: Model) -> Self {
        Self {
            id: BudgetCategoryId::new(model.id),
            owner: Owner::from_column(model.user_id),
            name: model.name,
            is_tax_deductible: model.is_tax_deductible,
            parent_budget_category_id: model.parent_budget_category_id.map(BudgetCategoryId::new),
        }
    }
}
