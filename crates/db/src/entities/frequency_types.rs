//! `SeaORM` Entity for the frequency_types reference table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use zerobudget_core::budgeting::FrequencyType;
use zerobudget_shared::FrequencyTypeId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "frequency_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_items::Entity")]
    BudgetItems,
}

impl Related<super::budget_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FrequencyType {
    fn from(model: Model) -> Self {
        Self {
            id: FrequencyTypeId::new(model.id),
            name: model.name,
            description: model.description,
        }
    }
}
