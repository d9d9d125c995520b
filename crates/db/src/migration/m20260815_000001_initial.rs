//! Initial schema: reference tables, budgeting tables, and seed data.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum BudgetPeriodTypes {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum FrequencyTypes {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum BudgetPeriods {
    Table,
    Id,
    UserId,
    StartDate,
    BudgetPeriodTypeId,
}

#[derive(DeriveIden)]
enum BudgetCategories {
    Table,
    Id,
    UserId,
    Name,
    IsTaxDeductible,
    ParentBudgetCategoryId,
}

#[derive(DeriveIden)]
enum BudgetItems {
    Table,
    Id,
    UserId,
    BudgetCategoryId,
    BudgetPeriodId,
    Date,
    Amount,
    TransactionType,
    IsReoccurring,
    FrequencyTypeId,
    FrequencyQuantity,
}

#[derive(DeriveIden)]
enum ActualItems {
    Table,
    Id,
    UserId,
    BudgetCategoryId,
    BudgetPeriodId,
    Date,
    Amount,
    TransactionType,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BudgetPeriodTypes::Table)
                    .col(
                        ColumnDef::new(BudgetPeriodTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetPeriodTypes::Name).string().not_null())
                    .col(ColumnDef::new(BudgetPeriodTypes::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FrequencyTypes::Table)
                    .col(
                        ColumnDef::new(FrequencyTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FrequencyTypes::Name).string().not_null())
                    .col(ColumnDef::new(FrequencyTypes::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BudgetPeriods::Table)
                    .col(
                        ColumnDef::new(BudgetPeriods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetPeriods::UserId).string())
                    .col(ColumnDef::new(BudgetPeriods::StartDate).date().not_null())
                    .col(
                        ColumnDef::new(BudgetPeriods::BudgetPeriodTypeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_periods_budget_period_type")
                            .from(BudgetPeriods::Table, BudgetPeriods::BudgetPeriodTypeId)
                            .to(BudgetPeriodTypes::Table, BudgetPeriodTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BudgetCategories::Table)
                    .col(
                        ColumnDef::new(BudgetCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetCategories::UserId).string())
                    .col(ColumnDef::new(BudgetCategories::Name).string().not_null())
                    .col(
                        ColumnDef::new(BudgetCategories::IsTaxDeductible)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BudgetCategories::ParentBudgetCategoryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_categories_parent")
                            .from(
                                BudgetCategories::Table,
                                BudgetCategories::ParentBudgetCategoryId,
                            )
                            .to(BudgetCategories::Table, BudgetCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BudgetItems::Table)
                    .col(
                        ColumnDef::new(BudgetItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetItems::UserId).string())
                    .col(
                        ColumnDef::new(BudgetItems::BudgetCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BudgetItems::BudgetPeriodId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BudgetItems::Date).date().not_null())
                    .col(
                        ColumnDef::new(BudgetItems::Amount)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BudgetItems::TransactionType)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BudgetItems::IsReoccurring)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BudgetItems::FrequencyTypeId).integer())
                    .col(ColumnDef::new(BudgetItems::FrequencyQuantity).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_items_budget_category")
                            .from(BudgetItems::Table, BudgetItems::BudgetCategoryId)
                            .to(BudgetCategories::Table, BudgetCategories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_items_budget_period")
                            .from(BudgetItems::Table, BudgetItems::BudgetPeriodId)
                            .to(BudgetPeriods::Table, BudgetPeriods::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_items_frequency_type")
                            .from(BudgetItems::Table, BudgetItems::FrequencyTypeId)
                            .to(FrequencyTypes::Table, FrequencyTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActualItems::Table)
                    .col(
                        ColumnDef::new(ActualItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActualItems::UserId).string())
                    .col(
                        ColumnDef::new(ActualItems::BudgetCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActualItems::BudgetPeriodId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActualItems::Date).date().not_null())
                    .col(
                        ColumnDef::new(ActualItems::Amount)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActualItems::TransactionType)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actual_items_budget_category")
                            .from(ActualItems::Table, ActualItems::BudgetCategoryId)
                            .to(BudgetCategories::Table, BudgetCategories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actual_items_budget_period")
                            .from(ActualItems::Table, ActualItems::BudgetPeriodId)
                            .to(BudgetPeriods::Table, BudgetPeriods::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_budget_periods_user_id")
                    .table(BudgetPeriods::Table)
                    .col(BudgetPeriods::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_budget_categories_user_id")
                    .table(BudgetCategories::Table)
                    .col(BudgetCategories::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_budget_items_user_period")
                    .table(BudgetItems::Table)
                    .col(BudgetItems::UserId)
                    .col(BudgetItems::BudgetPeriodId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_actual_items_user_period")
                    .table(ActualItems::Table)
                    .col(ActualItems::UserId)
                    .col(ActualItems::BudgetPeriodId)
                    .to_owned(),
            )
            .await?;

        // Reference data. Ids are assigned by the sequence so later inserts
        // never collide with the seeds.
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(BudgetPeriodTypes::Table)
                    .columns([BudgetPeriodTypes::Name])
                    .values_panic(["Weekly".into()])
                    .values_panic(["Bi-Weekly".into()])
                    .values_panic(["Monthly".into()])
                    .values_panic(["Semi-Monthly".into()])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(FrequencyTypes::Table)
                    .columns([FrequencyTypes::Name])
                    .values_panic(["Monthly".into()])
                    .values_panic(["Annually".into()])
                    .values_panic(["Weekly".into()])
                    .values_panic(["Daily".into()])
                    .values_panic(["Monday - Friday".into()])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(BudgetCategories::Table)
                    .columns([BudgetCategories::Name, BudgetCategories::IsTaxDeductible])
                    .values_panic(["Salary".into(), false.into()])
                    .values_panic(["Utilities".into(), false.into()])
                    .values_panic(["Savings".into(), false.into()])
                    .values_panic(["Housing".into(), false.into()])
                    .values_panic(["Transportation".into(), false.into()])
                    .values_panic(["Uncategorized".into(), false.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActualItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetPeriods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FrequencyTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetPeriodTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}
