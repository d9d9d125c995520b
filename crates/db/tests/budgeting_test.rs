//! Integration tests for the budgeting service over an in-memory SQLite
//! database with the real migrations applied.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;
use zerobudget_core::budgeting::{BudgetingService, NewActualItem, NewBudgetItem, TransactionType};
use zerobudget_db::{connect, migration::Migrator, BudgetingRepository};
use zerobudget_shared::config::DatabaseConfig;
use zerobudget_shared::{BudgetCategoryId, BudgetPeriodId, BudgetPeriodTypeId};

/// Fresh service over a private in-memory database.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory SQLite instance.
async fn service() -> Result<BudgetingService<BudgetingRepository>> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config).await?;
    Migrator::up(&db, None).await?;
    Ok(BudgetingService::new(Arc::new(BudgetingRepository::new(db))))
}

fn user() -> String {
    Uuid::new_v4().to_string()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a period and a category for the user and returns their ids.
async fn setup_period_and_category(
    service: &BudgetingService<BudgetingRepository>,
    user_id: &str,
) -> (BudgetPeriodId, BudgetCategoryId) {
    assert!(
        service
            .add_budget_period(user_id, date(2019, 11, 1), BudgetPeriodTypeId::new(3))
            .await
    );
    assert!(
        service
            .add_budget_category(user_id, "Groceries", false, None)
            .await
    );
    let period_id = service.get_budget_periods(user_id).await[0].id;
    let category_id = service
        .get_budget_categories(user_id)
        .await
        .into_iter()
        .find(|c| c.name == "Groceries")
        .expect("category should exist")
        .id;
    (period_id, category_id)
}

fn groceries_item(
    category_id: BudgetCategoryId,
    period_id: BudgetPeriodId,
    amount: rust_decimal::Decimal,
) -> NewBudgetItem {
    NewBudgetItem {
        budget_category_id: category_id,
        budget_period_id: period_id,
        date: date(2019, 11, 5),
        amount,
        transaction_type: TransactionType::Debit,
        is_reoccurring: false,
        frequency_type_id: None,
        frequency_quantity: None,
    }
}

#[tokio::test]
async fn test_seeded_reference_data() -> Result<()> {
    let service = service().await?;

    let period_types = service.get_budget_period_types().await;
    let names: Vec<_> = period_types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Weekly", "Bi-Weekly", "Monthly", "Semi-Monthly"]);

    let frequency_types = service.get_frequency_types().await;
    let names: Vec<_> = frequency_types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["Monthly", "Annually", "Weekly", "Daily", "Monday - Friday"]
    );

    Ok(())
}

#[tokio::test]
async fn test_seeded_global_categories() -> Result<()> {
    let service = service().await?;
    let user = user();

    let categories = service.get_budget_categories(&user).await;
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Salary",
            "Utilities",
            "Savings",
            "Housing",
            "Transportation",
            "Uncategorized"
        ]
    );

    // Global categories cannot be modified or removed by any user.
    let mut salary = categories[0].clone();
    salary.name = "Hijacked".to_string();
    assert!(!service.update_budget_category(&user, &salary).await);
    assert!(!service.delete_budget_category(&user, salary.id).await);
    assert!(service.get_budget_category(&user, salary.id).await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_add_budget_category_is_idempotent() -> Result<()> {
    let service = service().await?;
    let user = user();
    let seeded = service.get_budget_categories(&user).await.len();

    // Identical (owner, name, tax flag, parent) rows are suppressed even with
    // no parent category set.
    assert!(service.add_budget_category(&user, "Test", false, None).await);
    assert!(service.add_budget_category(&user, "Test", false, None).await);
    assert_eq!(service.get_budget_categories(&user).await.len(), seeded + 1);

    // A differing tax flag is a different category.
    assert!(service.add_budget_category(&user, "Test", true, None).await);
    assert_eq!(service.get_budget_categories(&user).await.len(), seeded + 2);

    // And so is the same name nested under a parent.
    let parent_id = service
        .get_budget_categories(&user)
        .await
        .into_iter()
        .find(|c| c.name == "Test" && !c.is_tax_deductible)
        .expect("category should exist")
        .id;
    assert!(
        service
            .add_budget_category(&user, "Test", false, Some(parent_id))
            .await
    );
    assert!(
        service
            .add_budget_category(&user, "Test", false, Some(parent_id))
            .await
    );
    assert_eq!(service.get_budget_categories(&user).await.len(), seeded + 3);

    Ok(())
}

#[tokio::test]
async fn test_budget_period_lifecycle() -> Result<()> {
    let service = service().await?;
    let user = user();

    assert!(
        service
            .add_budget_period(&user, date(2019, 11, 1), BudgetPeriodTypeId::new(3))
            .await
    );
    // Same (owner, start date, type) again: reported as success, not stored.
    assert!(
        service
            .add_budget_period(&user, date(2019, 11, 1), BudgetPeriodTypeId::new(3))
            .await
    );
    assert!(
        service
            .add_budget_period(&user, date(2019, 12, 1), BudgetPeriodTypeId::new(3))
            .await
    );

    let periods = service.get_budget_periods(&user).await;
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].start_date, date(2019, 12, 1));

    let latest = service
        .get_latest_budget_period(&user)
        .await
        .expect("latest period should exist");
    assert_eq!(latest.start_date, date(2019, 12, 1));

    let november = service.get_budget_periods_for_month(&user, 11).await;
    assert_eq!(november.len(), 1);

    let mut period = november.into_iter().next().unwrap();
    period.start_date = date(2019, 11, 15);
    assert!(service.update_budget_period(&user, &period).await);
    let stored = service
        .get_budget_period(&user, period.id)
        .await
        .expect("period should exist");
    assert_eq!(stored.start_date, date(2019, 11, 15));

    assert!(service.delete_budget_period(&user, period.id).await);
    assert_eq!(service.get_budget_periods(&user).await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_budget_item_flow_with_delete_guards() -> Result<()> {
    let service = service().await?;
    let user = user();
    let (period_id, category_id) = setup_period_and_category(&service, &user).await;

    assert!(
        service
            .add_budget_item(&user, groceries_item(category_id, period_id, dec!(120.50)))
            .await
    );

    let items = service.get_budget_items_for_user(&user).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].amount, dec!(120.50));

    let in_period = service
        .get_budget_items_for_user_and_budget_period(&user, period_id)
        .await;
    assert_eq!(in_period.len(), 1);

    // Referenced period and category cannot be deleted.
    assert!(!service.delete_budget_period(&user, period_id).await);
    assert!(!service.delete_budget_category(&user, category_id).await);

    assert!(service.delete_budget_item(&user, items[0].id).await);
    assert!(service.delete_budget_period(&user, period_id).await);
    assert!(service.delete_budget_category(&user, category_id).await);

    Ok(())
}

#[tokio::test]
async fn test_budget_item_rejects_unowned_references() -> Result<()> {
    let service = service().await?;
    let alice = user();
    let bob = user();
    let (period_id, category_id) = setup_period_and_category(&service, &alice).await;

    // Another user cannot attach items to a period they do not own.
    assert!(
        !service
            .add_budget_item(&bob, groceries_item(category_id, period_id, dec!(10.25)))
            .await
    );

    // Global categories do not qualify as item references either.
    let salary_id = service
        .get_budget_categories(&alice)
        .await
        .into_iter()
        .find(|c| c.name == "Salary")
        .expect("seeded category should exist")
        .id;
    assert!(
        !service
            .add_budget_item(&alice, groceries_item(salary_id, period_id, dec!(10.25)))
            .await
    );

    assert!(service.get_budget_items_for_user(&alice).await.is_empty());
    assert!(service.get_budget_items_for_user(&bob).await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_cross_user_isolation() -> Result<()> {
    let service = service().await?;
    let alice = user();
    let bob = user();
    let (period_id, category_id) = setup_period_and_category(&service, &alice).await;
    assert!(
        service
            .add_budget_item(&alice, groceries_item(category_id, period_id, dec!(45.75)))
            .await
    );
    let item_id = service.get_budget_items_for_user(&alice).await[0].id;

    assert!(service.get_budget_periods(&bob).await.is_empty());
    assert!(service.get_budget_period(&bob, period_id).await.is_none());
    assert!(service.get_budget_items_for_user(&bob).await.is_empty());
    assert!(
        service
            .get_budget_items_for_user_and_budget_period(&bob, period_id)
            .await
            .is_empty()
    );
    assert!(!service.delete_budget_item(&bob, item_id).await);

    // Bob sees only the seeded global categories, never Alice's.
    let bob_categories = service.get_budget_categories(&bob).await;
    assert!(bob_categories.iter().all(|c| c.name != "Groceries"));

    Ok(())
}

#[tokio::test]
async fn test_actual_item_lifecycle() -> Result<()> {
    let service = service().await?;
    let user = user();
    let (period_id, category_id) = setup_period_and_category(&service, &user).await;

    assert!(
        service
            .add_actual_item(
                &user,
                NewActualItem {
                    budget_category_id: category_id,
                    budget_period_id: period_id,
                    date: date(2019, 11, 8),
                    amount: dec!(98.25),
                    transaction_type: TransactionType::Debit,
                },
            )
            .await
    );

    let actuals = service.get_actual_items_for_user(&user).await;
    assert_eq!(actuals.len(), 1);
    assert_eq!(actuals[0].amount, dec!(98.25));
    assert_eq!(actuals[0].transaction_type, TransactionType::Debit);

    let mut updated = actuals[0].clone();
    updated.amount = dec!(101.75);
    updated.transaction_type = TransactionType::Credit;
    assert!(service.update_actual_item(&user, &updated).await);

    let in_period = service
        .get_actual_items_for_user_and_budget_period(&user, period_id)
        .await;
    assert_eq!(in_period.len(), 1);
    assert_eq!(in_period[0].amount, dec!(101.75));
    assert_eq!(in_period[0].transaction_type, TransactionType::Credit);

    // An actual item guards its period just like a budget item does.
    assert!(!service.delete_budget_period(&user, period_id).await);
    assert!(service.delete_actual_item(&user, in_period[0].id).await);
    assert!(service.delete_budget_period(&user, period_id).await);

    Ok(())
}

#[tokio::test]
async fn test_update_budget_item_keeps_reoccurring_flag() -> Result<()> {
    let service = service().await?;
    let user = user();
    let (period_id, category_id) = setup_period_and_category(&service, &user).await;

    let mut item = groceries_item(category_id, period_id, dec!(30.00));
    item.is_reoccurring = true;
    item.frequency_type_id = Some(zerobudget_shared::FrequencyTypeId::new(1));
    item.frequency_quantity = Some(1);
    assert!(service.add_budget_item(&user, item).await);

    let stored = service.get_budget_items_for_user(&user).await.remove(0);
    let mut update = stored.clone();
    update.amount = dec!(32.50);
    update.is_reoccurring = false;
    assert!(service.update_budget_item(&user, &update).await);

    let after = service.get_budget_items_for_user(&user).await.remove(0);
    assert_eq!(after.amount, dec!(32.50));
    assert!(after.is_reoccurring);

    Ok(())
}
