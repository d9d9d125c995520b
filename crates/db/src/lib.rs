//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - The persistent implementation of the budgeting store
//! - Database migrations and seeded reference data

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::BudgetingRepository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use zerobudget_shared::config::DatabaseConfig;

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    tracing::debug!(url = %config.url, "connecting to database");

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    Database::connect(options).await
}
