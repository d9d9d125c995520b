//! Shared types and configuration for ZeroBudget.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The `Owner` type distinguishing user-owned from global records
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::*;
