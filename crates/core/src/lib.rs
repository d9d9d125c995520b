//! Core business logic for ZeroBudget.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The budgeting service and its store abstraction live here;
//! the db crate provides the SeaORM-backed store implementation.

pub mod budgeting;
