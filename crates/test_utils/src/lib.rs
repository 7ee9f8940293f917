//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quoting test suite.
//!
//! # Modules
//!
//! - `fixtures`: A realistic auto-insurance catalog and common amounts
//! - `builders`: Builder patterns for catalogs and worksheets
//! - `assertions`: Custom assertion helpers for quote types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
