//! Core Kernel - Foundational types for the auto-quoting system
//!
//! This crate provides the fundamental building blocks used by the quoting domain
//! and the HTTP surface:
//! - Money and rate types with precise decimal arithmetic
//! - es-MX currency display formatting
//! - Strongly-typed identifiers for quotes and catalog entries

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate, format_es_mx};
pub use identifiers::{QuoteId, CoverageId, PackageId};
pub use error::CoreError;
