//! Auto-Quote Pricing Domain
//!
//! This crate implements the premium computation behind the coverage-selection
//! step of the auto-quoting wizard. It performs no I/O: catalogs and the
//! vehicle's insured value are supplied already fetched, and results are
//! handed back for display and persistence.
//!
//! # Components
//!
//! - **Catalog**: coverage definitions and package associations (read-only)
//! - **Package Resolver**: package id -> initial priced line items
//! - **Premium Calculator**: pure `(coverage, sum insured, deductible) -> premium`
//! - **Line-Item Editor**: bounded edits that re-price a line
//! - **Aggregator**: sum of premiums less the bonus/discount
//! - **Worksheet**: the serializable state tying the above together
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{CoverageCatalog, QuoteWorksheet, QuoteLimits};
//!
//! let catalog = CoverageCatalog::from_json(&catalog_json)?;
//! let mut worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
//! worksheet.select_package(&catalog, PackageId::new(1))?;
//! worksheet.edit_deductible(&catalog, CoverageId::new(3), dec!(10))?;
//! worksheet.set_bonus(dec!(10))?;
//! let submission = worksheet.submission()?;
//! ```

pub mod coverage;
pub mod premium;
pub mod ranges;
pub mod line_item;
pub mod resolver;
pub mod totals;
pub mod limits;
pub mod events;
pub mod worksheet;
pub mod error;

pub use coverage::{CoverageDefinition, PackageAssociation, CoverageCatalog, CatalogDocument};
pub use premium::{compute_premium, PremiumBasis};
pub use ranges::{stepped_range, is_on_step, deductible_options, sum_insured_options, MAX_RANGE_OPTIONS};
pub use line_item::{QuoteLineItem, LineItemState};
pub use resolver::{resolve_package, PackageResolution, UnresolvedAssociation};
pub use totals::{aggregate, QuoteTotal};
pub use limits::QuoteLimits;
pub use events::QuoteEvent;
pub use worksheet::{QuoteWorksheet, QuoteSubmission};
pub use error::QuoteError;
