//! Package resolution
//!
//! Turns a package selection into the initial set of priced line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{CoverageId, PackageId};
use crate::coverage::CoverageCatalog;
use crate::line_item::QuoteLineItem;

/// An association whose coverage is missing from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedAssociation {
    pub package_id: PackageId,
    pub coverage_id: CoverageId,
    pub is_mandatory: bool,
}

/// Outcome of resolving a package against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResolution {
    pub package_id: PackageId,
    /// One line per resolved coverage, in association order
    pub lines: Vec<QuoteLineItem>,
    /// Associations skipped because their coverage is not in the catalog
    pub unresolved: Vec<UnresolvedAssociation>,
}

impl PackageResolution {
    /// Returns true if every association resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Builds the initial line items for a package
///
/// Associations pointing at unknown coverages are skipped, reported in
/// [`PackageResolution::unresolved`], and logged. When a package lists the
/// same coverage twice, the first association wins and the line is mandatory
/// if any of the duplicates is.
pub fn resolve_package(
    catalog: &CoverageCatalog,
    package_id: PackageId,
    insured_value: Decimal,
) -> PackageResolution {
    let mut lines: Vec<QuoteLineItem> = Vec::new();
    let mut unresolved = Vec::new();

    for association in catalog.associations_for(package_id) {
        if let Some(existing) = lines
            .iter_mut()
            .find(|line| line.coverage_id == association.coverage_id)
        {
            warn!(
                package = %package_id,
                coverage = %association.coverage_id,
                "Duplicate package association ignored"
            );
            existing.is_mandatory |= association.is_mandatory;
            continue;
        }

        match catalog.coverage(association.coverage_id) {
            Some(coverage) => {
                lines.push(QuoteLineItem::initialize(coverage, association.is_mandatory, insured_value));
            }
            None => {
                warn!(
                    package = %package_id,
                    coverage = %association.coverage_id,
                    mandatory = association.is_mandatory,
                    "Package association references a coverage missing from the catalog"
                );
                unresolved.push(UnresolvedAssociation {
                    package_id,
                    coverage_id: association.coverage_id,
                    is_mandatory: association.is_mandatory,
                });
            }
        }
    }

    debug!(
        package = %package_id,
        lines = lines.len(),
        unresolved = unresolved.len(),
        "Package resolved"
    );

    PackageResolution {
        package_id,
        lines,
        unresolved,
    }
}
