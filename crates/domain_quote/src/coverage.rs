//! Coverage catalog types
//!
//! Coverages and package associations are maintained by the back-office
//! catalog screens and handed to the quoting core already fetched. From the
//! core's point of view they are read-only.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{CoverageId, Currency, PackageId};
use crate::error::QuoteError;

/// A coverage as defined in the catalog
///
/// Carries the pricing rule (flat base premium or percentage of the sum
/// insured) and the bounds within which a quote may choose its sum insured
/// and deductible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDefinition {
    /// Catalog key
    pub id: CoverageId,
    /// Display name (e.g. "Daños materiales")
    pub name: String,
    /// Currency the coverage amounts are expressed in
    #[serde(default)]
    pub currency: Currency,
    /// Flat premium; blank, null, and zero mean "price by percentage"
    #[serde(default, deserialize_with = "blank_as_none")]
    pub base_premium: Option<Decimal>,
    /// Premium rate applied to the sum insured, in percent
    #[serde(default)]
    pub premium_percentage: Decimal,
    #[serde(default)]
    pub sum_insured_min: Decimal,
    #[serde(default)]
    pub sum_insured_max: Decimal,
    /// Lowest deductible, in percent
    #[serde(default)]
    pub deductible_min: Decimal,
    /// Highest deductible, in percent
    #[serde(default)]
    pub deductible_max: Decimal,
    /// Deductible increment offered to the user
    #[serde(default)]
    pub selection_step: Decimal,
    /// Sum insured follows the vehicle's insured value
    #[serde(default)]
    pub applies_to_insured_value: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Special coverages are shown apart from the package's regular ones
    #[serde(default)]
    pub is_special: bool,
}

impl CoverageDefinition {
    /// Creates a coverage priced as a percentage of the sum insured
    ///
    /// Bounds start collapsed at zero; use the `with_*` methods to open them.
    pub fn percentage(id: CoverageId, name: impl Into<String>, premium_percentage: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            currency: Currency::MXN,
            base_premium: None,
            premium_percentage,
            sum_insured_min: Decimal::ZERO,
            sum_insured_max: Decimal::ZERO,
            deductible_min: Decimal::ZERO,
            deductible_max: Decimal::ZERO,
            selection_step: Decimal::ONE,
            applies_to_insured_value: false,
            description: None,
            is_special: false,
        }
    }

    /// Creates a coverage priced with a flat base premium
    pub fn flat(id: CoverageId, name: impl Into<String>, base_premium: Decimal) -> Self {
        let mut coverage = Self::percentage(id, name, Decimal::ZERO);
        coverage.base_premium = Some(base_premium);
        coverage
    }

    /// Sets the selectable sum insured range
    pub fn with_sum_insured_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.sum_insured_min = min;
        self.sum_insured_max = max;
        self
    }

    /// Sets the selectable deductible range and its increment
    pub fn with_deductible_range(mut self, min: Decimal, max: Decimal, step: Decimal) -> Self {
        self.deductible_min = min;
        self.deductible_max = max;
        self.selection_step = step;
        self
    }

    /// Ties the sum insured to the vehicle's insured value
    pub fn linked_to_insured_value(mut self) -> Self {
        self.applies_to_insured_value = true;
        self
    }

    /// Returns true if the value lies within the sum insured bounds
    pub fn sum_insured_in_range(&self, value: Decimal) -> bool {
        value >= self.sum_insured_min && value <= self.sum_insured_max
    }

    /// Returns true if the value lies within the deductible bounds
    pub fn deductible_in_range(&self, value: Decimal) -> bool {
        value >= self.deductible_min && value <= self.deductible_max
    }

    /// Checks the definition for internal consistency
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::InvalidCoverage` when a range is inverted, an
    /// amount or percentage is negative, the deductible can exceed 100%, or
    /// the deductible range is open but has no positive increment.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if let Some(base_premium) = self.base_premium {
            if base_premium < Decimal::ZERO {
                return Err(QuoteError::invalid_coverage(format!(
                    "{}: negative base premium {}",
                    self.id, base_premium
                )));
            }
        }
        if self.sum_insured_min < Decimal::ZERO {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: negative sum insured {}",
                self.id, self.sum_insured_min
            )));
        }
        if self.sum_insured_min > self.sum_insured_max {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: sum insured min {} exceeds max {}",
                self.id, self.sum_insured_min, self.sum_insured_max
            )));
        }
        if self.deductible_min > self.deductible_max {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: deductible min {} exceeds max {}",
                self.id, self.deductible_min, self.deductible_max
            )));
        }
        if self.deductible_min < Decimal::ZERO {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: negative deductible {}",
                self.id, self.deductible_min
            )));
        }
        if self.deductible_max > Decimal::ONE_HUNDRED {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: deductible max {}% exceeds 100%",
                self.id, self.deductible_max
            )));
        }
        if self.premium_percentage < Decimal::ZERO {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: negative premium percentage {}",
                self.id, self.premium_percentage
            )));
        }
        if self.deductible_min < self.deductible_max && self.selection_step <= Decimal::ZERO {
            return Err(QuoteError::invalid_coverage(format!(
                "{}: deductible range needs a positive selection step",
                self.id
            )));
        }
        Ok(())
    }
}

/// Links a package to one of its coverages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageAssociation {
    pub package_id: PackageId,
    pub coverage_id: CoverageId,
    /// Mandatory coverages cannot be removed from a quote
    #[serde(default)]
    pub is_mandatory: bool,
}

impl PackageAssociation {
    pub fn new(package_id: PackageId, coverage_id: CoverageId, is_mandatory: bool) -> Self {
        Self {
            package_id,
            coverage_id,
            is_mandatory,
        }
    }
}

/// Wire shape of a catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub coverages: Vec<CoverageDefinition>,
    #[serde(default)]
    pub associations: Vec<PackageAssociation>,
}

/// The coverage and package-association catalogs for a quoting session
///
/// Built once from already-fetched data and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct CoverageCatalog {
    coverages: Vec<CoverageDefinition>,
    associations: Vec<PackageAssociation>,
    index: HashMap<CoverageId, usize>,
}

impl CoverageCatalog {
    /// Builds a catalog, validating every coverage definition
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::DuplicateCoverage` if two definitions share an id,
    /// or `QuoteError::InvalidCoverage` if a definition fails validation.
    pub fn new(
        coverages: Vec<CoverageDefinition>,
        associations: Vec<PackageAssociation>,
    ) -> Result<Self, QuoteError> {
        let mut index = HashMap::with_capacity(coverages.len());
        for (position, coverage) in coverages.iter().enumerate() {
            coverage.validate()?;
            if index.insert(coverage.id, position).is_some() {
                return Err(QuoteError::DuplicateCoverage(coverage.id.to_string()));
            }
        }

        Ok(Self {
            coverages,
            associations,
            index,
        })
    }

    /// Parses and validates a JSON catalog document
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Looks up a coverage definition
    pub fn coverage(&self, id: CoverageId) -> Option<&CoverageDefinition> {
        self.index.get(&id).map(|&position| &self.coverages[position])
    }

    /// Looks up a coverage definition, failing if it is absent
    pub fn require_coverage(&self, id: CoverageId) -> Result<&CoverageDefinition, QuoteError> {
        self.coverage(id).ok_or_else(|| QuoteError::coverage_not_found(id))
    }

    pub fn coverages(&self) -> &[CoverageDefinition] {
        &self.coverages
    }

    pub fn associations(&self) -> &[PackageAssociation] {
        &self.associations
    }

    /// Associations of a package, in catalog order
    pub fn associations_for(&self, package_id: PackageId) -> impl Iterator<Item = &PackageAssociation> {
        self.associations
            .iter()
            .filter(move |association| association.package_id == package_id)
    }

    /// Returns true if at least one association references the package
    pub fn has_package(&self, package_id: PackageId) -> bool {
        self.associations_for(package_id).next().is_some()
    }

    /// Distinct package ids, ascending
    pub fn packages(&self) -> Vec<PackageId> {
        let mut packages: Vec<PackageId> = self.associations.iter().map(|a| a.package_id).collect();
        packages.sort();
        packages.dedup();
        packages
    }
}

impl TryFrom<CatalogDocument> for CoverageCatalog {
    type Error = QuoteError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(document.coverages, document.associations)
    }
}

impl From<CoverageCatalog> for CatalogDocument {
    fn from(catalog: CoverageCatalog) -> Self {
        Self {
            coverages: catalog.coverages,
            associations: catalog.associations,
        }
    }
}

/// Accepts a number, a numeric string, a blank string, or null
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Amount(Decimal),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Amount(amount)) => Ok(Some(amount)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
