//! User-driven quote events
//!
//! Each interaction on the coverage-selection step is expressed as a
//! serializable event and applied to the worksheet in order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CoverageId, PackageId};

/// An edit requested by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteEvent {
    /// Replace all line items with the package's coverages
    SelectPackage { package_id: PackageId },

    /// Change a line's sum insured
    EditSumInsured {
        coverage_id: CoverageId,
        sum_insured: Decimal,
    },

    /// Change a line's deductible
    EditDeductible {
        coverage_id: CoverageId,
        deductible: Decimal,
    },

    /// Change the bonus/discount percentage
    EditBonus { bonus_percentage: Decimal },

    /// Drop an optional line
    RemoveLine { coverage_id: CoverageId },
}

impl QuoteEvent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteEvent::SelectPackage { .. } => "select_package",
            QuoteEvent::EditSumInsured { .. } => "edit_sum_insured",
            QuoteEvent::EditDeductible { .. } => "edit_deductible",
            QuoteEvent::EditBonus { .. } => "edit_bonus",
            QuoteEvent::RemoveLine { .. } => "remove_line",
        }
    }
}
