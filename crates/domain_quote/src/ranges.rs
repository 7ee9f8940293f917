//! Dropdown range generation
//!
//! The quoting screens offer sum insured and deductible values as stepped
//! lists. These helpers produce those lists and check membership without
//! any knowledge of the UI component that renders them.

use rust_decimal::Decimal;

use crate::coverage::CoverageDefinition;
use crate::error::QuoteError;

/// Upper bound on the number of values a single range may produce
pub const MAX_RANGE_OPTIONS: usize = 1000;

/// Generates `min, min + step, min + 2·step, …` up to and including `max`
///
/// A collapsed range (`min == max`) yields `[min]` whatever the step. An
/// inverted range yields nothing. `max` itself is only included when it
/// falls on the grid.
///
/// # Errors
///
/// * `QuoteError::InvalidStep` if the step is not positive and the range is open
/// * `QuoteError::RangeTooLarge` if the range would exceed [`MAX_RANGE_OPTIONS`]
pub fn stepped_range(min: Decimal, max: Decimal, step: Decimal) -> Result<Vec<Decimal>, QuoteError> {
    if min > max {
        return Ok(Vec::new());
    }
    if min == max {
        return Ok(vec![min]);
    }
    if step <= Decimal::ZERO {
        return Err(QuoteError::InvalidStep(step));
    }

    let too_large = || QuoteError::RangeTooLarge {
        min,
        max,
        step,
        limit: MAX_RANGE_OPTIONS,
    };

    // An overflowing quotient means far more options than the cap
    let intervals = max
        .checked_sub(min)
        .and_then(|span| span.checked_div(step))
        .ok_or_else(too_large)?
        .floor();
    if intervals >= Decimal::from(MAX_RANGE_OPTIONS) {
        return Err(too_large());
    }

    let mut values = Vec::new();
    let mut value = min;
    while value <= max {
        values.push(value);
        value = match value.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}

/// Returns true if `value` sits on the grid `min + k·step` for some k ≥ 0
///
/// With a non-positive step only `min` itself is on the grid.
pub fn is_on_step(value: Decimal, min: Decimal, step: Decimal) -> bool {
    if value < min {
        return false;
    }
    if step <= Decimal::ZERO {
        return value == min;
    }
    value
        .checked_sub(min)
        .and_then(|offset| offset.checked_rem(step))
        .is_some_and(|remainder| remainder.is_zero())
}

/// Deductible values a coverage offers
pub fn deductible_options(coverage: &CoverageDefinition) -> Result<Vec<Decimal>, QuoteError> {
    stepped_range(coverage.deductible_min, coverage.deductible_max, coverage.selection_step)
}

/// Sum insured values a coverage offers
///
/// Coverages tied to the insured value offer exactly that value.
pub fn sum_insured_options(
    coverage: &CoverageDefinition,
    insured_value: Decimal,
    step: Decimal,
) -> Result<Vec<Decimal>, QuoteError> {
    if coverage.applies_to_insured_value {
        return Ok(vec![insured_value]);
    }
    stepped_range(coverage.sum_insured_min, coverage.sum_insured_max, step)
}
